use sqlx::PgPool;

/// State shared with the HTTP handlers.
///
/// `db` is `None` when the startup connection attempt failed and the
/// process is serving in degraded mode.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<PgPool>,
}
