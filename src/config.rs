/// Connection parameters for the relational store.
///
/// Values are fixed defaults; nothing reads them from files or the
/// environment. The struct is built once at startup and handed to the
/// connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db_name: String,
    pub ssl_mode: String,
}

impl DatabaseConfig {
    pub fn new() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "user".into(),
            password: "password".into(),
            db_name: "dbname".into(),
            ssl_mode: "disable".into(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new()
    }
}
