use axum::Router;

use crate::logger::Logger;

/// Returns a fresh engine with no routes registered. The composition root
/// registers routes and middleware before handing the finished router to
/// [`Server::new`].
pub fn new_engine<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
}

/// The serving unit: the finished HTTP engine paired with the process
/// logger. Pure aggregation, built once by the composition root.
pub struct Server {
    pub engine: Router,
    pub logger: &'static Logger,
}

impl Server {
    pub fn new(engine: Router, logger: &'static Logger) -> Self {
        Self { engine, logger }
    }
}

#[cfg(test)]
mod server_tests {
    use crate::logger::Logger;

    use super::{Server, new_engine};

    #[test]
    fn it_should_pair_the_engine_with_the_logger() {
        let logger = Logger::init().unwrap();

        let server = Server::new(new_engine(), logger);

        assert!(std::ptr::eq(server.logger, logger));
    }
}
