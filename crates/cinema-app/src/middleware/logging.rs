use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;

/// LoggingMiddleware - logs every action, registered first
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&self, action: &Action, _dispatcher: &Dispatcher) -> anyhow::Result<()> {
        log::info!("Action: {}", action.type_tag());
        log::debug!("Action payload: {:?}", action);
        Ok(())
    }
}
