//! Web server for corkboard.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::{CorkboardError, DbPool, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the boards API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Configured router.
    router: Router,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &Config, pool: DbPool) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|_| {
                CorkboardError::Config(format!(
                    "invalid server address {}:{}",
                    config.server.host, config.server.port
                ))
            })?;

        let app_state = Arc::new(AppState::new(pool));
        let router = create_router(app_state, &config.server, &config.cache);

        Ok(Self { addr, router })
    }

    /// Run the server until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        info!("Web server listening on {}", self.addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn test_new_with_default_config() {
        let pool = db::connect_in_memory().await.unwrap();
        let server = WebServer::new(&Config::default(), pool).unwrap();
        assert_eq!(server.addr.port(), 8080);
    }

    #[tokio::test]
    async fn test_new_with_invalid_address() {
        let pool = db::connect_in_memory().await.unwrap();
        let mut config = Config::default();
        config.server.host = "not an address".to_string();

        let result = WebServer::new(&config, pool);
        assert!(matches!(result, Err(CorkboardError::Config(_))));
    }
}
