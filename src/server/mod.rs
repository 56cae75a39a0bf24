pub mod config;
pub mod connection;
pub mod response;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::error::{Error, Result};

pub use config::{Dialect, Framing, ServerConfig};
pub use connection::handle_connection;
pub use response::{respond, Response, PARSING_ERROR};

/// Accepts clients and serves each one on its own task.
pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
    limiter: Option<Arc<Semaphore>>,
}

impl Server {
    pub async fn bind(config: ServerConfig) -> Result<Self> {
        config.validate()?;

        let addr = config.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        let limiter = config
            .max_connections
            .map(|limit| Arc::new(Semaphore::new(limit)));

        Ok(Self {
            listener,
            config: Arc::new(config),
            limiter,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs the accept loop until `shutdown` resolves. Connections already
    /// being served are left to finish on their own tasks.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        info!(
            addr = %self.local_addr()?,
            dialect = ?self.config.dialect,
            framing = ?self.config.framing,
            "server is running"
        );

        loop {
            // Wait for a free slot before accepting when connections are capped.
            let permit = match &self.limiter {
                Some(limiter) => tokio::select! {
                    permit = Arc::clone(limiter).acquire_owned() => match permit {
                        Ok(permit) => Some(permit),
                        Err(_) => break,
                    },
                    _ = &mut shutdown => break,
                },
                None => None,
            };

            tokio::select! {
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        let config = Arc::clone(&self.config);
                        tokio::spawn(async move {
                            let _permit = permit;
                            info!(%peer, "client connected");
                            match handle_connection(stream, &config).await {
                                Ok(answered) => info!(%peer, answered, "client disconnected"),
                                Err(e) => warn!(%peer, error = %e, "connection closed with error"),
                            }
                        });
                    }
                    Err(e) => error!(error = %e, "accept error"),
                },
                _ = &mut shutdown => break,
            }
        }

        info!("server stopped accepting connections");
        Ok(())
    }
}
