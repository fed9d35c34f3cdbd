//! HTTP/JSON RPC server exposing the counter store.

pub mod error;
pub mod health;
pub mod router;
pub mod shutdown;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::server::router::build_router;
use crate::server::shutdown::ShutdownManager;
use crate::store::SharedStore;

pub use error::ApiError;
pub use health::HealthStatus;

pub struct CounterServer {
    addr: SocketAddr,
    /// Bound in [`CounterServer::bind`] so the port is held until `run`.
    listener: TcpListener,
    store: SharedStore,
    shutdown: Arc<ShutdownManager>,
}

impl CounterServer {
    pub async fn bind(addr: SocketAddr, store: SharedStore) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        tracing::info!("Counter server bound to {}", addr);
        Ok(Self {
            addr,
            listener,
            store,
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Actual bound address (resolves port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until a shutdown signal arrives, then drain in-flight requests.
    pub async fn run(self) -> std::io::Result<()> {
        tracing::info!("Starting counter server on {}", self.addr);

        let app = build_router(self.store);
        let shutdown = self.shutdown.clone();
        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move { shutdown.wait_for_shutdown().await })
            .into_future()
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
