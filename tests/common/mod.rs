//! Shared test utilities and fake remotes.

#![allow(dead_code, unused_imports)]

pub mod fake_remote;

use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;

use tally::client::HttpCounterClient;
use tally::config::ClientConfig;
use tally::server::{CounterServer, ServerHandle};
use tally::store::{SharedStore, SqliteCounterStore};
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL of a port nothing is listening on.
pub fn dead_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn memory_store() -> SharedStore {
    SharedStore::new(SqliteCounterStore::in_memory().expect("in-memory store"))
}

/// A running server plus what tests need to talk to and stop it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
    pub store: SharedStore,
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    pub async fn start(store: SharedStore) -> Self {
        let server = CounterServer::bind("127.0.0.1:0".parse().unwrap(), store.clone())
            .await
            .expect("Failed to bind test server");
        let addr = server.local_addr();
        let base_url = server.base_url();
        let handle = server.handle();
        let task = tokio::spawn(server.run());
        Self {
            addr,
            base_url,
            store,
            handle,
            task,
        }
    }

    pub fn client(&self) -> HttpCounterClient {
        client_for(&self.base_url)
    }

    pub async fn stop(self) -> std::io::Result<()> {
        self.handle.shutdown();
        tokio::time::timeout(std::time::Duration::from_secs(5), self.task)
            .await
            .expect("server did not stop")
            .expect("server task panicked")
    }
}

pub fn client_for(base_url: &str) -> HttpCounterClient {
    HttpCounterClient::new(&ClientConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    })
    .expect("client")
}

/// Temp dir holding a database path that does not exist yet.
pub fn temp_db() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("data").join("tally.db");
    (dir, path)
}
