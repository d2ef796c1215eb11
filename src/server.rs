//! Embedded HTTP server hosting the API router.
//!
//! The server runs on a spawned task and hands back a handle carrying the
//! bound address and a shutdown channel, so callers can bind to port 0 in
//! tests and stop the server cleanly.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api;
use crate::AppState;

/// Handle for managing the server lifecycle.
pub struct Server {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl Server {
    /// The address the server actually bound.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal the server to stop and wait for in-flight requests to
    /// finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.task.await;
    }
}

/// Bind `addr` and start serving the API in the background.
pub async fn start(addr: &str, state: Arc<AppState>) -> std::io::Result<Server> {
    let app = api::router(state);

    let listener = TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;

    log::info!("Serving API on http://{}", addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                log::info!("Server shutting down");
            })
            .await
            .ok();
    });

    Ok(Server {
        addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
