use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::info;

use crate::http::connection::Connection;
use crate::server::handler::Handler;

/// A running server.
///
/// Created by [`Server::serve`], which binds the listener and returns while
/// the accept loop runs on its own task. [`Server::close`] stops accepting;
/// connections already accepted run to completion.
pub struct Server {
    local_addr: SocketAddr,
    closed: Arc<AtomicBool>,
    shutdown: Arc<Notify>,
    accept_task: Option<JoinHandle<()>>,
}

impl Server {
    pub async fn serve<A, H>(addr: A, handler: H) -> anyhow::Result<Self>
    where
        A: ToSocketAddrs,
        H: Handler,
    {
        let listener = TcpListener::bind(addr).await.context("binding listener")?;
        let local_addr = listener.local_addr()?;
        info!("Listening on {}", local_addr);

        let closed = Arc::new(AtomicBool::new(false));
        let shutdown = Arc::new(Notify::new());

        let accept_task = tokio::spawn(accept_loop(
            listener,
            Arc::new(handler),
            closed.clone(),
            shutdown.clone(),
        ));

        Ok(Self {
            local_addr,
            closed,
            shutdown,
            accept_task: Some(accept_task),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Stops the accept loop and releases the listening socket.
    ///
    /// Returns once the listener is dropped. Calling it again is a no-op.
    pub async fn close(&mut self) -> anyhow::Result<()> {
        self.signal_close();

        if let Some(task) = self.accept_task.take() {
            task.await.context("accept loop panicked")?;
            info!("Stopped listening on {}", self.local_addr);
        }
        Ok(())
    }

    fn signal_close(&self) {
        self.closed.store(true, Ordering::Release);
        // notify_one keeps a permit if the loop is not parked yet
        self.shutdown.notify_one();
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        if self.accept_task.is_some() {
            self.signal_close();
        }
    }
}

async fn accept_loop<H: Handler>(
    listener: TcpListener,
    handler: Arc<H>,
    closed: Arc<AtomicBool>,
    shutdown: Arc<Notify>,
) {
    loop {
        let accepted = tokio::select! {
            biased;
            _ = shutdown.notified() => return,
            res = listener.accept() => res,
        };

        let (socket, peer) = match accepted {
            Ok(conn) => conn,
            Err(e) => {
                if closed.load(Ordering::Acquire) {
                    return;
                }
                tracing::warn!(error = %e, "Error accepting connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let handler = handler.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, peer);
            if let Err(e) = conn.run(handler.as_ref()).await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
