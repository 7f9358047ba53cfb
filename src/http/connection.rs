use std::net::SocketAddr;

use anyhow::Context;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::reader::request_from_reader;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::{ResponseWriter, WriterState};
use crate::server::handler::Handler;

/// Response writer bound to a client connection.
pub type ConnectionWriter = ResponseWriter<TcpStream>;

/// A single accepted client connection.
///
/// Serves exactly one request: read and frame it, hand it to the handler,
/// then close the socket whatever the outcome.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr) -> Self {
        Self { stream, peer }
    }

    pub async fn run<H: Handler>(self, handler: &H) -> anyhow::Result<()> {
        let Connection { mut stream, peer } = self;

        let parsed = request_from_reader(&mut stream).await;
        let mut writer = ResponseWriter::new(stream);

        let outcome = match parsed {
            Ok(request) => {
                tracing::info!(
                    %peer,
                    method = %request.method(),
                    target = %request.target(),
                    "Request received"
                );
                Self::dispatch(handler, &mut writer, &request).await
            }

            Err(e) => {
                // Malformed request: best-effort 400, nothing is retried
                tracing::warn!(%peer, error = %e, "Rejecting request");
                writer
                    .write_response(&Response::bad_request(e.to_string()))
                    .await
                    .context("writing 400 response")
            }
        };

        let written = writer.bytes_written();
        let mut stream = writer.into_inner();
        if let Err(e) = stream.shutdown().await {
            tracing::debug!(%peer, error = %e, "Shutdown after response failed");
        }
        tracing::debug!(%peer, body_bytes = written, "Connection closed");

        outcome
    }

    async fn dispatch<H: Handler>(
        handler: &H,
        writer: &mut ConnectionWriter,
        request: &Request,
    ) -> anyhow::Result<()> {
        let Err(e) = handler.handle(writer, request).await else {
            return Ok(());
        };

        // Nothing reached the peer yet, so a 500 can still be framed. A
        // writer that failed mid-response is in `Failed` and is left alone.
        if writer.state() == WriterState::StatusLine {
            if let Err(write_err) = writer
                .write_response(&Response::internal_error(e.to_string()))
                .await
            {
                tracing::error!(error = %write_err, "Failed to write 500 response");
            }
        }

        Err(e.context("handler failed"))
    }
}
