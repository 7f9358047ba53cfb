use std::future::Future;

use crate::http::connection::ConnectionWriter;
use crate::http::request::Request;

/// Application logic invoked once per parsed request.
///
/// The handler owns the response: it must drive the writer through its
/// states in order. Errors are logged by the server; if the handler fails
/// before writing a status line, a `500` carrying the error text is sent.
///
/// # Example
///
/// ```ignore
/// struct Hello;
///
/// impl Handler for Hello {
///     async fn handle(&self, w: &mut ConnectionWriter, req: &Request) -> anyhow::Result<()> {
///         let body = format!("hello from {}", req.target());
///         w.write_status_line(StatusCode::Ok).await?;
///         w.write_headers(&default_headers(body.len())).await?;
///         w.write_body(body.as_bytes()).await?;
///         Ok(())
///     }
/// }
/// ```
pub trait Handler: Send + Sync + 'static {
    fn handle(
        &self,
        writer: &mut ConnectionWriter,
        request: &Request,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
