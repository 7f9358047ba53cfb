use httpfromtcp::config::Config;
use httpfromtcp::http::connection::ConnectionWriter;
use httpfromtcp::http::response::{StatusCode, default_headers};
use httpfromtcp::http::{Headers, Request};
use httpfromtcp::server::{Handler, Server};

const BAD_REQUEST_PAGE: &str = "<html>
  <head>
    <title>400 Bad Request</title>
  </head>
  <body>
    <h1>Bad Request</h1>
    <p>Your request honestly kinda sucked.</p>
  </body>
</html>";

const SERVER_ERROR_PAGE: &str = "<html>
  <head>
    <title>500 Internal Server Error</title>
  </head>
  <body>
    <h1>Internal Server Error</h1>
    <p>Okay, you know what? This one is on me.</p>
  </body>
</html>";

const OK_PAGE: &str = "<html>
  <head>
    <title>200 OK</title>
  </head>
  <body>
    <h1>Success!</h1>
    <p>Your request was an absolute banger.</p>
  </body>
</html>";

struct Demo;

impl Demo {
    async fn page(w: &mut ConnectionWriter, status: StatusCode, page: &str) -> anyhow::Result<()> {
        w.write_status_line(status).await?;
        w.write_headers(&default_headers(page.len())).await?;
        w.write_body(page.as_bytes()).await?;
        Ok(())
    }

    async fn chunked(w: &mut ConnectionWriter) -> anyhow::Result<()> {
        w.write_status_line(StatusCode::Ok).await?;

        let mut headers = default_headers(0);
        headers.remove("Content-Length");
        headers.replace("Content-Type", "text/plain");
        headers.set("Transfer-Encoding", "chunked");
        headers.set("Trailer", "X-Content-Length");
        w.write_headers(&headers).await?;

        let mut total = 0;
        for i in 1..=5 {
            let line = format!("chunk number {i}\n");
            total += w.write_chunked_body(line.as_bytes()).await?;
        }
        w.write_chunked_body_done().await?;

        let mut trailers = Headers::new();
        trailers.set("X-Content-Length", &total.to_string());
        w.write_trailers(&trailers).await?;
        Ok(())
    }
}

impl Handler for Demo {
    async fn handle(&self, w: &mut ConnectionWriter, req: &Request) -> anyhow::Result<()> {
        match req.target() {
            "/yourproblem" => Self::page(w, StatusCode::BadRequest, BAD_REQUEST_PAGE).await,
            "/myproblem" => Self::page(w, StatusCode::InternalServerError, SERVER_ERROR_PAGE).await,
            "/chunked" => Self::chunked(w).await,
            _ => Self::page(w, StatusCode::Ok, OK_PAGE).await,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.tracing_level())
        .init();

    let mut server = Server::serve(&cfg.listen_addr, Demo).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    server.close().await?;
    Ok(())
}
