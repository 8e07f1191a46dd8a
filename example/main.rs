use std::env::var;
use tokio::net::TcpListener;

use ippon::{request::Request, response::Response, server, service::service_fn};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let addr = var("ADDR").unwrap_or_else(|_| {
        let port = var("PORT").unwrap_or_else(|_| "3000".into());
        format!("0.0.0.0:{port}")
    });

    let listener = TcpListener::bind(&addr).await?;
    log::info!("starting server, listen on {addr}");

    server::serve(listener, service_fn(hello)).await
}

async fn hello(mut request: Request, mut response: Response) -> Response {
    log::info!(
        "{} {} {} from {}",
        request.method(),
        request.target(),
        request.version(),
        request.remote_addr(),
    );

    match request.body_mut().collect().await {
        Ok(body) if !body.is_empty() => log::info!("body: {body:?}"),
        Ok(_) => {}
        Err(err) => log::error!("failed to read body: {err}"),
    }

    response.set_status(200);
    response.append_header("Content-Type", "text/plain");
    response.write(b"hello world");
    response
}
