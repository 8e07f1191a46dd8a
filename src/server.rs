//! TCP Server Runtime.
use bytes::BytesMut;
use std::{io, net::SocketAddr, sync::Arc};
use tokio::{
    io::{AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
};

use crate::{
    body::{Body, BodyInner},
    error::Error,
    log::{debug, error, info},
    request::{Parts, Request, parser},
    response::{Response, write},
    service::Service,
};

/// Long-lived acceptance loop with an injected per-connection [`Service`].
///
/// Every accepted stream is handed to its own task. Tasks share nothing
/// but the service; request and response state never crosses connections.
#[derive(Debug)]
pub struct Server<S> {
    listener: TcpListener,
    service: Arc<S>,
}

impl<S> Server<S>
where
    S: Service + Send + Sync + 'static,
{
    /// Create a [`Server`] from a bound listener and a service.
    pub fn new(listener: TcpListener, service: S) -> Self {
        Self {
            listener,
            service: Arc::new(service),
        }
    }

    /// Accept connections forever, spawning one task per connection.
    pub async fn serve(self) -> io::Result<()> {
        if let Ok(addr) = self.listener.local_addr() {
            info!("listening on {addr}");
        }

        loop {
            let (stream, addr) = match self.listener.accept().await {
                Ok(ok) => ok,
                Err(err) => {
                    error!("failed to accept connection: {err}");
                    continue;
                }
            };

            tokio::spawn(handle(stream, addr, Arc::clone(&self.service)));
        }
    }
}

/// Serve `service` on `listener`.
///
/// Convenience for [`Server::new`] plus [`Server::serve`].
pub async fn serve<S>(listener: TcpListener, service: S) -> io::Result<()>
where
    S: Service + Send + Sync + 'static,
{
    Server::new(listener, service).serve().await
}

async fn handle<S: Service>(stream: TcpStream, addr: SocketAddr, service: Arc<S>) {
    debug!("connection from {addr}");

    match try_handle(stream, addr, service).await {
        Ok(()) => debug!("connection done"),
        // nothing was or will be written back, the close is the whole answer
        Err(err) => error!("{err}"),
    }
}

/// Process one connection in strict order: parse, call the service once,
/// write the rendered response, drain the body remainder, close.
async fn try_handle<S: Service>(
    stream: TcpStream,
    addr: SocketAddr,
    service: Arc<S>,
) -> Result<(), Error> {
    let (read, mut write_io) = stream.into_split();
    let mut io = BufReader::new(read);

    let (method, target, version) = parser::request_line(&mut io).await?;
    let headers = parser::header_block(&mut io).await?;
    let length = parser::content_length(&headers)?;

    let inner = Arc::new(BodyInner::new(io, length));
    let parts = Parts {
        remote_addr: addr.to_string(),
        method,
        target,
        version,
        headers,
    };
    let request = Request::from_parts(parts, Body::from_shared(Arc::clone(&inner)));

    let response = service.call(request, Response::new()).await;

    let mut bufm = BytesMut::with_capacity(1024);
    write::encode(&response, &mut bufm);
    let written = write_io.write_all(&bufm).await.map_err(Error::Write);

    // unread body bytes must not be left on the stream, written or not
    inner.drain().await.map_err(Error::Read)?;
    written?;

    write_io.shutdown().await.map_err(Error::Write)?;
    Ok(())
}
