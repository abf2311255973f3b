//! Minimal HTTP/1 serving for a [`SpecService`].
//!
//! Hosts with their own router mount [`SpecService`] or [`SpecHandler`]
//! directly. These helpers are for hosts that only need the document on a
//! socket.
//!
//! [`SpecHandler`]: crate::SpecHandler

use std::future::Future;
use std::io;

use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;

use crate::service::SpecService;

/// Serve HTTP/1 requests on a single connection until it closes.
///
/// # Errors
///
/// Returns the hyper error if the connection fails.
pub async fn serve_connection<I>(io: I, service: SpecService) -> Result<(), hyper::Error>
where
    I: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let result = http1::Builder::new()
        .serve_connection(TokioIo::new(io), service)
        .await;

    if let Err(e) = &result {
        tracing::warn!(error = %e, "specification connection failed");
    }
    result
}

/// Accept connections on `listener` until `shutdown` completes.
///
/// Each connection runs on its own task and shares the service's handler,
/// so the specification is still resolved once for the whole listener.
///
/// # Errors
///
/// Returns an error if the listener's local address cannot be read.
pub async fn serve<F>(listener: TcpListener, service: SpecService, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "serving OpenAPI specification");

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                match result {
                    Ok((stream, remote_addr)) => {
                        let service = service.clone();
                        tokio::spawn(async move {
                            tracing::debug!(%remote_addr, "accepted connection");
                            let _ = serve_connection(stream, service).await;
                        });
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to accept connection");
                    }
                }
            }

            () = &mut shutdown => {
                tracing::info!(%addr, "shutdown signal received, stopping specification server");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpecHandler;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let service = SpecService::new(Arc::new(SpecHandler::default()));

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            serve(listener, service, std::future::ready(())),
        )
        .await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_ok());
    }
}
