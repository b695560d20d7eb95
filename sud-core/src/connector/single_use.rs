use crate::dialer::SingleUseDialer;
use crate::error::DialError;
use http::Uri;
use std::fmt;
use std::future::{Ready, ready};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower_service::Service;

/// Connector handle backed by a shared [`SingleUseDialer`].
///
/// Clones share the same slot, so the first `call` across all clones gets the
/// connection and every later one fails with [`DialError::NoConnReuse`].
pub struct SingleUseConnector<C> {
    dialer: Arc<SingleUseDialer<C>>,
}

impl<C> SingleUseConnector<C> {
    pub fn new(conn: C) -> Self {
        Self::from_dialer(Arc::new(SingleUseDialer::new(conn)))
    }

    pub fn from_dialer(dialer: Arc<SingleUseDialer<C>>) -> Self {
        Self { dialer }
    }

    pub fn dialer(&self) -> &Arc<SingleUseDialer<C>> {
        &self.dialer
    }
}

impl<C> Clone for SingleUseConnector<C> {
    fn clone(&self) -> Self {
        Self {
            dialer: Arc::clone(&self.dialer),
        }
    }
}

impl<C> fmt::Debug for SingleUseConnector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleUseConnector")
            .field("dialer", &self.dialer)
            .finish()
    }
}

impl<C> Service<Uri> for SingleUseConnector<C> {
    type Response = C;
    type Error = DialError;
    type Future = Ready<Result<C, DialError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, dst: Uri) -> Self::Future {
        let address = dial_address(&dst);
        let result = self.dialer.dial_context("tcp", &address);

        match &result {
            Ok(_) => tracing::debug!(
                address = %address,
                outcome = "handed_off",
                "single-use connection dialed"
            ),
            Err(err) => tracing::warn!(
                address = %address,
                outcome = "refused",
                error = %err,
                "single-use connection already taken"
            ),
        }

        ready(result)
    }
}

/// `host:port` for a request URI; the port falls back to the scheme default.
pub fn dial_address(uri: &Uri) -> String {
    let host = uri.host().unwrap_or_default();
    let port = uri.port_u16().unwrap_or_else(|| match uri.scheme_str() {
        Some("https") | Some("wss") => 443,
        _ => 80,
    });

    format!("{host}:{port}")
}
