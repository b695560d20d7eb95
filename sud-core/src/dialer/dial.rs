use crate::dialer::SingleUseDialer;
use crate::error::DialError;
use async_trait::async_trait;
use rustls::ClientConfig;
use std::sync::Arc;

/// The two dial conventions HTTP client stacks expect: a plain dial and a
/// TLS-flavored dial that carries a client config.
#[async_trait]
pub trait Dialer: Send + Sync {
    type Conn: Send;

    async fn dial(&self, network: &str, address: &str) -> Result<Self::Conn, DialError>;

    /// Defaults to a plain [`dial`](Dialer::dial) with `tls` discarded.
    async fn dial_tls(
        &self,
        network: &str,
        address: &str,
        _tls: Option<Arc<ClientConfig>>,
    ) -> Result<Self::Conn, DialError> {
        self.dial(network, address).await
    }
}

#[async_trait]
impl<C> Dialer for SingleUseDialer<C>
where
    C: Send,
{
    type Conn = C;

    async fn dial(&self, network: &str, address: &str) -> Result<C, DialError> {
        self.dial_context(network, address)
    }
}

#[async_trait]
impl<D> Dialer for Arc<D>
where
    D: Dialer + ?Sized,
{
    type Conn = D::Conn;

    async fn dial(&self, network: &str, address: &str) -> Result<D::Conn, DialError> {
        (**self).dial(network, address).await
    }

    async fn dial_tls(
        &self,
        network: &str,
        address: &str,
        tls: Option<Arc<ClientConfig>>,
    ) -> Result<D::Conn, DialError> {
        (**self).dial_tls(network, address, tls).await
    }
}
