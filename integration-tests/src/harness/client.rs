use bytes::Bytes;
use http_body_util::Empty;
use hyper_util::client::legacy::Client;
use hyper_util::rt::{TokioExecutor, TokioIo};
use sud_core::SingleUseConnector;
use tokio::net::TcpStream;

pub type InjectedConn = TokioIo<TcpStream>;
pub type TestClient = Client<SingleUseConnector<InjectedConn>, Empty<Bytes>>;

/// Build a hyper client whose only way to reach the network is `stream`.
pub fn injected_client(stream: TcpStream) -> (TestClient, SingleUseConnector<InjectedConn>) {
    let connector = SingleUseConnector::new(TokioIo::new(stream));
    let client = Client::builder(TokioExecutor::new()).build(connector.clone());

    (client, connector)
}
