use http_body_util::BodyExt;
use integration_tests::harness::{TestUpstream, injected_client};
use pretty_assertions::assert_eq;
use std::time::Duration;
use sud_core::{DialError, DialerState, is_no_conn_reuse};

#[tokio::test]
async fn client_request_uses_injected_connection() {
    // Arrange
    let upstream = TestUpstream::start().await;
    let (client, connector) = injected_client(upstream.connect().await);

    // Act
    let res = client
        .get(upstream.url("/").parse().unwrap())
        .await
        .expect("request failed");

    // Assert
    assert_eq!(res.status(), 200);
    let body = res.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"hello world");
    assert_eq!(connector.dialer().state(), DialerState::Spent);
}

#[tokio::test]
async fn new_authority_fails_with_no_conn_reuse() {
    // Arrange
    let upstream = TestUpstream::start().await;
    let other = TestUpstream::start().await;
    let (client, _connector) = injected_client(upstream.connect().await);
    let res = client
        .get(upstream.url("/").parse().unwrap())
        .await
        .expect("first request failed");
    res.into_body().collect().await.unwrap();

    // Act: a different authority forces the client to dial again
    let err = client
        .get(other.url("/").parse().unwrap())
        .await
        .expect_err("second dial should fail");

    // Assert
    assert!(err.is_connect());
    assert!(is_no_conn_reuse(&err));
}

#[tokio::test]
async fn follow_up_request_reuses_pooled_connection() {
    // Arrange
    let upstream = TestUpstream::start().await;
    let (client, _connector) = injected_client(upstream.connect().await);
    let first = client
        .get(upstream.url("/a").parse().unwrap())
        .await
        .expect("first request failed");
    first.into_body().collect().await.unwrap();

    // Give the pool a moment to take the idle connection back.
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Act
    let second = client
        .get(upstream.url("/b").parse().unwrap())
        .await
        .expect("pooled request failed");

    // Assert
    assert_eq!(second.status(), 200);
}

#[tokio::test]
async fn injected_connection_is_the_one_opened_out_of_band() {
    // Arrange
    let upstream = TestUpstream::start().await;
    let stream = upstream.connect().await;
    let expected = stream.local_addr().unwrap();
    let (_client, connector) = injected_client(stream);

    // Act
    let conn = connector
        .dialer()
        .dial_context("udp", "different.host:8080")
        .expect("first dial should succeed");
    let again = connector.dialer().dial_context("tcp", &upstream.addr().to_string());

    // Assert
    assert_eq!(conn.inner().local_addr().unwrap(), expected);
    assert_eq!(again.err(), Some(DialError::NoConnReuse));
}
