
//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------
#[derive(Debug, PartialEq, Eq)]
pub struct FakeConn {
    pub id: u32,
}

impl FakeConn {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

pub fn tls_config() -> std::sync::Arc<rustls::ClientConfig> {
    let provider = std::sync::Arc::new(rustls::crypto::ring::default_provider());
    let config = rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .expect("ring supports the default protocol versions")
        .with_root_certificates(rustls::RootCertStore::empty())
        .with_no_client_auth();

    std::sync::Arc::new(config)
}
