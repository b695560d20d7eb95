pub mod client;
pub mod tracing;
pub mod upstream;

pub use self::client::{TestClient, injected_client};
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};
pub use self::upstream::TestUpstream;
