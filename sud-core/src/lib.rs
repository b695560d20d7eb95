//! Single-use dialer.
//!
//! Lets a caller inject a connection it already opened into a component that
//! insists on dialing for itself. The first dial returns the connection, every
//! later dial fails with [`DialError::NoConnReuse`].

#[cfg(feature = "connector")]
pub mod connector;
pub mod dialer;
pub mod error;
pub mod logging;

#[cfg(feature = "connector")]
pub use connector::SingleUseConnector;
pub use dialer::{Dialer, DialerState, SingleUseDialer};
pub use error::{DialError, is_no_conn_reuse};
