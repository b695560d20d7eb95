//! `tower::Service<Uri>` adapter so a [`SingleUseDialer`](crate::dialer::SingleUseDialer)
//! can sit where an HTTP client expects its connector, e.g. `hyper_util`'s
//! legacy `Client`.

mod single_use;


pub use single_use::*;
