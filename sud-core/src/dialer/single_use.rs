use crate::dialer::DialerState;
use crate::error::DialError;
use rustls::ClientConfig;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Hands a pre-established connection to the first caller that dials.
///
/// Every later dial, from any thread, fails with [`DialError::NoConnReuse`].
/// The network, address, and TLS arguments exist only to match the calling
/// conventions HTTP client connectors expect; they never affect the result.
///
/// Invariants:
/// - The connection is handed out at most once over the dialer's lifetime
/// - Once the slot is empty it stays empty
pub struct SingleUseDialer<C> {
    slot: Mutex<Option<C>>,
}

impl<C> SingleUseDialer<C> {
    /// Wrap an already-open connection.
    pub fn new(conn: C) -> Self {
        Self {
            slot: Mutex::new(Some(conn)),
        }
    }

    /// A dialer with nothing to give. Behaves exactly like a spent one.
    pub fn empty() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Take the connection if it is still here.
    ///
    /// `network` and `address` are ignored. Never blocks beyond brief
    /// contention on the slot lock.
    pub fn dial_context(&self, _network: &str, _address: &str) -> Result<C, DialError> {
        self.lock_slot().take().ok_or(DialError::NoConnReuse)
    }

    /// Same as [`dial_context`](Self::dial_context); `tls` is ignored.
    pub fn dial_tls_context(
        &self,
        network: &str,
        address: &str,
        _tls: Option<Arc<ClientConfig>>,
    ) -> Result<C, DialError> {
        self.dial_context(network, address)
    }

    pub fn state(&self) -> DialerState {
        if self.lock_slot().is_some() {
            DialerState::Loaded
        } else {
            DialerState::Spent
        }
    }

    pub fn is_spent(&self) -> bool {
        self.state().is_spent()
    }

    // `Option::take` is a single move, so a poisoned lock never hides a
    // half-updated slot.
    fn lock_slot(&self) -> MutexGuard<'_, Option<C>> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<C> From<Option<C>> for SingleUseDialer<C> {
    fn from(conn: Option<C>) -> Self {
        Self {
            slot: Mutex::new(conn),
        }
    }
}

impl<C> Default for SingleUseDialer<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> fmt::Debug for SingleUseDialer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleUseDialer")
            .field("state", &self.state())
            .finish()
    }
}
