use std::error::Error as StdError;
use std::io;

/// Errors returned by a dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DialError {
    /// The dialer's one connection has already been handed out
    /// (or it never held one).
    #[error("cannot reuse connection")]
    NoConnReuse,
}

impl DialError {
    pub fn is_no_conn_reuse(&self) -> bool {
        matches!(self, DialError::NoConnReuse)
    }
}

impl From<DialError> for io::Error {
    fn from(err: DialError) -> Self {
        io::Error::other(err)
    }
}

/// Returns true if `err`, or anything it wraps, is [`DialError::NoConnReuse`].
///
/// Walks the `source()` chain. `io::Error` does not report its custom payload
/// as a source, so payloads are inspected explicitly.
pub fn is_no_conn_reuse(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);

    while let Some(err) = current {
        if let Some(dial) = err.downcast_ref::<DialError>() {
            return dial.is_no_conn_reuse();
        }

        if let Some(payload) = err
            .downcast_ref::<io::Error>()
            .and_then(|io_err| io_err.get_ref())
            && is_no_conn_reuse(payload)
        {
            return true;
        }

        current = err.source();
    }

    false
}
