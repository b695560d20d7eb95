use std::fmt;

/// Where a single-use dialer is in its one-way lifecycle.
///
/// `Loaded -> Spent` happens at most once; nothing returns a dialer to `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialerState {
    /// Still holding the connection.
    Loaded,
    /// Connection handed out, or the dialer was built empty.
    Spent,
}

impl DialerState {
    pub fn is_spent(&self) -> bool {
        matches!(self, DialerState::Spent)
    }
}

impl fmt::Display for DialerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialerState::Loaded => f.write_str("loaded"),
            DialerState::Spent => f.write_str("spent"),
        }
    }
}
