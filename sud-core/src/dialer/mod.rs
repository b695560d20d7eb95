mod dial;
mod single_use;
mod state;

#[cfg(test)]
mod tests;

pub use dial::*;
pub use single_use::*;
pub use state::*;
