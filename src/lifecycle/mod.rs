//! Process lifecycle: shutdown coordination and OS signals.

pub mod shutdown;

pub use shutdown::{Shutdown, ShutdownSignal, wait_for_signal};
