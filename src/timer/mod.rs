//! Auto-update timer module
//!
//! Runs the periodic filter recomputation on a background thread.
//!
//! # Architecture
//!
//! - `AutoUpdateTimer`: handle to one ticking thread; cancelled on `cancel()` or drop
//! - **Stop channel**: the thread waits on an mpsc receiver with a timeout equal to the
//!   interval; a timeout is a tick, a message or disconnect ends the loop
//! - **Active counter**: shared `AtomicUsize` counting live timer threads, so owners can
//!   check that at most one timer is running
//!
//! # Lifecycle
//!
//! ```text
//! start() → [wait interval → tick]* → cancel()/drop → thread joined
//! ```

pub mod auto_update;

pub use auto_update::AutoUpdateTimer;
