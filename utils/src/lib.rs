//! Shared infrastructure utilities for microbench.
//!
//! - **`atomic_write`**: crash-safe report persistence (temp + rename)

pub mod atomic_write;

pub use atomic_write::atomic_write;
