//! Runtime - terminal event loop and command execution
//!
//! All side effects happen here: reading terminal events, drawing, and
//! writing the message file. `update` stays pure and returns commands.

pub mod app;

pub use app::App;
