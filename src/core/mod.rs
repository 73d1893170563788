//! Core application primitives (cycle, scheduling, command handling)

pub mod commands;
pub mod cycle;
pub mod http;
pub mod runtime;
pub mod scheduler;
pub mod state;

pub use commands::*;
pub use cycle::*;
pub use http::*;
pub use runtime::*;
pub use scheduler::*;
pub use state::*;
