//! Child process execution

pub mod subprocess;

pub use subprocess::{dispatch, DispatchRequest, StdioMode};
