//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the workspace root.

pub mod init;
pub mod validate;
pub mod view;

// Re-export execute functions for convenience
pub use init::execute as init;
pub use validate::execute as validate;
pub use view::execute as view;
