//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the asset library.

pub mod delete;
pub mod import;
pub mod list;
pub mod relocate;

pub use delete::execute as delete;
pub use import::{execute as import, execute_drop as drop_payload};
pub use list::execute as list;
pub use relocate::execute as relocate;
