//! CLI command implementations.

pub mod crud;
pub mod filter;
pub mod form;

pub use crud::{CrudCommand, CrudOptions};
pub use filter::FilterCommand;
pub use form::FormCommand;
