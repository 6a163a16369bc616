//! Construction of server-bound commands for a document database client.
//!
//! Two independent pieces live here:
//! - [`options::UpdateOptions`], the optional modifiers of one update command.
//! - [`search`], a sealed family of search operators that keep their concrete
//!   type when re-scored.
//!
//! Both are plain values. [`command`] turns them into command documents and
//! hands those to a [`command::CommandExecutor`] supplied by the caller.

pub mod command;
pub mod config;
pub mod errors;
pub mod logger;
pub mod options;
pub mod search;

pub use command::{CommandExecutor, UpdateCommand, UpdateModification};
pub use errors::DbError;
pub use options::{Collation, UpdateOptions};
pub use search::{SearchOperator, SearchOperatorNode, SearchScore};
