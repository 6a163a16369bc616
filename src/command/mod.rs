//! Encoding of finished options into command documents, and the executor seam
//! those documents are handed to.

mod executor;
mod update;

pub use executor::{CommandExecutor, search, update};
pub use update::{UpdateCommand, UpdateModification};
