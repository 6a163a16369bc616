use bson::{Document, doc};

use crate::errors::DbError;

use super::update::UpdateCommand;

const LOG_TARGET: &str = "nexus_model::command";

/// The collaborator that ships finished commands to a server.
///
/// Implementations own transport, authentication, retries and sessions, and
/// they interpret the reply: server-side rejections are theirs to report. The
/// command must be treated as read-only.
pub trait CommandExecutor {
    /// # Errors
    /// Whatever the executor reports; this crate passes it through unchanged.
    fn run_command(&self, db: &str, command: Document) -> Result<Document, DbError>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &E {
    fn run_command(&self, db: &str, command: Document) -> Result<Document, DbError> {
        (**self).run_command(db, command)
    }
}

/// Encodes `cmd` and hands it to `executor`. The reply is returned as received.
///
/// # Errors
/// Returns the executor's error unchanged.
pub fn update<E: CommandExecutor + ?Sized>(
    executor: &E,
    db: &str,
    cmd: &UpdateCommand,
) -> Result<Document, DbError> {
    log::debug!(
        target: LOG_TARGET,
        "update: db={db}, collection={}, multi={}, options={}",
        cmd.collection(),
        cmd.is_multi(),
        cmd.get_options()
    );
    executor.run_command(db, cmd.to_document())
}

/// Wraps `stage` in a single-stage `aggregate` command and hands it to `executor`.
///
/// # Errors
/// Returns the executor's error unchanged.
pub fn search<E: CommandExecutor + ?Sized>(
    executor: &E,
    db: &str,
    collection: &str,
    stage: Document,
) -> Result<Document, DbError> {
    log::debug!(target: LOG_TARGET, "search: db={db}, collection={collection}, stage={stage}");
    let command = doc! {
        "aggregate": collection,
        "pipeline": [stage],
        "cursor": {},
    };
    executor.run_command(db, command)
}
