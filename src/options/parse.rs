use crate::errors::DbError;

use super::update::UpdateOptions;

/// Parses update options written with their command field names
/// (`upsert`, `bypassDocumentValidation`, `collation`, `arrayFilters`, `hint`,
/// `hintString`, `comment`, `let`, `sort`).
///
/// # Errors
/// Returns an error if the JSON string cannot be parsed into update options.
pub fn parse_update_options_json(json: &str) -> Result<UpdateOptions, DbError> {
    let opts: UpdateOptions = serde_json::from_str(json)?;
    Ok(opts)
}
