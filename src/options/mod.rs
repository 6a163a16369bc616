// Submodules for separation of concerns
mod collation;
mod parse;
mod update;

use std::fmt;

pub use collation::{
    Collation, CollationAlternate, CollationBuilder, CollationCaseFirst, CollationMaxVariable,
    CollationStrength,
};
pub use parse::parse_update_options_json;
pub use update::UpdateOptions;

// Absent values render as `null` in diagnostic strings.
pub(crate) fn fmt_opt<T: fmt::Display>(f: &mut fmt::Formatter<'_>, v: Option<T>) -> fmt::Result {
    match v {
        Some(v) => write!(f, "{v}"),
        None => f.write_str("null"),
    }
}
