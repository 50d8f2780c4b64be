//! Cross-locale format tables: postal-code grammars and phone numbering
//! plans. Both are process-wide read-only data behind lazy statics; lookups
//! are pure and lock-free.

pub mod phone;
pub mod postal;

/// Region assumed when a submission declares neither a country nor a dial
/// code. The product launched in the Dutch market; every wizard defaults its
/// locale pickers the same way.
pub const DEFAULT_REGION: &str = "NL";
