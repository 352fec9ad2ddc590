//! Stable identifiers for matchers.
//!
//! Matcher IDs share the `usage.` namespace and are referenced from config files,
//! emitted records, and `legacyscan explain`.

// Statement-shaped matchers
pub const MATCHER_TABLE_STATEMENT: &str = "usage.table_statement";
pub const MATCHER_CALL_TRANSACTION: &str = "usage.call_transaction";
pub const MATCHER_SUBMIT_PROGRAM: &str = "usage.submit_program";
pub const MATCHER_OBJECT_INSTANTIATION: &str = "usage.object_instantiation";

// Lenient matchers
pub const MATCHER_CLEAR_REFERENCE: &str = "usage.clear_reference";
pub const MATCHER_ASSIGNMENT_REFERENCE: &str = "usage.assignment_reference";

// Identifier-only fallback
pub const MATCHER_BARE_MENTION: &str = "usage.bare_mention";

/// Matcher IDs in evaluation order. Order decides which matcher wins an exact-span tie.
pub const ALL_MATCHERS: &[&str] = &[
    MATCHER_TABLE_STATEMENT,
    MATCHER_CALL_TRANSACTION,
    MATCHER_SUBMIT_PROGRAM,
    MATCHER_OBJECT_INSTANTIATION,
    MATCHER_CLEAR_REFERENCE,
    MATCHER_ASSIGNMENT_REFERENCE,
    MATCHER_BARE_MENTION,
];

/// Default key under which usage records are attached to each unit.
pub const DEFAULT_OUTPUT_FIELD: &str = "mb_txn_usage";
