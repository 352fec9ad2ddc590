//! Explain registry for matchers.
//!
//! Maps matcher IDs to human-readable explanations with remediation guidance.
//! Catalog identifiers (tables, transactions, ...) are explained by the app layer,
//! which has access to the effective catalog.

use crate::ids;

/// Explanation entry for a matcher.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the matcher.
    pub title: &'static str,
    /// What the matcher recognizes and how precise it is.
    pub description: &'static str,
    /// How to fix usages it reports.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would produce a finding.
    pub before: &'static str,
    /// Code that no longer does.
    pub after: &'static str,
}

/// Look up an explanation by matcher id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::MATCHER_TABLE_STATEMENT => Some(explain_table_statement()),
        ids::MATCHER_CALL_TRANSACTION => Some(explain_call_transaction()),
        ids::MATCHER_SUBMIT_PROGRAM => Some(explain_submit_program()),
        ids::MATCHER_OBJECT_INSTANTIATION => Some(explain_object_instantiation()),
        ids::MATCHER_CLEAR_REFERENCE => Some(explain_clear_reference()),
        ids::MATCHER_ASSIGNMENT_REFERENCE => Some(explain_assignment_reference()),
        ids::MATCHER_BARE_MENTION => Some(explain_bare_mention()),
        _ => None,
    }
}

/// List all known matcher IDs.
pub fn all_matcher_ids() -> &'static [&'static str] {
    ids::ALL_MATCHERS
}

fn explain_table_statement() -> Explanation {
    Explanation {
        title: "Table Access Statement",
        description: "\
Detects Open SQL statements that read or write a deprecated table.

The statement must start with SELECT, INSERT, UPDATE, DELETE or MODIFY and, later in
the same statement, name the table after FROM, INTO, UPDATE or DELETE FROM before the
closing period. The leading keyword does not count as the reference, so
`UPDATE s066 SET ...` is not reported by this matcher. The whole
statement is reported so the reviewer sees the selected fields and conditions.",
        remediation: "\
Rewrite the access against the successor data model. For the credit management
tables S066 and S067 this means reading the corresponding fields of UKM_ITEM.
Tables without a successor must be removed together with the logic that uses them.",
        examples: ExamplePair {
            before: "SELECT SINGLE * FROM s066 INTO ls_s066 WHERE knkli = lv_kunnr.",
            after: "SELECT SINGLE * FROM ukm_item INTO ls_item WHERE partner = lv_partner.",
        },
    }
}

fn explain_call_transaction() -> Explanation {
    Explanation {
        title: "Transaction Call",
        description: "\
Detects CALL TRANSACTION statements that start a deprecated transaction code.

The code may be quoted or not and must close the statement. Calls with additions
such as AND SKIP FIRST SCREEN or USING are not reported.",
        remediation: "\
Call the successor transaction. The blocked-order transactions VKM2, VKM3 and VKM5
are replaced by the documented credit management case handling (UKM_CASE).",
        examples: ExamplePair {
            before: "CALL TRANSACTION 'VKM3'.",
            after: "CALL TRANSACTION 'UKM_CASE'.",
        },
    }
}

fn explain_submit_program() -> Explanation {
    Explanation {
        title: "Program Submit",
        description: "\
Detects SUBMIT statements that run a deprecated report directly by name.

Dynamic submits (SUBMIT (lv_name)) cannot be resolved textually and are not reported.",
        remediation: "\
Remove the call or switch to the successor report. Credit re-organisation reports
such as RVKRED03 have no successor in the new credit management.",
        examples: ExamplePair {
            before: "SUBMIT rvkred03 AND RETURN.",
            after: "\" credit values are maintained by credit management, no resubmit needed",
        },
    }
}

fn explain_object_instantiation() -> Explanation {
    Explanation {
        title: "Object Instantiation",
        description: "\
Detects CREATE OBJECT, NEW and TYPE REF TO constructs that name a deprecated class
anywhere before the closing period.",
        remediation: "\
Remove the reference to the class. Its logging responsibilities moved into credit
management and have no public replacement.",
        examples: ExamplePair {
            before: "DATA lo_log TYPE REF TO cl_cred_val_log.",
            after: "\" reference removed",
        },
    }
}

fn explain_clear_reference() -> Explanation {
    Explanation {
        title: "Clear Of Table-Derived Variable",
        description: "\
Lenient matcher: detects CLEAR statements whose first operand is a work area or
field named after a deprecated table (S066, S066-KLIMK).

This catches leftovers of table usage that the statement matchers cannot see.",
        remediation: "\
Replace the work area with one typed against the successor structure, or remove it.",
        examples: ExamplePair {
            before: "CLEAR s066-oeikw.",
            after: "CLEAR ls_item-amount.",
        },
    }
}

fn explain_assignment_reference() -> Explanation {
    Explanation {
        title: "Assignment With Table-Derived Variable",
        description: "\
Lenient matcher: detects simple assignments (a = b.) where either side is a variable
named after a deprecated table.

Only single-operand assignments are recognized; expressions are ignored.",
        remediation: "\
Map the field to its counterpart in the successor structure.",
        examples: ExamplePair {
            before: "lv_limit = s066-klimk.",
            after: "lv_limit = ls_item-credit_limit.",
        },
    }
}

fn explain_bare_mention() -> Explanation {
    Explanation {
        title: "Bare Mention",
        description: "\
Fallback matcher: reports every occurrence of a deprecated identifier of a configured
category, including a trailing field access (S066-KNKLI). Only the identifier is
reported, not the statement.

This matcher trades precision for recall and is off unless a category is listed
under `bare_mentions` (the `exhaustive` profile lists `table`).",
        remediation: "\
Review the occurrence. Comments and string literals are reported as well and can be
ignored.",
        examples: ExamplePair {
            before: "TABLES: s066.",
            after: "TABLES: ukm_item.",
        },
    }
}
