//! Lenient matcher for `lhs = rhs.` where either operand is a table-derived variable.

use crate::model::RawMatch;
use crate::scan;
use legacyscan_catalog::Catalog;
use legacyscan_types::{Category, ids};

fn is_operand_byte(b: u8) -> bool {
    scan::is_word_byte(b) || b == b'-' || b == b'>'
}

pub fn run(text: &str, catalog: &Catalog, out: &mut Vec<RawMatch>) {
    let bytes = text.as_bytes();
    let mut last_end = 0;

    for (eq, _) in bytes.iter().enumerate().filter(|&(_, &b)| b == b'=') {
        let Some((lhs, rhs, terminator)) = operands(bytes, eq) else {
            continue;
        };
        if lhs.start < last_end {
            continue;
        }

        let object = table_variable(bytes, catalog, lhs.clone())
            .or_else(|| table_variable(bytes, catalog, rhs.clone()));
        if let Some(object) = object {
            out.push(RawMatch {
                span: lhs.start..terminator + 1,
                category: Category::Table,
                object: text[object].to_string(),
                statement: Some("=".to_string()),
                matcher: ids::MATCHER_ASSIGNMENT_REFERENCE,
            });
            last_end = terminator + 1;
        }
    }
}

type Operand = std::ops::Range<usize>;

/// Operands around the `=` at `eq`, plus the terminator that must directly follow `rhs`.
fn operands(bytes: &[u8], eq: usize) -> Option<(Operand, Operand, usize)> {
    let mut lhs_end = eq;
    while lhs_end > 0 && bytes[lhs_end - 1].is_ascii_whitespace() {
        lhs_end -= 1;
    }
    let mut lhs_start = lhs_end;
    while lhs_start > 0 && is_operand_byte(bytes[lhs_start - 1]) {
        lhs_start -= 1;
    }

    let rhs_start = scan::skip_whitespace(bytes, eq + 1);
    let mut rhs_end = rhs_start;
    while bytes.get(rhs_end).copied().is_some_and(is_operand_byte) {
        rhs_end += 1;
    }

    let terminator = scan::skip_whitespace(bytes, rhs_end);
    let valid = lhs_start < lhs_end
        && rhs_start < rhs_end
        && bytes.get(terminator) == Some(&scan::TERMINATOR);
    valid.then_some((lhs_start..lhs_end, rhs_start..rhs_end, terminator))
}

/// Range of the table name when `operand` is `TABLE` or `TABLE-FIELD...`.
fn table_variable(bytes: &[u8], catalog: &Catalog, operand: Operand) -> Option<Operand> {
    let end = scan::read_identifier(bytes, operand.start)?;
    let name = std::str::from_utf8(&bytes[operand.start..end]).ok()?;
    if !catalog.contains(Category::Table, name) {
        return None;
    }
    (scan::field_suffix_end(bytes, end) == operand.end).then_some(operand.start..end)
}
