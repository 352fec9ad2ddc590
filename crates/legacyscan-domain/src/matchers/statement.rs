//! Statement-shaped matchers, driven by a table of [`StatementRule`]s.
//!
//! A rule matches from its anchor keyword through the first terminator after the anchor.
//! The object must be found before that terminator. Anchors inside one statement share
//! its terminator, so a run of anchors is scanned in a single pass.

use crate::model::RawMatch;
use crate::scan::{self, Phrase, PhraseHit};
use legacyscan_catalog::Catalog;
use legacyscan_types::{Category, ids};

/// Where the object sits relative to the anchor.
#[derive(Debug)]
pub enum ObjectPlacement {
    /// Right after the anchor, past whitespace and an optional chain colon.
    Immediate {
        /// Accept `'NAME'` / `"NAME"`.
        quoted: bool,
        /// Accept a field-access suffix (`NAME-FIELD`).
        field_suffix: bool,
        /// The object (and its closing quote) must be the last token of the statement.
        closes_statement: bool,
    },
    /// After one of these keywords plus whitespace, somewhere past the anchor.
    AfterReference(&'static [Phrase]),
    /// Any identifier between the anchor and the terminator.
    Anywhere,
}

#[derive(Debug)]
pub struct StatementRule {
    pub id: &'static str,
    pub category: Category,
    pub anchors: &'static [Phrase],
    pub placement: ObjectPlacement,
}

pub static TABLE_STATEMENT: StatementRule = StatementRule {
    id: ids::MATCHER_TABLE_STATEMENT,
    category: Category::Table,
    anchors: &[&["SELECT"], &["INSERT"], &["UPDATE"], &["DELETE"], &["MODIFY"]],
    placement: ObjectPlacement::AfterReference(&[
        &["FROM"],
        &["INTO"],
        &["UPDATE"],
        &["DELETE", "FROM"],
    ]),
};

pub static CALL_TRANSACTION: StatementRule = StatementRule {
    id: ids::MATCHER_CALL_TRANSACTION,
    category: Category::Transaction,
    anchors: &[&["CALL", "TRANSACTION"]],
    placement: ObjectPlacement::Immediate {
        quoted: true,
        field_suffix: false,
        closes_statement: true,
    },
};

pub static SUBMIT_PROGRAM: StatementRule = StatementRule {
    id: ids::MATCHER_SUBMIT_PROGRAM,
    category: Category::Program,
    anchors: &[&["SUBMIT"]],
    placement: ObjectPlacement::Immediate {
        quoted: false,
        field_suffix: false,
        closes_statement: false,
    },
};

pub static OBJECT_INSTANTIATION: StatementRule = StatementRule {
    id: ids::MATCHER_OBJECT_INSTANTIATION,
    category: Category::Class,
    anchors: &[&["CREATE", "OBJECT"], &["NEW"], &["TYPE", "REF", "TO"]],
    placement: ObjectPlacement::Anywhere,
};

pub static CLEAR_REFERENCE: StatementRule = StatementRule {
    id: ids::MATCHER_CLEAR_REFERENCE,
    category: Category::Table,
    anchors: &[&["CLEAR"]],
    placement: ObjectPlacement::Immediate {
        quoted: false,
        field_suffix: true,
        closes_statement: false,
    },
};

impl ObjectPlacement {
    /// A later anchor of the same statement only searches a suffix of what this
    /// placement already searched, so a miss rules out the whole statement.
    fn miss_covers_statement(&self) -> bool {
        matches!(self, Self::AfterReference(_) | Self::Anywhere)
    }
}

impl StatementRule {
    pub fn run(&self, text: &str, catalog: &Catalog, out: &mut Vec<RawMatch>) {
        let bytes = text.as_bytes();
        let mut cursor = 0;
        let mut statement_end: Option<usize> = None;

        while let Some(anchor) = scan::find_phrase(bytes, cursor, bytes.len(), self.anchors) {
            let terminator = match statement_end {
                Some(t) if t >= anchor.end => t,
                _ => match scan::find_terminator(bytes, anchor.end) {
                    Some(t) => t,
                    // No terminator after this anchor means none after any later anchor.
                    None => break,
                },
            };
            statement_end = Some(terminator);

            match self.locate_object(bytes, catalog, anchor, terminator) {
                Some((start, end)) => {
                    out.push(RawMatch {
                        span: anchor.start..terminator + 1,
                        category: self.category,
                        object: text[start..end].to_string(),
                        statement: Some(self.anchors[anchor.index].join(" ")),
                        matcher: self.id,
                    });
                    cursor = terminator + 1;
                }
                None if self.placement.miss_covers_statement() => cursor = terminator + 1,
                None => cursor = anchor.end,
            }
        }
    }

    /// Byte range of the object name inside the statement.
    fn locate_object(
        &self,
        bytes: &[u8],
        catalog: &Catalog,
        anchor: PhraseHit,
        terminator: usize,
    ) -> Option<(usize, usize)> {
        let is_object = |start: usize, end: usize| {
            std::str::from_utf8(&bytes[start..end])
                .is_ok_and(|name| catalog.contains(self.category, name))
        };

        match self.placement {
            ObjectPlacement::Immediate {
                quoted,
                field_suffix,
                closes_statement,
            } => {
                let mut pos = scan::skip_whitespace(bytes, anchor.end);
                if bytes.get(pos) == Some(&b':') {
                    pos = scan::skip_whitespace(bytes, pos + 1);
                }
                if quoted && matches!(bytes.get(pos), Some(b'\'' | b'"')) {
                    pos += 1;
                }
                let end = scan::read_identifier(bytes, pos)?;
                if !is_object(pos, end) {
                    return None;
                }
                let after = if field_suffix {
                    scan::field_suffix_end(bytes, end)
                } else {
                    end
                };
                if after > terminator {
                    return None;
                }
                if closes_statement {
                    let mut tail = after;
                    if quoted && matches!(bytes.get(tail), Some(b'\'' | b'"')) {
                        tail += 1;
                    }
                    if scan::skip_whitespace(bytes, tail) != terminator {
                        return None;
                    }
                }
                Some((pos, end))
            }
            ObjectPlacement::AfterReference(references) => {
                let mut from = anchor.end;
                while let Some(hit) = scan::find_phrase(bytes, from, terminator, references) {
                    let pos = scan::skip_whitespace(bytes, hit.end);
                    if pos > hit.end
                        && let Some(end) = scan::read_identifier(bytes, pos)
                        && is_object(pos, end)
                    {
                        return Some((pos, end));
                    }
                    from = hit.start + 1;
                }
                None
            }
            ObjectPlacement::Anywhere => scan::identifiers(bytes, anchor.end, terminator)
                .find(|&(start, end)| is_object(start, end)),
        }
    }
}
