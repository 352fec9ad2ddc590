//! Text-scanning predicates shared by all matchers.
//!
//! Everything here works on byte offsets. Keywords, identifiers and the terminator are
//! ASCII, so every offset returned lands on a `char` boundary of the scanned `&str`.
//! Word bytes are ASCII letters, digits and `_`; anything else (including non-ASCII)
//! separates words.

/// End-of-statement marker.
pub const TERMINATOR: u8 = b'.';

/// A keyword phrase such as `["CALL", "TRANSACTION"]`. Words are separated by at
/// least one whitespace byte in the scanned text.
pub type Phrase = &'static [&'static str];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseHit {
    pub start: usize,
    pub end: usize,
    /// Index of the matching phrase in the searched list.
    pub index: usize,
}

pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// True when a word can begin at `pos`.
pub fn at_word_start(bytes: &[u8], pos: usize) -> bool {
    pos == 0 || !bytes.get(pos - 1).copied().is_some_and(is_word_byte)
}

/// True when a word ending at `pos` is complete.
pub fn at_word_end(bytes: &[u8], pos: usize) -> bool {
    !bytes.get(pos).copied().is_some_and(is_word_byte)
}

pub fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(|b| b.is_ascii_whitespace()) {
        pos += 1;
    }
    pos
}

/// End of the identifier starting at `pos`, if a whole word starts there.
pub fn read_identifier(bytes: &[u8], pos: usize) -> Option<usize> {
    if !at_word_start(bytes, pos) || !bytes.get(pos).copied().is_some_and(is_word_byte) {
        return None;
    }
    let mut end = pos;
    while bytes.get(end).copied().is_some_and(is_word_byte) {
        end += 1;
    }
    Some(end)
}

/// End of a field-access suffix (`-KUNNR`, `-ADDR-CITY`) starting at `pos`.
/// Returns `pos` when there is none.
pub fn field_suffix_end(bytes: &[u8], pos: usize) -> usize {
    if bytes.get(pos) != Some(&b'-') {
        return pos;
    }
    let mut end = pos;
    while bytes
        .get(end)
        .copied()
        .is_some_and(|b| b == b'-' || is_word_byte(b))
    {
        end += 1;
    }
    end
}

/// Position of the first terminator at or after `from`.
pub fn find_terminator(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == TERMINATOR)
        .map(|i| from + i)
}

/// Match `phrase` at exactly `pos`; returns the end offset.
pub fn match_phrase(bytes: &[u8], pos: usize, phrase: Phrase) -> Option<usize> {
    if !at_word_start(bytes, pos) {
        return None;
    }
    let mut cursor = pos;
    for (i, word) in phrase.iter().enumerate() {
        if i > 0 {
            let after_space = skip_whitespace(bytes, cursor);
            if after_space == cursor {
                return None;
            }
            cursor = after_space;
        }
        let end = cursor + word.len();
        let candidate = bytes.get(cursor..end)?;
        if !candidate.eq_ignore_ascii_case(word.as_bytes()) {
            return None;
        }
        cursor = end;
    }
    at_word_end(bytes, cursor).then_some(cursor)
}

/// Leftmost occurrence of any phrase starting in `from..limit`. At a given position the
/// earlier phrase in `phrases` wins.
pub fn find_phrase(
    bytes: &[u8],
    from: usize,
    limit: usize,
    phrases: &[Phrase],
) -> Option<PhraseHit> {
    let limit = limit.min(bytes.len());
    (from..limit).find_map(|pos| {
        phrases.iter().enumerate().find_map(|(index, phrase)| {
            match_phrase(bytes, pos, phrase).map(|end| PhraseHit {
                start: pos,
                end,
                index,
            })
        })
    })
}

/// Identifiers starting in `from..limit`, left to right, as `(start, end)` pairs.
pub fn identifiers(bytes: &[u8], from: usize, limit: usize) -> Identifiers<'_> {
    Identifiers {
        bytes,
        pos: from,
        limit: limit.min(bytes.len()),
    }
}

pub struct Identifiers<'a> {
    bytes: &'a [u8],
    pos: usize,
    limit: usize,
}

impl Iterator for Identifiers<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.limit {
            let start = self.pos;
            match read_identifier(self.bytes, start) {
                Some(end) => {
                    self.pos = end;
                    return Some((start, end));
                }
                None => self.pos += 1,
            }
        }
        None
    }
}
