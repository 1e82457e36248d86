//! Declarative position layouts and the generic interpreter that walks them.
//!
//! A [`Layout`] is a static slice of [`Position`]s. Each position names a
//! label, an offset and width inside a control field, a [`Kind`] describing
//! how the characters are read, and the code table used for labels.

use super::CodeValue;

/// Code-to-label table for one fixed position.
pub type CodeTable = &'static [(&'static str, &'static str)];

/// Ordered list of positions making up one fixed-field routine.
pub type Layout = &'static [Position];

/// How the characters at a position are turned into [`CodeValue`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Copy the characters verbatim; no label.
    Read,
    /// One code looked up in the table.
    Lookup,
    /// `count` independent codes of `width` characters packed contiguously.
    Multi {
        /// Number of packed codes.
        count: usize,
    },
    /// A numeric span or a sentinel code. A span of digits with no table
    /// entry gets the fallback label.
    Range {
        /// Label used for a literal numeric span.
        fallback: &'static str,
    },
    /// A literal text span or a sentinel code. Any non-blank span with no
    /// table entry gets the fallback label.
    Hybrid {
        /// Label used for a literal span.
        fallback: &'static str,
    },
    /// A one-character sentinel filling the span, or a literal date.
    HybridDate,
}

/// Label given to a literal date at a [`Kind::HybridDate`] position.
pub const DATE_LABEL: &str = "Date";

/// One labelled position inside a control field.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    /// Human-readable field label
    pub label: &'static str,
    /// Offset of the first character
    pub offset: usize,
    /// Width of one code
    pub width: usize,
    /// Decode kind
    pub kind: Kind,
    /// Code table (empty for [`Kind::Read`])
    pub codes: CodeTable,
}

impl Position {
    /// Verbatim characters.
    #[must_use]
    pub const fn read(label: &'static str, offset: usize, width: usize) -> Self {
        Position {
            label,
            offset,
            width,
            kind: Kind::Read,
            codes: &[],
        }
    }

    /// Single looked-up code.
    #[must_use]
    pub const fn lookup(
        label: &'static str,
        offset: usize,
        width: usize,
        codes: CodeTable,
    ) -> Self {
        Position {
            label,
            offset,
            width,
            kind: Kind::Lookup,
            codes,
        }
    }

    /// `count` one-character codes sharing a table.
    #[must_use]
    pub const fn multi(label: &'static str, offset: usize, count: usize, codes: CodeTable) -> Self {
        Position {
            label,
            offset,
            width: 1,
            kind: Kind::Multi { count },
            codes,
        }
    }

    /// Numeric span with sentinel codes.
    #[must_use]
    pub const fn range(
        label: &'static str,
        offset: usize,
        width: usize,
        fallback: &'static str,
        codes: CodeTable,
    ) -> Self {
        Position {
            label,
            offset,
            width,
            kind: Kind::Range { fallback },
            codes,
        }
    }

    /// Text span with sentinel codes.
    #[must_use]
    pub const fn hybrid(
        label: &'static str,
        offset: usize,
        width: usize,
        fallback: &'static str,
        codes: CodeTable,
    ) -> Self {
        Position {
            label,
            offset,
            width,
            kind: Kind::Hybrid { fallback },
            codes,
        }
    }

    /// Date span with one-character sentinels.
    #[must_use]
    pub const fn hybrid_date(
        label: &'static str,
        offset: usize,
        width: usize,
        codes: CodeTable,
    ) -> Self {
        Position {
            label,
            offset,
            width,
            kind: Kind::HybridDate,
            codes,
        }
    }

    /// Offset one past the last character this position covers.
    #[must_use]
    pub const fn end(&self) -> usize {
        match self.kind {
            Kind::Multi { count } => self.offset + self.width * count,
            _ => self.offset + self.width,
        }
    }
}

/// Look up `code` in `table`, returning an empty label when absent.
#[must_use]
pub fn code_lookup(table: CodeTable, code: &str) -> &'static str {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map_or("", |(_, label)| label)
}

/// Walk `layout` over `chars`, calling `emit` for every decoded atom.
///
/// Positions are addressed as `offset - skip` inside `chars`; a position whose
/// offset lies before `skip`, or whose span runs past the end of `chars`, is
/// skipped. Reported offsets are always the layout's own offsets, so the same
/// layout yields the same output whatever `skip` it was applied with.
pub(crate) fn walk<F>(layout: Layout, chars: &[char], skip: usize, mut emit: F)
where
    F: FnMut(&'static str, CodeValue),
{
    for position in layout {
        match position.kind {
            Kind::Multi { count } => {
                for i in 0..count {
                    let offset = position.offset + i * position.width;
                    if let Some(code) = slice(chars, offset, position.width, skip) {
                        let label = code_lookup(position.codes, &code);
                        emit(position.label, atom(code, label, offset, position.width));
                    }
                }
            },
            kind => {
                let Some(code) = slice(chars, position.offset, position.width, skip) else {
                    continue;
                };
                let value = decode_span(kind, position, code);
                emit(position.label, value);
            },
        }
    }
}

fn decode_span(kind: Kind, position: &Position, code: String) -> CodeValue {
    let (offset, width) = (position.offset, position.width);
    match kind {
        Kind::Read => atom(code, "", offset, width),
        Kind::Lookup | Kind::Multi { .. } => {
            let label = code_lookup(position.codes, &code);
            atom(code, label, offset, width)
        },
        Kind::Range { fallback } => {
            let mut label = code_lookup(position.codes, &code);
            if label.is_empty() && !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) {
                label = fallback;
            }
            atom(code, label, offset, width)
        },
        Kind::Hybrid { fallback } => {
            let mut label = code_lookup(position.codes, &code);
            if label.is_empty() && !code.trim().is_empty() {
                label = fallback;
            }
            atom(code, label, offset, width)
        },
        Kind::HybridDate => {
            if let Some(sentinel) = sentinel_of(&code) {
                let label = code_lookup(position.codes, &sentinel);
                if !label.is_empty() {
                    return atom(sentinel, label, offset, width);
                }
            }
            let label = if code.trim().is_empty() { "" } else { DATE_LABEL };
            atom(code, label, offset, width)
        },
    }
}

/// The leading character of a span that holds nothing else but repeats of
/// that character or trailing blanks.
fn sentinel_of(code: &str) -> Option<String> {
    let mut chars = code.chars();
    let first = chars.next()?;
    chars
        .all(|c| c == first || c == ' ')
        .then(|| first.to_string())
}

fn slice(chars: &[char], offset: usize, width: usize, skip: usize) -> Option<String> {
    let start = offset.checked_sub(skip)?;
    chars
        .get(start..start + width)
        .map(|span| span.iter().collect())
}

fn atom(code: String, label: &str, offset: usize, width: usize) -> CodeValue {
    CodeValue {
        code,
        label: label.to_string(),
        offset,
        width,
    }
}
