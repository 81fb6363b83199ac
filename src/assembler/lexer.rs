//! This lexer tokenizes a single line of Hack assembly.
use super::error::Error;

/// Everything from the first occurrence of this marker to the end of the line is discarded.
pub const COMMENT_MARKER: &str = "//";

/// Prefix of an address-reference instruction, e.g. `@LOOP` or `@17`.
pub const ADDRESS_SIGIL: char = '@';

/// The two characters compute instructions are split on.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Delimiter {
    /// `=`, ends the destination.
    Assign,
    /// `;`, starts the jump condition.
    Jump,
}

impl Delimiter {
    pub fn from_char(c: char) -> Option<Delimiter> {
        match c {
            '=' => Some(Delimiter::Assign),
            ';' => Some(Delimiter::Jump),
            _ => None,
        }
    }
}

/// Removes any inline comment from `line` along with the
/// surrounding whitespace. A comment-only or blank line yields `""`.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

/// Splits `line` into its instruction components.
///
/// An address instruction yields the text after the `@` verbatim.
/// A compute instruction yields its destination, computation and
/// jump fragments in source order, with all whitespace removed.
///
/// Callers are expected to skip blank and comment-only lines; handing
/// one in is reported as `Error::EmptyInstruction`.
pub fn tokenize(line: &str) -> Result<Vec<String>, Error> {
    let cleaned = strip_comment(line);
    let mut chars = cleaned.chars();

    match chars.next() {
        None => Err(Error::EmptyInstruction),
        Some(ADDRESS_SIGIL) => Ok(vec![chars.as_str().to_owned()]),
        Some(_) => Ok(split_fragments(cleaned)
            .into_iter()
            .map(|(_, fragment)| remove_whitespace(fragment))
            .collect()),
    }
}

/// Single pass over `instruction`, cutting it at every `=` and `;`.
/// Each fragment is paired with the delimiter that preceded it
/// (`None` for the first one). Fragments are returned untrimmed.
pub fn split_fragments(instruction: &str) -> Vec<(Option<Delimiter>, &str)> {
    let mut out = Vec::with_capacity(3);
    let mut start = 0;
    let mut leading = None;

    for (pos, c) in instruction.char_indices() {
        if let Some(delim) = Delimiter::from_char(c) {
            out.push((leading, &instruction[start..pos]));
            leading = Some(delim);
            start = pos + c.len_utf8();
        }
    }
    out.push((leading, &instruction[start..]));

    out
}

/// Drops every whitespace character, not just spaces.
pub fn remove_whitespace(fragment: &str) -> String {
    fragment.chars().filter(|c| !c.is_whitespace()).collect()
}
