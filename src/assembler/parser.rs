//! The Parser module turns a source line into a typed `Instruction`.
//! It shares the lexer's delimiter scan but remembers which delimiter
//! introduced each fragment, so `M=1` and `0;JMP` are told apart.
use super::ast::Instruction;
use super::error::Error;
use super::lexer::{self, Delimiter, ADDRESS_SIGIL};

/// Parses one line of Hack assembly. Comments and surrounding
/// whitespace are ignored; a blank line is `Error::EmptyInstruction`.
pub fn parse(line: &str) -> Result<Instruction, Error> {
    let cleaned = lexer::strip_comment(line);
    let mut chars = cleaned.chars();

    match chars.next() {
        None => Err(Error::EmptyInstruction),
        Some(ADDRESS_SIGIL) => Ok(Instruction::Address(chars.as_str().to_owned())),
        Some(_) => compute(cleaned),
    }
}

fn compute(cleaned: &str) -> Result<Instruction, Error> {
    let malformed = || Error::Malformed { line: cleaned.to_owned() };

    let mut fragments = Vec::with_capacity(3);
    for (delim, text) in lexer::split_fragments(cleaned) {
        let text = lexer::remove_whitespace(text);
        if text.is_empty() {
            return Err(malformed());
        }
        fragments.push((delim, text));
    }

    let mut fragments = fragments.into_iter();
    let (dest, comp, jump) = match (fragments.next(), fragments.next(), fragments.next(), fragments.next()) {
        (Some((None, comp)), None, None, None) => (None, comp, None),
        (Some((None, dest)), Some((Some(Delimiter::Assign), comp)), None, None) => (Some(dest), comp, None),
        (Some((None, comp)), Some((Some(Delimiter::Jump), jump)), None, None) => (None, comp, Some(jump)),
        (
            Some((None, dest)),
            Some((Some(Delimiter::Assign), comp)),
            Some((Some(Delimiter::Jump), jump)),
            None,
        ) => (Some(dest), comp, Some(jump)),
        _ => return Err(malformed()),
    };

    Ok(Instruction::Compute { dest, comp, jump })
}
