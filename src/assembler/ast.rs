//! Typed view of a single Hack instruction.
//!
//! Hack has two instruction forms, one per line:
//!
//! ```nasm
//! @17           // address instruction: A <= 17
//! @LOOP         // ... or the address a symbol resolves to
//! D=D+A;JGT     // compute instruction: dest=comp;jump
//! M=1           // jump is optional
//! 0;JMP         // so is the destination
//! ```
//!
//! Mnemonics are kept as text. Checking that `AMD` or `JGT` exist
//! belongs to the code generator.

use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Instruction {
    /// Everything after the `@`, exactly as written.
    Address(String),
    Compute {
        dest: Option<String>,
        comp: String,
        jump: Option<String>,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instruction::Address(sym) => write!(f, "@{}", sym),
            Instruction::Compute { dest, comp, jump } => {
                if let Some(dest) = dest {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if let Some(jump) = jump {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Instruction {
    pub fn is_address(&self) -> bool {
        matches!(self, Instruction::Address(_))
    }

    /// The components in the order `lexer::tokenize` yields them.
    pub fn components(&self) -> Vec<&str> {
        match self {
            Instruction::Address(sym) => vec![sym.as_str()],
            Instruction::Compute { dest, comp, jump } => dest
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(comp.as_str()))
                .chain(jump.iter().map(String::as_str))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(dest: Option<&str>, comp: &str, jump: Option<&str>) -> Instruction {
        Instruction::Compute {
            dest: dest.map(str::to_owned),
            comp: comp.to_owned(),
            jump: jump.map(str::to_owned),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Instruction::Address("LOOP".to_owned()).to_string(), "@LOOP");
        assert_eq!(compute(Some("D"), "D+A", Some("JGT")).to_string(), "D=D+A;JGT");
        assert_eq!(compute(Some("M"), "1", None).to_string(), "M=1");
        assert_eq!(compute(None, "0", Some("JMP")).to_string(), "0;JMP");
        assert_eq!(compute(None, "D", None).to_string(), "D");
    }

    #[test]
    fn test_components() {
        assert_eq!(Instruction::Address("17".to_owned()).components(), vec!["17"]);
        assert_eq!(compute(Some("D"), "D+A", Some("JGT")).components(), vec!["D", "D+A", "JGT"]);
        assert_eq!(compute(None, "D+A", Some("JGT")).components(), vec!["D+A", "JGT"]);
        assert_eq!(compute(Some("M"), "1", None).components(), vec!["M", "1"]);
        assert_eq!(compute(None, "0", None).components(), vec!["0"]);
    }

    #[test]
    fn test_is_address() {
        assert!(Instruction::Address("i".to_owned()).is_address());
        assert!(!compute(None, "0", None).is_address());
    }
}
