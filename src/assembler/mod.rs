//! The Assembler module is in charge of taking a line of
//! Hack assembly and producing the components later stages
//! (symbol resolution, code generation) consume.
//!
//! It does this by stripping comments, classifying the line as an
//! address or compute instruction and splitting it on its delimiters.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod reader;

pub use error::Error;
pub use lexer::{strip_comment, tokenize};
