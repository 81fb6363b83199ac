//! Feeds a whole source file through the lexer, one line at a time.
use std::io::{BufRead, BufReader, Read};

use super::error::Error;
use super::lexer;

/// A non-blank source line and the components it lexed to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TokenizedLine {
    /// 1-based line number in the source.
    pub number: usize,
    /// The line with comment and surrounding whitespace removed.
    pub text: String,
    pub components: Vec<String>,
}

/// Hack only supports a single instruction per line.
/// Blank and comment-only lines are skipped; every other line is tokenized.
/// Unreadable lines are logged and counted, and any failure
/// aborts the whole file once all lines have been seen.
pub fn tokenize_source<R: Read>(reader: R) -> Result<Vec<TokenizedLine>, Error> {
    let mut lines: Vec<TokenizedLine> = Vec::with_capacity(256);
    let mut error_count: usize = 0;

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let number = index + 1;
        let line = match line {
            Ok(s) => s,
            Err(e) => {
                error_count += 1;
                error!("{}", Error::Read { line: number, source: e });
                continue;
            }
        };

        let text = lexer::strip_comment(&line);
        if text.is_empty() {
            continue;
        }

        match lexer::tokenize(text) {
            Ok(components) => {
                debug!("line {}: {:?}", number, components);
                lines.push(TokenizedLine { number, text: text.to_owned(), components });
            }
            Err(e) => {
                error_count += 1;
                error!("Error: Invalid instruction on line {}: {}", number, e);
            }
        }
    }

    if error_count > 0 {
        error!("Stopped lexing due to {} lexer error(s).", error_count);
        return Err(Error::Aborted { errors: error_count });
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(number: usize, text: &str, components: &[&str]) -> TokenizedLine {
        TokenizedLine {
            number,
            text: text.to_owned(),
            components: components.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_tokenize_source() {
        let asm_input = "// Computes R0 = 2 + 3

        @2
        D=A   // D <- 2
        @3
        D = D + A
        @0
        M=D
        (END)
        @END
        0;JMP // loop forever
        ";
        let v = vec![
            line(3, "@2", &["2"]),
            line(4, "D=A", &["D", "A"]),
            line(5, "@3", &["3"]),
            line(6, "D = D + A", &["D", "D+A"]),
            line(7, "@0", &["0"]),
            line(8, "M=D", &["M", "D"]),
            line(9, "(END)", &["(END)"]),
            line(10, "@END", &["END"]),
            line(11, "0;JMP", &["0", "JMP"]),
        ];

        assert_eq!(tokenize_source(asm_input.as_bytes()).unwrap(), v);
    }

    #[test]
    fn test_tokenize_source_blank() {
        assert_eq!(tokenize_source("".as_bytes()).unwrap(), Vec::<TokenizedLine>::new());
        assert_eq!(tokenize_source("\n   \n// nothing\n\t// here\n".as_bytes()).unwrap(), Vec::<TokenizedLine>::new());
    }

    #[test]
    fn test_tokenize_source_crlf() {
        let v = vec![line(1, "@i", &["i"]), line(2, "M=1", &["M", "1"])];
        assert_eq!(tokenize_source("@i\r\nM=1\r\n".as_bytes()).unwrap(), v);
    }

    #[test]
    fn test_tokenize_source_unreadable() {
        let bytes: &[u8] = b"@1\n\xff\xfe\nD=A\n";
        match tokenize_source(bytes) {
            Err(Error::Aborted { errors }) => assert_eq!(errors, 1),
            other => panic!("unexpected {:?}", other),
        }
    }
}
