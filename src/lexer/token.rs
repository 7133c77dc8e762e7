//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized in a file name.
///
/// A file name is an alternation of digit runs and everything else. The two
/// variants partition the input with no gaps, so lexing is total.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// Maximal run of ASCII digits, a frame-number candidate (e.g. `0001`).
    #[regex(r"[0-9]+")]
    Digits(&'src str),

    /// Maximal run of non-digit characters (e.g. `shotA.` or `.exr`).
    #[regex(r"[^0-9]+")]
    Literal(&'src str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token<'_>> {
        Token::lexer(input).map(|t| t.expect("lexing is total")).collect()
    }

    #[test]
    fn alternating_runs() {
        assert_eq!(
            tokens("shotA.0001.exr"),
            vec![
                Token::Literal("shotA."),
                Token::Digits("0001"),
                Token::Literal(".exr"),
            ]
        );
    }

    #[test]
    fn multiple_digit_runs() {
        assert_eq!(
            tokens("sc01_sh010.0001.exr"),
            vec![
                Token::Literal("sc"),
                Token::Digits("01"),
                Token::Literal("_sh"),
                Token::Digits("010"),
                Token::Literal("."),
                Token::Digits("0001"),
                Token::Literal(".exr"),
            ]
        );
    }

    #[test]
    fn no_digits_at_all() {
        assert_eq!(tokens("single.exr"), vec![Token::Literal("single.exr")]);
    }

    #[test]
    fn digits_only() {
        assert_eq!(tokens("1234"), vec![Token::Digits("1234")]);
    }
}
