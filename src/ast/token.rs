use std::fmt;
use crate::ast::Op;
use crate::error::LexicalError;

/// What kind of symbol a token is
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Atom,
    LeftParen,
    RightParen,
    Not,
    And,
    Or,
    Imply,
    Iff,
}

impl Category {
    /// Binding strength of a connective, loosest first: `<=>`, `=>`, `|`, `&`, `!`.
    /// Atoms and brackets have no precedence
    pub fn precedence(self) -> Option<u8> {
        match self {
            Category::Iff => Some(1),
            Category::Imply => Some(2),
            Category::Or => Some(3),
            Category::And => Some(4),
            Category::Not => Some(5),
            Category::Atom | Category::LeftParen | Category::RightParen => None,
        }
    }
    /// The binary operator this token stands for, if it is one
    pub fn binary_op(self) -> Option<Op> {
        match self {
            Category::And => Some(Op::And),
            Category::Or => Some(Op::Or),
            Category::Imply => Some(Op::Imply),
            Category::Iff => Some(Op::Iff),
            _ => None,
        }
    }
    pub fn is_connective(self) -> bool {
        self.precedence().is_some()
    }
}

/// A single lexeme of formula text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    lexeme: String,
    category: Category,
    /// character index into the source; the synthetic brackets point at the start and the `.`
    position: usize,
}

impl Token {
    pub fn new(lexeme: &str, category: Category, position: usize) -> Token {
        Token { lexeme: lexeme.to_string(), category, position }
    }
    pub fn lexeme(&self) -> &str {
        self.lexeme.as_str()
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// the most digits an atom may carry; longer suffixes are kept free for generated names
const MAX_ATOM_DIGITS: usize = 2;

/// Split `source` into tokens.
/// The result is always wrapped in one outer bracket pair: a leading `(` is inserted,
/// and the terminating `.` becomes the closing `)`
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let chars = source.chars().collect::<Vec<char>>();
    let mut tokens = vec![Token::new("(", Category::LeftParen, 0)];
    let mut idx = 0;
    loop {
        let c = match chars.get(idx) {
            Some(c) => *c,
            None => return Err(LexicalError::MissingTerminator { position: idx }),
        };
        match c {
            c if c.is_whitespace() => { idx += 1; }
            '(' => { tokens.push(Token::new("(", Category::LeftParen, idx)); idx += 1; }
            ')' => { tokens.push(Token::new(")", Category::RightParen, idx)); idx += 1; }
            '|' => { tokens.push(Token::new("|", Category::Or, idx)); idx += 1; }
            '!' => { tokens.push(Token::new("!", Category::Not, idx)); idx += 1; }
            '&' => { tokens.push(Token::new("&", Category::And, idx)); idx += 1; }
            '=' => {
                if chars.get(idx + 1) != Some(&'>') {
                    return Err(LexicalError::MalformedConnective { found: c, position: idx });
                }
                tokens.push(Token::new("=>", Category::Imply, idx));
                idx += 2;
            }
            '<' => {
                if chars.get(idx + 1) != Some(&'=') || chars.get(idx + 2) != Some(&'>') {
                    return Err(LexicalError::MalformedConnective { found: c, position: idx });
                }
                tokens.push(Token::new("<=>", Category::Iff, idx));
                idx += 3;
            }
            '.' => {
                tokens.push(Token::new(")", Category::RightParen, idx));
                // only whitespace may follow the terminator
                if let Some((offset, found)) = chars[idx + 1..].iter()
                    .enumerate()
                    .find(|(_, c)| !c.is_whitespace())
                {
                    return Err(LexicalError::TrailingInput { found: *found, position: idx + 1 + offset });
                }
                break;
            }
            c if c.is_ascii_uppercase() => {
                let start = idx;
                idx += 1;
                while idx < chars.len() && chars[idx].is_ascii_digit() {
                    if idx - start > MAX_ATOM_DIGITS {
                        return Err(LexicalError::OversizedSuffix { found: chars[idx], position: idx });
                    }
                    idx += 1;
                }
                let lexeme = chars[start..idx].iter().collect::<String>();
                tokens.push(Token::new(lexeme.as_str(), Category::Atom, start));
            }
            _ => return Err(LexicalError::UnexpectedCharacter { found: c, position: idx }),
        }
    }
    debug!("tokenized {} tokens from {:?}", tokens.len(), source);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(source: &str) -> Vec<Category> {
        tokenize(source)
            .expect("should tokenize")
            .iter()
            .map(Token::category)
            .collect()
    }

    #[test]
    fn wraps_in_brackets() {
        use Category::*;
        assert_eq!(categories("P."), vec![LeftParen, Atom, RightParen]);
    }
    #[test]
    fn all_connectives() {
        use Category::*;
        assert_eq!(categories("!P & Q | R => S <=> T."), vec![
            LeftParen, Not, Atom, And, Atom, Or, Atom, Imply, Atom, Iff, Atom, RightParen
        ]);
    }
    #[test]
    fn atoms_with_digits() {
        let tokens = tokenize("P1 & Q12.").expect("should tokenize");
        let lexemes = tokens.iter().map(Token::lexeme).collect::<Vec<_>>();
        assert_eq!(lexemes, vec!["(", "P1", "&", "Q12", ")"]);
        assert_eq!(tokens[3].position(), 5);
    }
    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(categories(" \tP\n=>\nQ  . "), categories("P=>Q."));
    }
    #[test]
    fn three_digit_suffix() {
        let err = tokenize("P123.").expect_err("three digits are reserved");
        assert_eq!(err, LexicalError::OversizedSuffix { found: '3', position: 3 });
    }
    #[test]
    fn bad_character() {
        let err = tokenize("P $ Q.").expect_err("$ is not a symbol");
        assert_eq!(err, LexicalError::UnexpectedCharacter { found: '$', position: 2 });
    }
    #[test]
    fn lowercase_atom() {
        let _ = tokenize("p.").expect_err("atoms are uppercase");
    }
    #[test]
    fn half_implication() {
        let err = tokenize("P = Q.").expect_err("`=` needs `>`");
        assert_eq!(err, LexicalError::MalformedConnective { found: '=', position: 2 });
    }
    #[test]
    fn half_biconditional() {
        let _ = tokenize("P <= Q.").expect_err("`<=` needs `>`");
        let _ = tokenize("P < Q.").expect_err("`<` needs `=>`");
    }
    #[test]
    fn empty_source() {
        assert_eq!(tokenize(""), Err(LexicalError::MissingTerminator { position: 0 }));
    }
    #[test]
    fn no_terminator() {
        assert_eq!(tokenize("P & Q"), Err(LexicalError::MissingTerminator { position: 5 }));
    }
    #[test]
    fn trailing_input() {
        let err = tokenize("P. Q").expect_err("nothing may follow the terminator");
        assert_eq!(err, LexicalError::TrailingInput { found: 'Q', position: 3 });
    }
}
