use std::fmt;

#[macro_export]
macro_rules! internal_error {
    () => {
        Err($crate::error::ProverError::Internal($crate::error::InternalError {
            file: file!(),
            line: line!()
        }))
    };
}

/// A broken invariant inside the prover, reported with where it was noticed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalError {
    pub file: &'static str,
    pub line: u32,
}
impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal error originated at {}:{}", self.file, self.line)
    }
}
impl std::error::Error for InternalError {

}

/// Failure to turn source text into tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// a character that can not start any token
    UnexpectedCharacter { found: char, position: usize },
    /// `<` or `=` without the rest of `<=>` / `=>`
    MalformedConnective { found: char, position: usize },
    /// an atom with three or more digits after its letter
    OversizedSuffix { found: char, position: usize },
    /// the source never reached its `.`
    MissingTerminator { position: usize },
    /// something other than whitespace after the `.`
    TrailingInput { found: char, position: usize },
}

impl LexicalError {
    /// the character index the error points at
    pub fn position(&self) -> usize {
        match self {
            LexicalError::UnexpectedCharacter { position, .. }
            | LexicalError::MalformedConnective { position, .. }
            | LexicalError::OversizedSuffix { position, .. }
            | LexicalError::MissingTerminator { position }
            | LexicalError::TrailingInput { position, .. } => *position,
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexicalError::UnexpectedCharacter { found, position } => {
                write!(f, "unexpected character `{}` at position {}", found, position)
            }
            LexicalError::MalformedConnective { found, position } => {
                write!(f, "incomplete connective starting with `{}` at position {}; expected `=>` or `<=>`", found, position)
            }
            LexicalError::OversizedSuffix { found, position } => {
                write!(f, "atom suffix digit `{}` at position {}; atoms take at most two digits", found, position)
            }
            LexicalError::MissingTerminator { position } => {
                write!(f, "missing `.` terminator at position {}", position)
            }
            LexicalError::TrailingInput { found, position } => {
                write!(f, "unexpected `{}` after the `.` terminator at position {}", found, position)
            }
        }
    }
}
impl std::error::Error for LexicalError {

}

/// The fixed discriminator of a parse failure
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    InsufficientOperands,
    UnmatchedBracket,
    UnexpectedToken,
}

/// Failure to build a formula from tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// the lexeme of the token being handled, if any
    pub lexeme: Option<String>,
    /// character position of that token in the source
    pub position: Option<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> ParseError {
        ParseError { kind, lexeme: None, position: None }
    }
    pub fn at(kind: ParseErrorKind, lexeme: &str, position: usize) -> ParseError {
        ParseError { kind, lexeme: Some(lexeme.to_string()), position: Some(position) }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseErrorKind::InsufficientOperands => "not enough operands for connective",
            ParseErrorKind::UnmatchedBracket => "unmatched bracket",
            ParseErrorKind::UnexpectedToken => "unexpected token",
        };
        match (&self.lexeme, self.position) {
            (Some(lexeme), Some(position)) => write!(f, "{} `{}` at position {}", what, lexeme, position),
            _ => write!(f, "{}", what),
        }
    }
}
impl std::error::Error for ParseError {

}

/// A formula that can not be handed to a prover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalFormulaError {
    pub reason: &'static str,
}
impl fmt::Display for IllegalFormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal formula: {}", self.reason)
    }
}
impl std::error::Error for IllegalFormulaError {

}

/// Everything that can go wrong between source text and a verdict
#[derive(Debug)]
pub enum ProverError {
    Lexical(LexicalError),
    Parse(ParseError),
    IllegalFormula(IllegalFormulaError),
    Config(String),
    Internal(InternalError),
}

impl fmt::Display for ProverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProverError::Lexical(e) => write!(f, "lexical error: {}", e),
            ProverError::Parse(e) => write!(f, "parse error: {}", e),
            ProverError::IllegalFormula(e) => write!(f, "{}", e),
            ProverError::Config(why) => write!(f, "configuration error: {}", why),
            ProverError::Internal(e) => write!(f, "{}", e),
        }
    }
}
impl std::error::Error for ProverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProverError::Lexical(e) => Some(e),
            ProverError::Parse(e) => Some(e),
            ProverError::IllegalFormula(e) => Some(e),
            ProverError::Internal(e) => Some(e),
            ProverError::Config(_) => None,
        }
    }
}

impl From<LexicalError> for ProverError {
    fn from(e: LexicalError) -> Self {
        ProverError::Lexical(e)
    }
}
impl From<ParseError> for ProverError {
    fn from(e: ParseError) -> Self {
        ProverError::Parse(e)
    }
}
impl From<IllegalFormulaError> for ProverError {
    fn from(e: IllegalFormulaError) -> Self {
        ProverError::IllegalFormula(e)
    }
}
impl From<InternalError> for ProverError {
    fn from(e: InternalError) -> Self {
        ProverError::Internal(e)
    }
}

pub type BoxedErrorTrait = Box<(dyn std::error::Error + 'static)>;
