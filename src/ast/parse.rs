use crate::ast::{tokenize, Category, Formula, Token};
use crate::error::{ParseError, ParseErrorKind, ProverError};

/// Tokenize and parse formula text such as `"(P => Q) & P."`
pub fn parse(source: &str) -> Result<Formula, ProverError> {
    let tokens = tokenize(source)?;
    let formula = parse_tokens(&tokens)?;
    Ok(formula)
}

/// Build one formula from a token sequence by operator precedence shift/reduce
pub fn parse_tokens(tokens: &[Token]) -> Result<Formula, ParseError> {
    // both stacks live for exactly one call
    let mut stacks = ShiftReduce::new();
    let mut previous: Option<Category> = None;
    // the bracket opened by the first token encloses the whole stream
    let outermost = tokens.first().filter(|token| token.category() == Category::LeftParen);
    for (idx, token) in tokens.iter().enumerate() {
        let category = token.category();
        if starts_operand(category) && previous.map_or(false, ends_operand) {
            // two operands with no connective between them
            return Err(unexpected(token));
        }
        match category {
            Category::LeftParen => stacks.open(token),
            Category::Atom => stacks.formulas.push(Formula::atom(token.lexeme())),
            Category::Not => stacks.connectives.push(Pending::Connective(token)),
            Category::And | Category::Or | Category::Imply | Category::Iff => {
                stacks.shift_binary(token)?;
            }
            Category::RightParen => {
                if previous == Some(Category::LeftParen) {
                    return Err(unexpected(token));
                }
                let opener = stacks.close(token)?;
                let closes_outermost = outermost.map_or(false, |outer| std::ptr::eq(outer, opener));
                if closes_outermost && idx + 1 < tokens.len() {
                    // a stray `)` ended the enclosing group early
                    return Err(ParseError::at(ParseErrorKind::UnmatchedBracket, token.lexeme(), token.position()));
                }
            }
        }
        previous = Some(category);
    }
    let formula = stacks.finish()?;
    debug!("parsed formula: {}", formula);
    Ok(formula)
}

fn starts_operand(category: Category) -> bool {
    match category {
        Category::Atom | Category::LeftParen | Category::Not => true,
        _ => false,
    }
}

fn ends_operand(category: Category) -> bool {
    match category {
        Category::Atom | Category::RightParen => true,
        _ => false,
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::at(ParseErrorKind::UnexpectedToken, token.lexeme(), token.position())
}

/// An entry on the connective stack
#[derive(Debug)]
enum Pending<'t> {
    /// an open bracket, remembering how many formulas were on the stack when it opened
    Barrier { token: &'t Token, height: usize },
    Connective(&'t Token),
}

struct ShiftReduce<'t> {
    connectives: Vec<Pending<'t>>,
    formulas: Vec<Formula>,
}

impl <'t> ShiftReduce<'t> {
    fn new() -> ShiftReduce<'t> {
        ShiftReduce {
            connectives: Vec::new(),
            formulas: Vec::new(),
        }
    }
    fn open(&mut self, token: &'t Token) {
        let height = self.formulas.len();
        self.connectives.push(Pending::Barrier { token, height });
    }
    /// formulas below this height belong to an enclosing group
    fn floor(&self) -> usize {
        self.connectives.iter()
            .rev()
            .find_map(|pending| match pending {
                Pending::Barrier { height, .. } => Some(*height),
                Pending::Connective(_) => None,
            })
            .unwrap_or(0)
    }
    /// Reduce every pending connective that binds at least as tightly as `token`, then push it
    fn shift_binary(&mut self, token: &'t Token) -> Result<(), ParseError> {
        let precedence = token.category().precedence();
        while let Some(Pending::Connective(top)) = self.connectives.last() {
            if top.category().precedence() < precedence {
                break;
            }
            let top = *top;
            self.connectives.pop();
            self.reduce(top)?;
        }
        self.connectives.push(Pending::Connective(token));
        Ok( () )
    }
    /// Reduce back to the matching open bracket and discard it, handing back the bracket's token
    fn close(&mut self, token: &'t Token) -> Result<&'t Token, ParseError> {
        loop {
            match self.connectives.pop() {
                None => {
                    return Err(ParseError::at(ParseErrorKind::UnmatchedBracket, token.lexeme(), token.position()));
                }
                Some(Pending::Barrier { token: opener, .. }) => return Ok(opener),
                Some(Pending::Connective(op)) => self.reduce(op)?,
            }
        }
    }
    /// Pop the operands of `op` off the formula stack and push the node built from them
    fn reduce(&mut self, op: &Token) -> Result<(), ParseError> {
        let available = self.formulas.len().saturating_sub(self.floor());
        let insufficient = || ParseError::at(ParseErrorKind::InsufficientOperands, op.lexeme(), op.position());
        let formula = match op.category().binary_op() {
            Some(bin_op) => {
                if available < 2 {
                    return Err(insufficient());
                }
                let right = self.formulas.pop().ok_or_else(insufficient)?;
                let left = self.formulas.pop().ok_or_else(insufficient)?;
                Formula::binary(bin_op, left, right)
            }
            None => {
                if available < 1 {
                    return Err(insufficient());
                }
                self.formulas.pop().ok_or_else(insufficient)?.negate()
            }
        };
        trace!("reduced `{}` into {}", op.lexeme(), formula);
        self.formulas.push(formula);
        Ok( () )
    }
    /// Empty whatever is left on the connective stack; exactly one formula must remain
    fn finish(mut self) -> Result<Formula, ParseError> {
        while let Some(pending) = self.connectives.pop() {
            match pending {
                Pending::Barrier { token, .. } => {
                    return Err(ParseError::at(ParseErrorKind::UnmatchedBracket, token.lexeme(), token.position()));
                }
                Pending::Connective(op) => self.reduce(op)?,
            }
        }
        match self.formulas.len() {
            1 => self.formulas.pop().ok_or_else(|| ParseError::new(ParseErrorKind::InsufficientOperands)),
            0 => Err(ParseError::new(ParseErrorKind::InsufficientOperands)),
            _ => Err(ParseError::new(ParseErrorKind::UnexpectedToken)),
        }
    }
}
