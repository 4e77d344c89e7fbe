use std::fmt;

/// A propositional formula. Never mutated once built; every rewrite makes a new one
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Formula {
    kind: Box<FormulaKind>
}

/// Represents what type of formula it is, and any associated data
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormulaKind {
    Atom(String),
    Not(Formula),
    Binary(Op, Formula, Formula),
}

/// The binary connectives
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    And,
    Or,
    Imply,
    Iff,
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::And => "&",
            Op::Or => "|",
            Op::Imply => "=>",
            Op::Iff => "<=>",
        }
    }
}

/// An atom or the negation of an atom
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub name: String,
    pub polarity: bool,
}

impl Literal {
    pub fn new(name: &str, polarity: bool) -> Literal {
        Literal { name: name.to_string(), polarity }
    }
    /// same atom, opposite polarity
    pub fn complement(&self) -> Literal {
        Literal { name: self.name.clone(), polarity: !self.polarity }
    }
}

impl From<FormulaKind> for Formula {
    fn from(kind: FormulaKind) -> Formula {
        Formula { kind: Box::new(kind) }
    }
}

impl Formula {
    pub fn atom(name: &str) -> Formula {
        FormulaKind::Atom(name.to_string()).into()
    }
    pub fn binary(op: Op, left: Formula, right: Formula) -> Formula {
        FormulaKind::Binary(op, left, right).into()
    }
    pub fn and(left: Formula, right: Formula) -> Formula {
        Formula::binary(Op::And, left, right)
    }
    pub fn or(left: Formula, right: Formula) -> Formula {
        Formula::binary(Op::Or, left, right)
    }
    pub fn imply(left: Formula, right: Formula) -> Formula {
        Formula::binary(Op::Imply, left, right)
    }
    pub fn iff(left: Formula, right: Formula) -> Formula {
        Formula::binary(Op::Iff, left, right)
    }
    /// Wrap this formula in a negation
    pub fn negate(self) -> Formula {
        FormulaKind::Not(self).into()
    }
    pub fn kind(&self) -> &FormulaKind {
        &self.kind
    }
    /// true for a bare atom, no connective and no negation
    pub fn is_atom(&self) -> bool {
        if let FormulaKind::Atom(_) = self.kind() {
            true
        } else {
            false
        }
    }
    /// true for an atom or a negated atom
    pub fn is_literal(&self) -> bool {
        self.literal().is_some()
    }
    /// View this formula as a literal, if it is one
    pub fn literal(&self) -> Option<Literal> {
        match self.kind() {
            FormulaKind::Atom(name) => Some(Literal::new(name, true)),
            FormulaKind::Not(inner) => match inner.kind() {
                FormulaKind::Atom(name) => Some(Literal::new(name, false)),
                _ => None,
            },
            FormulaKind::Binary(..) => None,
        }
    }
    /// Number of connectives (negations included) in the tree
    pub fn connective_count(&self) -> usize {
        match self.kind() {
            FormulaKind::Atom(_) => 0,
            FormulaKind::Not(inner) => 1 + inner.connective_count(),
            FormulaKind::Binary(_, left, right) => 1 + left.connective_count() + right.connective_count(),
        }
    }
    /// Every atom name in the formula, left to right, repeats included
    pub fn atoms(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut todo = vec![self];
        while let Some(formula) = todo.pop() {
            match formula.kind() {
                FormulaKind::Atom(name) => names.push(name.as_str()),
                FormulaKind::Not(inner) => todo.push(inner),
                FormulaKind::Binary(_, left, right) => {
                    todo.push(right);
                    todo.push(left);
                }
            }
        }
        names
    }
    fn is_binary(&self) -> bool {
        if let FormulaKind::Binary(..) = self.kind() {
            true
        } else {
            false
        }
    }
    /// writes binary subformulas inside brackets, so the output parses back to the same tree
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_binary() {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            FormulaKind::Atom(name) => write!(f, "{}", name),
            FormulaKind::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_operand(f)
            }
            FormulaKind::Binary(op, left, right) => {
                left.fmt_operand(f)?;
                write!(f, " {} ", op.symbol())?;
                right.fmt_operand(f)
            }
        }
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.polarity {
            write!(f, "{}", self.name)
        } else {
            write!(f, "!{}", self.name)
        }
    }
}
