mod token;
pub use token::*;

mod expr;
pub use expr::*;

mod parse;
pub use parse::*;
