mod sequent;
pub use sequent::*;

mod trace;
pub use trace::*;

mod search;
pub use search::*;
