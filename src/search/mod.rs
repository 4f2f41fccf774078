mod deepening;
mod evaluation;
mod move_ordering;
mod negamax;
mod transposition;

pub use deepening::*;
pub use evaluation::*;
pub use move_ordering::*;
pub use negamax::*;
pub use transposition::*;
