mod axes;
pub use axes::*;
mod kernel;
pub use kernel::*;
