mod seed;
mod source;

pub use seed::*;
pub use source::*;
