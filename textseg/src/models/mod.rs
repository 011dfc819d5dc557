mod chunk;
mod summary;

pub use chunk::*;
pub use summary::*;
