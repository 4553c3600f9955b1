pub mod combinations;
pub use combinations::*;

pub mod permutations;
pub use permutations::*;
