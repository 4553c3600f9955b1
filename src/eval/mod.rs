pub mod arrangement;
pub use arrangement::*;

pub mod evaluator;
pub use evaluator::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod tables;

pub mod value;
pub use value::*;
