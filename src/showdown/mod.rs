pub mod evaluate;
pub use evaluate::*;

pub mod evaluated;
pub use evaluated::*;

pub mod selector;
pub use selector::*;

pub mod usage;
pub use usage::*;
