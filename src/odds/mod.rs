pub mod exhaust;
pub use exhaust::*;

pub mod handle;
pub use handle::*;

pub mod odds;
pub use odds::*;

pub mod scenario;
pub use scenario::*;

pub mod simulation;
pub use simulation::*;

pub mod table;
pub use table::*;

pub mod tally;
pub use tally::*;
