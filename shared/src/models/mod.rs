//! Wire models for the analysis backend contract

mod analysis;
mod recommendation;
mod soil;
mod weather;

pub use analysis::*;
pub use recommendation::*;
pub use soil::*;
pub use weather::*;
