//! Consensus module - Block and transaction structures, scripts, targets

mod block;
pub mod encode;
mod pow;
mod script;
mod transaction;

pub use block::*;
pub use pow::*;
pub use script::*;
pub use transaction::*;
