//! P2P networking module - Network magic and bootstrap seeds

mod magic;
mod seeds;

pub use magic::*;
pub use seeds::*;
