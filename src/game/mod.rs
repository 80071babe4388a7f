//! Game loops
//!
//! Interactive front ends over the world and sight modules.

mod platformer;
mod walker;

pub use platformer::{Controls, Platformer};
pub use walker::{Outcome, WalkerCommand, WalkerSession};
