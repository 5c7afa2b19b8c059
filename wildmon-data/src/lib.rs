extern crate alloc;

mod catalog;
mod mons;
mod moves;

#[cfg(test)]
pub mod test_util;

pub use catalog::*;
pub use mons::*;
pub use moves::*;
