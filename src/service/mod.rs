pub mod claps;

pub use claps::{ClapCount, ClapCounter, ClapStore, SqlClapStore};
