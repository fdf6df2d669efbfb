pub mod settings;
pub mod migration;

pub use settings::*;
pub use migration::*;
