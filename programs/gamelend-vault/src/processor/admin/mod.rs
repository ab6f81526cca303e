pub mod collection;
pub mod config;
pub mod initialize;

pub use collection::*;
pub use config::*;
pub use initialize::*;
