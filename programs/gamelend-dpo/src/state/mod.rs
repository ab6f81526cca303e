pub mod config;
pub mod order;
pub mod position;

pub use config::*;
pub use order::*;
pub use position::*;
