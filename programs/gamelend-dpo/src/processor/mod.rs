pub mod initialize;
pub mod interest;
pub mod mint;
pub mod order;
pub mod transfer;

pub use initialize::*;
pub use interest::*;
pub use mint::*;
pub use order::*;
pub use transfer::*;
