pub mod claim;
pub mod distribute;

pub use claim::*;
pub use distribute::*;
