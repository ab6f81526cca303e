pub mod collection;
pub mod loan;
pub mod oracle;
pub mod risk;
pub mod vault;

pub use collection::*;
pub use loan::*;
pub use oracle::*;
pub use risk::*;
pub use vault::*;
