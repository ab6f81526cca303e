pub mod admin;
pub mod loan;
pub mod oracle;

pub use admin::*;
pub use loan::*;
pub use oracle::*;
