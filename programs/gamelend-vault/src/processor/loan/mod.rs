pub mod borrow;
pub mod deposit;
pub mod liquidate;
pub mod repay;
pub mod withdraw;

pub use borrow::*;
pub use deposit::*;
pub use liquidate::*;
pub use repay::*;
pub use withdraw::*;
