pub mod cancel;
pub mod place_buy;
pub mod place_sell;

pub use cancel::*;
pub use place_buy::*;
pub use place_sell::*;
