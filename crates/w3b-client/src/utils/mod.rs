pub mod fees;
pub mod math_utils;
pub mod pricing;

pub use fees::*;
pub use math_utils::*;
pub use pricing::*;
