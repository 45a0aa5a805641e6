pub mod basket;
pub mod order;
pub mod product;

pub use basket::*;
pub use order::*;
pub use product::*;
