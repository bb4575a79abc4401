pub mod favorites;
pub mod filter;
pub mod product;
pub mod theme;

pub use favorites::*;
pub use filter::*;
pub use product::*;
pub use theme::*;
