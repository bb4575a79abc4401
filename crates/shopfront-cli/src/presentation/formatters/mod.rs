pub mod number;
pub mod text;

pub use number::{format_price, format_rating_fixed, format_rating_raw};
pub use text::truncate;
