pub mod browse;
pub mod categories;
pub mod favorites;
pub mod products;
pub mod show;
pub mod theme;
