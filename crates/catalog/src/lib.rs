//! Seedling catalog module.
//!
//! Species/cultivar entries, their categories and per-seedling prices, as read
//! from the hosted catalog tables. Pure data + value logic (no IO).

pub mod category;
pub mod price;
pub mod seedling;

pub use category::{Category, CategoryRef};
pub use price::Price;
pub use seedling::Seedling;
