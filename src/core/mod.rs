pub mod calculator;
pub mod controller;

pub use crate::domain::model::{
    ActiveFilters, CardData, FilterCategory, PricedItem, TimeBucket,
};
pub use crate::domain::ports::{PriceSurface, RecipeSurface};
pub use crate::utils::error::Result;
