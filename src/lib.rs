pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::page::{RecipePage, ServicesPage};
pub use crate::core::{calculator::TotalCalculator, controller::FilterController};
pub use crate::utils::error::{FilterError, Result};
