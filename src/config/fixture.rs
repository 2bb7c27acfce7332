use crate::domain::model::category_for;
use crate::utils::error::{FilterError, Result};
use crate::utils::validation::{
    validate_identifier, validate_non_negative_price, validate_unique_ids, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk description of a recipe listing page: the filter checkboxes, the
/// clear control and the cards with their raw data attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeFixture {
    pub clear_control: Option<String>,

    /// Checkbox ids present on the page. When omitted, the page carries one
    /// checkbox per catalog tag.
    pub checkboxes: Option<Vec<String>>,

    #[serde(default)]
    pub cards: Vec<CardFixture>,
}

/// One card as it appears in the fixture. `time` is the raw attribute text;
/// unparseable values are kept and classify into no time bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFixture {
    pub title: String,
    pub meal_type: String,
    pub cuisine: String,
    pub dietary: String,
    pub time: String,
}

impl RecipeFixture {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for RecipeFixture {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.clear_control {
            validate_identifier("clear_control", id)?;
        }

        if let Some(checkboxes) = &self.checkboxes {
            validate_unique_ids("checkboxes", checkboxes.iter().map(String::as_str))?;
            for id in checkboxes {
                validate_identifier("checkboxes", id)?;
                if category_for(id).is_none() {
                    return Err(FilterError::InvalidConfigValueError {
                        field: "checkboxes".to_string(),
                        value: id.clone(),
                        reason: "Not a known filter tag".to_string(),
                    });
                }
            }
        }

        for card in &self.cards {
            if card.title.trim().is_empty() {
                return Err(FilterError::ValidationError {
                    message: "Card title cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// On-disk description of the services page: priced checkable items and the
/// id of the total output element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesFixture {
    pub total_element: Option<String>,

    #[serde(default)]
    pub items: Vec<ItemFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFixture {
    pub id: String,
    pub price: f64,
    #[serde(default)]
    pub checked: bool,
}

impl ServicesFixture {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for ServicesFixture {
    fn validate(&self) -> Result<()> {
        if let Some(id) = &self.total_element {
            validate_identifier("total_element", id)?;
        }

        validate_unique_ids("items", self.items.iter().map(|item| item.id.as_str()))?;
        for item in &self.items {
            validate_identifier("items.id", &item.id)?;
            validate_non_negative_price("items.price", item.price)?;
        }

        Ok(())
    }
}
