use crate::config::fixture::{RecipeFixture, ServicesFixture};
use crate::domain::model::{known_tags, CardData, PricedItem};
use crate::domain::ports::{PriceSurface, RecipeSurface};
use crate::utils::error::{FilterError, Result};

#[derive(Debug, Clone)]
struct Checkbox {
    id: String,
    checked: bool,
}

#[derive(Debug, Clone)]
struct CardElement {
    data: CardData,
    visible: bool,
}

/// In-memory stand-in for the recipe listing page. Constructed from a
/// fixture; every required element must be present up front.
#[derive(Debug, Clone)]
pub struct RecipePage {
    checkboxes: Vec<Checkbox>,
    cards: Vec<CardElement>,
    clear_control: String,
}

impl RecipePage {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::from_fixture(RecipeFixture::from_file(path)?)
    }

    pub fn from_fixture(fixture: RecipeFixture) -> Result<Self> {
        let checkbox_ids: Vec<String> = match fixture.checkboxes {
            Some(ids) => ids.iter().map(|id| id.to_ascii_lowercase()).collect(),
            None => known_tags().map(String::from).collect(),
        };

        // A page with filter checkboxes must also carry the clear control.
        let clear_control = match fixture.clear_control {
            Some(id) => id,
            None if checkbox_ids.is_empty() => String::new(),
            None => {
                return Err(FilterError::MissingElementError {
                    element: "clear_control".to_string(),
                })
            }
        };

        let checkboxes = checkbox_ids
            .into_iter()
            .map(|id| Checkbox { id, checked: false })
            .collect();

        let cards = fixture
            .cards
            .into_iter()
            .map(|card| CardElement {
                data: CardData {
                    title: card.title,
                    meal_type: card.meal_type,
                    cuisine: card.cuisine,
                    dietary: card.dietary,
                    time_minutes: card.time.trim().parse().ok(),
                },
                visible: true,
            })
            .collect();

        Ok(Self {
            checkboxes,
            cards,
            clear_control,
        })
    }

    pub fn clear_control(&self) -> &str {
        &self.clear_control
    }

    pub fn visible_cards(&self) -> Vec<CardData> {
        self.cards
            .iter()
            .filter(|card| card.visible)
            .map(|card| card.data.clone())
            .collect()
    }
}

impl RecipeSurface for RecipePage {
    fn checkbox_ids(&self) -> Vec<String> {
        self.checkboxes
            .iter()
            .map(|checkbox| checkbox.id.clone())
            .collect()
    }

    fn is_checked(&self, id: &str) -> bool {
        self.checkboxes
            .iter()
            .any(|checkbox| checkbox.id == id && checkbox.checked)
    }

    fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(checkbox) = self
            .checkboxes
            .iter_mut()
            .find(|checkbox| checkbox.id == id)
        {
            checkbox.checked = checked;
        }
    }

    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn card(&self, index: usize) -> Option<CardData> {
        self.cards.get(index).map(|card| card.data.clone())
    }

    fn set_card_visible(&mut self, index: usize, visible: bool) {
        if let Some(card) = self.cards.get_mut(index) {
            card.visible = visible;
        }
    }
}

/// In-memory stand-in for the services page.
#[derive(Debug, Clone)]
pub struct ServicesPage {
    items: Vec<PricedItem>,
    total_element: String,
    total_text: String,
}

impl ServicesPage {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::from_fixture(ServicesFixture::from_file(path)?)
    }

    pub fn from_fixture(fixture: ServicesFixture) -> Result<Self> {
        // The calculator always writes its result somewhere; a page without
        // the output element is a broken collaborator contract.
        let total_element =
            fixture
                .total_element
                .ok_or_else(|| FilterError::MissingElementError {
                    element: "total_element".to_string(),
                })?;

        let items = fixture
            .items
            .into_iter()
            .map(|item| PricedItem {
                id: item.id,
                checked: item.checked,
                price: item.price,
            })
            .collect();

        Ok(Self {
            items,
            total_element,
            total_text: String::new(),
        })
    }

    pub fn total_element(&self) -> &str {
        &self.total_element
    }

    pub fn total_text(&self) -> &str {
        &self.total_text
    }
}

impl PriceSurface for ServicesPage {
    fn items(&self) -> Vec<PricedItem> {
        self.items.clone()
    }

    fn set_item_checked(&mut self, id: &str, checked: bool) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.checked = checked;
        }
    }

    fn write_total(&mut self, text: &str) {
        self.total_text = text.to_string();
    }
}
