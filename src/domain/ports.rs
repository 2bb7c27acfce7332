use crate::domain::model::{CardData, PricedItem};

/// Presentation collaborator for the recipe listing page.
///
/// The filter controller only ever reads card attributes and checkbox state
/// through this trait and writes back checked flags and per-card visibility,
/// so it can be driven by an in-memory page or a test double.
pub trait RecipeSurface {
    fn checkbox_ids(&self) -> Vec<String>;
    fn is_checked(&self, id: &str) -> bool;
    fn set_checked(&mut self, id: &str, checked: bool);
    fn card_count(&self) -> usize;
    fn card(&self, index: usize) -> Option<CardData>;
    fn set_card_visible(&mut self, index: usize, visible: bool);
}

/// Presentation collaborator for the services page.
pub trait PriceSurface {
    fn items(&self) -> Vec<PricedItem>;
    fn set_item_checked(&mut self, id: &str, checked: bool);
    fn write_total(&mut self, text: &str);
}
