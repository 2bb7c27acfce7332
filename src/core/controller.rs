use crate::domain::model::{category_for, ActiveFilters, CardData, FilterCategory, TimeBucket};
use crate::domain::ports::RecipeSurface;
use crate::utils::error::Result;
use url::Url;

/// Decides, for every card on the recipe page, whether it should be shown
/// given the currently selected filter tags.
///
/// The controller owns its selection state and its presentation surface;
/// every state-mutating operation re-runs the full visibility pass.
pub struct FilterController<S: RecipeSurface> {
    surface: S,
    active: ActiveFilters,
}

impl<S: RecipeSurface> FilterController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            active: ActiveFilters::new(),
        }
    }

    /// Applies a checkbox state change for `tag`. Tags not present in the
    /// catalog are ignored without error.
    pub fn apply_filter_change(&mut self, tag: &str, is_now_active: bool) {
        let Some(category) = category_for(tag) else {
            tracing::debug!("ignoring unknown filter tag: {}", tag);
            return;
        };

        if is_now_active {
            self.active.insert(category, tag);
        } else {
            self.active.remove(category, tag);
        }

        tracing::debug!(
            "filter change: {} -> {} ({} tags selected)",
            tag,
            is_now_active,
            self.active.selected_count()
        );
        self.refresh();
    }

    /// Simulates the user toggling the checkbox for `tag`: updates the
    /// checkbox state on the surface, then applies the filter change.
    pub fn toggle(&mut self, tag: &str, checked: bool) {
        let id = tag.to_ascii_lowercase();
        if self.surface.checkbox_ids().iter().any(|known| *known == id) {
            self.surface.set_checked(&id, checked);
        }
        self.apply_filter_change(&id, checked);
    }

    /// Empties every category, unchecks every checkbox and shows all cards.
    pub fn clear_all_filters(&mut self) {
        for id in self.surface.checkbox_ids() {
            self.surface.set_checked(&id, false);
        }
        self.active.clear();
        tracing::debug!("cleared all filters");
        self.refresh();
    }

    /// Seeds the initial filter state from a `tag` query value. The value
    /// must resolve to a known tag whose checkbox exists on the page;
    /// anything else has no effect.
    pub fn seed_from_query_tag(&mut self, tag: Option<&str>) {
        let Some(tag) = tag else {
            return;
        };
        let Some(category) = category_for(tag) else {
            tracing::debug!("ignoring unknown tag from URL: {}", tag);
            return;
        };

        let id = tag.to_ascii_lowercase();
        if !self.surface.checkbox_ids().iter().any(|known| *known == id) {
            tracing::debug!("no checkbox on the page for URL tag: {}", id);
            return;
        }

        self.surface.set_checked(&id, true);
        self.active.insert(category, &id);
        tracing::info!("seeded filter state from URL tag: {}", id);
        self.refresh();
    }

    /// Parses a page URL and seeds from its `tag` query parameter, if any.
    pub fn seed_from_url(&mut self, url: &str) -> Result<()> {
        let parsed = Url::parse(url)?;
        let tag = parsed
            .query_pairs()
            .find(|(key, _)| key == "tag")
            .map(|(_, value)| value.into_owned());
        self.seed_from_query_tag(tag.as_deref());
        Ok(())
    }

    /// Runs the visibility pass over every card. Always a full pass; there
    /// is no incremental update.
    pub fn refresh(&mut self) {
        for index in 0..self.surface.card_count() {
            let Some(card) = self.surface.card(index) else {
                continue;
            };
            let visible = should_show(&card, &self.active);
            self.surface.set_card_visible(index, visible);
        }
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        &self.active
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// The visibility predicate: a conjunction over the four categories,
/// evaluated meal type first and time last, skipping later checks once the
/// card is already hidden. A category with no selected tags constrains
/// nothing.
fn should_show(card: &CardData, active: &ActiveFilters) -> bool {
    let mut should_show = true;

    let meal_type = card.meal_type.to_ascii_lowercase();
    let cuisine = card.cuisine.to_ascii_lowercase();
    let dietary = card.dietary.to_ascii_lowercase();

    if !active.is_empty(FilterCategory::MealType)
        && !active.contains(FilterCategory::MealType, &meal_type)
    {
        should_show = false;
    }

    if should_show
        && !active.is_empty(FilterCategory::Cuisine)
        && !active.contains(FilterCategory::Cuisine, &cuisine)
    {
        should_show = false;
    }

    if should_show && !active.is_empty(FilterCategory::Dietary) {
        // "none" carries no dietary classification, so it can never satisfy
        // a dietary filter.
        if dietary == "none" || !active.contains(FilterCategory::Dietary, &dietary) {
            should_show = false;
        }
    }

    if should_show && !active.is_empty(FilterCategory::Time) {
        let time_match = active.tags(FilterCategory::Time).iter().any(|tag| {
            match (TimeBucket::from_tag(tag), card.time_minutes) {
                (Some(bucket), Some(minutes)) => bucket.matches(minutes),
                _ => false,
            }
        });
        should_show = time_match;
    }

    should_show
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::known_tags;

    struct MockSurface {
        checkboxes: Vec<(String, bool)>,
        cards: Vec<(CardData, bool)>,
    }

    impl MockSurface {
        fn new(cards: Vec<CardData>) -> Self {
            Self {
                checkboxes: known_tags().map(|tag| (tag.to_string(), false)).collect(),
                cards: cards.into_iter().map(|card| (card, true)).collect(),
            }
        }

        fn visibility(&self) -> Vec<bool> {
            self.cards.iter().map(|(_, visible)| *visible).collect()
        }

        fn checked_ids(&self) -> Vec<String> {
            self.checkboxes
                .iter()
                .filter(|(_, checked)| *checked)
                .map(|(id, _)| id.clone())
                .collect()
        }
    }

    impl RecipeSurface for MockSurface {
        fn checkbox_ids(&self) -> Vec<String> {
            self.checkboxes.iter().map(|(id, _)| id.clone()).collect()
        }

        fn is_checked(&self, id: &str) -> bool {
            self.checkboxes
                .iter()
                .any(|(known, checked)| known == id && *checked)
        }

        fn set_checked(&mut self, id: &str, checked: bool) {
            if let Some((_, state)) = self.checkboxes.iter_mut().find(|(known, _)| known == id) {
                *state = checked;
            }
        }

        fn card_count(&self) -> usize {
            self.cards.len()
        }

        fn card(&self, index: usize) -> Option<CardData> {
            self.cards.get(index).map(|(card, _)| card.clone())
        }

        fn set_card_visible(&mut self, index: usize, visible: bool) {
            if let Some((_, state)) = self.cards.get_mut(index) {
                *state = visible;
            }
        }
    }

    fn card(title: &str, meal_type: &str, cuisine: &str, dietary: &str, time: Option<u32>) -> CardData {
        CardData {
            title: title.to_string(),
            meal_type: meal_type.to_string(),
            cuisine: cuisine.to_string(),
            dietary: dietary.to_string(),
            time_minutes: time,
        }
    }

    fn sample_cards() -> Vec<CardData> {
        vec![
            card("Pancakes", "Breakfast", "European", "Vegetarian", Some(25)),
            card("Ramen", "Dinner", "Asian", "None", Some(45)),
            card("Lasagna", "Dinner", "Italian", "None", Some(90)),
            card("Vegan Tacos", "Lunch", "Mexican", "Vegan", Some(30)),
        ]
    }

    #[test]
    fn test_no_active_filters_shows_every_card() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.refresh();
        assert_eq!(controller.surface().visibility(), vec![true; 4]);
    }

    #[test]
    fn test_meal_type_filter_hides_non_matching_cards() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.apply_filter_change("breakfast", true);
        assert_eq!(
            controller.surface().visibility(),
            vec![true, false, false, false]
        );
    }

    #[test]
    fn test_selections_within_one_category_widen_the_match() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.apply_filter_change("breakfast", true);
        controller.apply_filter_change("lunch", true);
        assert_eq!(
            controller.surface().visibility(),
            vec![true, false, false, true]
        );
    }

    #[test]
    fn test_selections_across_categories_narrow_the_match() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.apply_filter_change("dinner", true);
        controller.apply_filter_change("italian", true);
        assert_eq!(
            controller.surface().visibility(),
            vec![false, false, true, false]
        );
    }

    #[test]
    fn test_toggle_on_then_off_restores_prior_state() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.refresh();
        let before = controller.surface().visibility();

        controller.apply_filter_change("vegan", true);
        controller.apply_filter_change("vegan", false);

        assert_eq!(controller.surface().visibility(), before);
        assert_eq!(controller.active_filters().selected_count(), 0);
    }

    #[test]
    fn test_repeated_activation_never_duplicates() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.apply_filter_change("vegan", true);
        controller.apply_filter_change("vegan", true);

        assert_eq!(
            controller
                .active_filters()
                .tags(FilterCategory::Dietary)
                .len(),
            1
        );

        // A single deactivation must fully remove the tag.
        controller.apply_filter_change("vegan", false);
        assert!(controller.active_filters().is_empty(FilterCategory::Dietary));
        assert_eq!(controller.surface().visibility(), vec![true; 4]);
    }

    #[test]
    fn test_unknown_tag_is_a_silent_no_op() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.refresh();
        controller.apply_filter_change("doesnotexist", true);

        assert_eq!(controller.active_filters().selected_count(), 0);
        assert_eq!(controller.surface().visibility(), vec![true; 4]);
    }

    #[test]
    fn test_dietary_none_is_hidden_under_any_dietary_filter() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.apply_filter_change("vegetarian", true);
        controller.apply_filter_change("vegan", true);

        // Ramen and Lasagna carry dietary "None": hidden regardless of the
        // rest of their attributes.
        assert_eq!(
            controller.surface().visibility(),
            vec![true, false, false, true]
        );
    }

    #[test]
    fn test_card_attributes_compare_case_insensitively() {
        let cards = vec![card("Pad Thai", "DINNER", "ASIAN", "Vegan", Some(20))];
        let mut controller = FilterController::new(MockSurface::new(cards));
        controller.apply_filter_change("dinner", true);
        controller.apply_filter_change("asian", true);
        assert_eq!(controller.surface().visibility(), vec![true]);
    }

    #[test]
    fn test_time_filter_matches_selected_buckets() {
        let cards = vec![
            card("A", "Dinner", "Asian", "None", Some(0)),
            card("B", "Dinner", "Asian", "None", Some(30)),
            card("C", "Dinner", "Asian", "None", Some(31)),
            card("D", "Dinner", "Asian", "None", Some(60)),
            card("E", "Dinner", "Asian", "None", Some(61)),
        ];
        let mut controller = FilterController::new(MockSurface::new(cards));

        controller.apply_filter_change("quick", true);
        assert_eq!(
            controller.surface().visibility(),
            vec![true, true, false, false, false]
        );

        controller.apply_filter_change("medium", true);
        assert_eq!(
            controller.surface().visibility(),
            vec![true, true, true, true, false]
        );

        controller.apply_filter_change("quick", false);
        controller.apply_filter_change("medium", false);
        controller.apply_filter_change("long", true);
        assert_eq!(
            controller.surface().visibility(),
            vec![false, false, false, false, true]
        );
    }

    #[test]
    fn test_unparseable_duration_matches_no_time_bucket() {
        let cards = vec![card("Mystery Stew", "Dinner", "European", "None", None)];
        let mut controller = FilterController::new(MockSurface::new(cards));
        controller.refresh();
        assert_eq!(controller.surface().visibility(), vec![true]);

        for tag in ["quick", "medium", "long"] {
            controller.apply_filter_change(tag, true);
            assert_eq!(controller.surface().visibility(), vec![false]);
            controller.apply_filter_change(tag, false);
        }
    }

    #[test]
    fn test_clear_all_filters_resets_checkboxes_and_visibility() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.toggle("breakfast", true);
        controller.toggle("vegan", true);
        assert!(!controller.surface().checked_ids().is_empty());

        controller.clear_all_filters();

        assert_eq!(controller.active_filters().selected_count(), 0);
        assert!(controller.surface().checked_ids().is_empty());
        assert_eq!(controller.surface().visibility(), vec![true; 4]);
    }

    #[test]
    fn test_seed_from_query_tag_checks_the_checkbox() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.seed_from_query_tag(Some("vegan"));

        assert!(controller
            .active_filters()
            .contains(FilterCategory::Dietary, "vegan"));
        assert_eq!(controller.surface().checked_ids(), vec!["vegan"]);
        assert_eq!(
            controller.surface().visibility(),
            vec![false, false, false, true]
        );
    }

    #[test]
    fn test_seed_from_unknown_or_absent_tag_changes_nothing() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.refresh();

        controller.seed_from_query_tag(Some("doesnotexist"));
        controller.seed_from_query_tag(None);

        assert_eq!(controller.active_filters().selected_count(), 0);
        assert!(controller.surface().checked_ids().is_empty());
        assert_eq!(controller.surface().visibility(), vec![true; 4]);
    }

    #[test]
    fn test_seed_from_url_extracts_the_tag_parameter() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller
            .seed_from_url("https://example.com/recipes?sort=name&tag=vegan")
            .unwrap();

        assert!(controller
            .active_filters()
            .contains(FilterCategory::Dietary, "vegan"));
    }

    #[test]
    fn test_seed_from_url_without_tag_parameter_is_a_no_op() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller
            .seed_from_url("https://example.com/recipes")
            .unwrap();
        assert_eq!(controller.active_filters().selected_count(), 0);
    }

    #[test]
    fn test_seed_from_malformed_url_is_an_error() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        assert!(controller.seed_from_url("not a url").is_err());
    }

    #[test]
    fn test_toggle_updates_checkbox_state_on_the_surface() {
        let mut controller = FilterController::new(MockSurface::new(sample_cards()));
        controller.toggle("Breakfast", true);

        assert!(controller.surface().is_checked("breakfast"));
        assert_eq!(
            controller.surface().visibility(),
            vec![true, false, false, false]
        );

        controller.toggle("breakfast", false);
        assert!(!controller.surface().is_checked("breakfast"));
    }
}
