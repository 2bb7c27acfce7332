use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The four attribute categories a filter tag can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    MealType,
    Cuisine,
    Dietary,
    Time,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::MealType,
        FilterCategory::Cuisine,
        FilterCategory::Dietary,
        FilterCategory::Time,
    ];
}

// Fixed tag catalog; tags are lowercase and each maps to exactly one category.
pub static TAG_CATALOG: [(&str, FilterCategory); 14] = [
    ("breakfast", FilterCategory::MealType),
    ("lunch", FilterCategory::MealType),
    ("dinner", FilterCategory::MealType),
    ("dessert", FilterCategory::MealType),
    ("italian", FilterCategory::Cuisine),
    ("asian", FilterCategory::Cuisine),
    ("mexican", FilterCategory::Cuisine),
    ("european", FilterCategory::Cuisine),
    ("vegetarian", FilterCategory::Dietary),
    ("vegan", FilterCategory::Dietary),
    ("glutenfree", FilterCategory::Dietary),
    ("quick", FilterCategory::Time),
    ("medium", FilterCategory::Time),
    ("long", FilterCategory::Time),
];

/// Resolves a tag to its category, case-insensitively. Unknown tags resolve
/// to `None` rather than failing.
pub fn category_for(tag: &str) -> Option<FilterCategory> {
    let tag = tag.to_ascii_lowercase();
    TAG_CATALOG
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, category)| *category)
}

pub fn known_tags() -> impl Iterator<Item = &'static str> {
    TAG_CATALOG.iter().map(|(tag, _)| *tag)
}

/// Duration buckets for the time tags. Exactly one bucket matches any
/// given duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    Quick,
    Medium,
    Long,
}

impl TimeBucket {
    pub fn from_tag(tag: &str) -> Option<TimeBucket> {
        match tag.to_ascii_lowercase().as_str() {
            "quick" => Some(TimeBucket::Quick),
            "medium" => Some(TimeBucket::Medium),
            "long" => Some(TimeBucket::Long),
            _ => None,
        }
    }

    pub fn matches(&self, minutes: u32) -> bool {
        match self {
            TimeBucket::Quick => minutes <= 30,
            TimeBucket::Medium => minutes > 30 && minutes <= 60,
            TimeBucket::Long => minutes > 60,
        }
    }
}

/// The tags currently selected by the user, one set per category.
///
/// Stored tags are lowercase. Membership is set-based, so toggling the same
/// tag repeatedly never accumulates duplicates.
#[derive(Debug, Clone, Default)]
pub struct ActiveFilters {
    meal_type: HashSet<String>,
    cuisine: HashSet<String>,
    dietary: HashSet<String>,
    time: HashSet<String>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_for(&self, category: FilterCategory) -> &HashSet<String> {
        match category {
            FilterCategory::MealType => &self.meal_type,
            FilterCategory::Cuisine => &self.cuisine,
            FilterCategory::Dietary => &self.dietary,
            FilterCategory::Time => &self.time,
        }
    }

    fn set_for_mut(&mut self, category: FilterCategory) -> &mut HashSet<String> {
        match category {
            FilterCategory::MealType => &mut self.meal_type,
            FilterCategory::Cuisine => &mut self.cuisine,
            FilterCategory::Dietary => &mut self.dietary,
            FilterCategory::Time => &mut self.time,
        }
    }

    pub fn insert(&mut self, category: FilterCategory, tag: &str) {
        self.set_for_mut(category).insert(tag.to_ascii_lowercase());
    }

    pub fn remove(&mut self, category: FilterCategory, tag: &str) {
        self.set_for_mut(category).remove(&tag.to_ascii_lowercase());
    }

    pub fn contains(&self, category: FilterCategory, tag: &str) -> bool {
        self.set_for(category).contains(tag)
    }

    pub fn is_empty(&self, category: FilterCategory) -> bool {
        self.set_for(category).is_empty()
    }

    pub fn tags(&self, category: FilterCategory) -> &HashSet<String> {
        self.set_for(category)
    }

    pub fn clear(&mut self) {
        for category in FilterCategory::ALL {
            self.set_for_mut(category).clear();
        }
    }

    pub fn selected_count(&self) -> usize {
        FilterCategory::ALL
            .iter()
            .map(|category| self.set_for(*category).len())
            .sum()
    }
}

/// Read-only snapshot of one recipe card's filterable attributes.
///
/// `dietary` uses `"none"` as a sentinel for "no dietary classification";
/// `time_minutes` is `None` when the card's duration attribute was missing
/// or unparseable, which matches no time bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub title: String,
    pub meal_type: String,
    pub cuisine: String,
    pub dietary: String,
    pub time_minutes: Option<u32>,
}

/// One checkable item on the services page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    pub id: String,
    pub checked: bool,
    pub price: f64,
}
