use crate::domain::ports::PriceSurface;

/// Keeps the services page total in sync with its checked items.
///
/// Holds no state of its own: every change event triggers a full
/// recomputation over the surface's items.
pub struct TotalCalculator<P: PriceSurface> {
    surface: P,
}

impl<P: PriceSurface> TotalCalculator<P> {
    pub fn new(surface: P) -> Self {
        Self { surface }
    }

    /// Sums the prices of all checked items, writes the formatted total to
    /// the surface and returns the sum.
    pub fn recompute_total(&mut self) -> f64 {
        let total: f64 = self
            .surface
            .items()
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.price)
            .sum();

        tracing::debug!("recomputed total: {}", total);
        self.surface.write_total(&format!("{}$", total));
        total
    }

    /// Simulates the user toggling one item, then recomputes.
    pub fn toggle_item(&mut self, id: &str, checked: bool) -> f64 {
        self.surface.set_item_checked(id, checked);
        self.recompute_total()
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }
}
