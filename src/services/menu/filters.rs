use bitflags::bitflags;

use super::types::Dish;

bitflags! {
    /// Non-diet filter tags a diner can stack on the menu view.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DishTags: u32 {
        /// Dishes the kitchen recommends first.
        const MUST_TRY = 0x0001;
        /// Highest-selling dishes.
        const BEST_SELLING = 0x0002;
        /// Recently added dishes.
        const NEW_ARRIVAL = 0x0004;
        /// Dishes kids tend to order.
        const KIDS_FAVORITE = 0x0008;
        /// Dishes couples tend to order.
        const COUPLES_FAVORITE = 0x0010;
        /// Chef's special dishes.
        const CHEFS_SPECIAL = 0x0020;
        /// High-protein dishes.
        const HIGH_PROTEIN = 0x0040;
        /// Hot and spicy dishes.
        const HOT_AND_SPICY = 0x0080;
    }
}

/// Diet restriction filters. Mutually exclusive by rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diet {
    /// Show vegetarian dishes only.
    VegOnly,
    /// Show non-vegetarian dishes only.
    NonVegOnly,
}

/// One toggleable menu filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFilter {
    /// A diet restriction.
    Diet(Diet),
    /// A single non-diet tag.
    Tag(DishTags),
}

/// Upper bound on simultaneously active non-diet tags.
pub const MAX_ACTIVE_TAGS: usize = 2;

/// The diner's active filter set.
///
/// Selection rules carried from the diner surface: Veg Only and Non-Veg
/// Only displace each other, at most [`MAX_ACTIVE_TAGS`] non-diet tags
/// may be active at once, and toggling an active filter clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    diet: Option<Diet>,
    tags: DishTags,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            diet: None,
            tags: DishTags::empty(),
        }
    }
}

impl FilterSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active diet restriction, if any.
    pub fn diet(&self) -> Option<Diet> {
        self.diet
    }

    /// Active non-diet tags.
    pub fn tags(&self) -> DishTags {
        self.tags
    }

    /// Toggles a filter, applying the selection rules.
    ///
    /// Returns whether the selection changed; a toggle that would exceed
    /// the tag cap is a no-op.
    pub fn toggle(&mut self, filter: MenuFilter) -> bool {
        match filter {
            MenuFilter::Diet(diet) => {
                if self.diet == Some(diet) {
                    self.diet = None;
                } else {
                    self.diet = Some(diet);
                }
                true
            }
            MenuFilter::Tag(tag) => {
                if self.tags.contains(tag) {
                    self.tags -= tag;
                    return true;
                }
                if self.tags.iter().count() >= MAX_ACTIVE_TAGS {
                    return false;
                }
                self.tags |= tag;
                true
            }
        }
    }

    /// Whether a dish passes the active diet restriction.
    ///
    /// Dishes without a veg flag pass every diet filter; the owner never
    /// classified them and hiding them would look like data loss.
    pub fn matches_diet(&self, dish: &Dish) -> bool {
        match (self.diet, dish.veg) {
            (None, _) | (_, None) => true,
            (Some(Diet::VegOnly), Some(veg)) => veg,
            (Some(Diet::NonVegOnly), Some(veg)) => !veg,
        }
    }
}

/// Case-insensitive search over dish name and description.
pub fn matches_search(dish: &Dish, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    if dish.name.to_lowercase().contains(&query) {
        return true;
    }
    dish.description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(&query))
}
