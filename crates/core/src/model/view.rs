use serde::{Deserialize, Serialize};

use crate::model::ViewId;

/// Whether a view is an overview page or drilled-down content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewCategory {
    Listing,
    Detail,
}

impl ViewCategory {
    #[must_use]
    pub fn is_listing(self) -> bool {
        matches!(self, Self::Listing)
    }
}

/// Static declaration of a view: its id and category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSpec {
    pub id: ViewId,
    pub category: ViewCategory,
}

impl ViewSpec {
    #[must_use]
    pub fn listing(id: ViewId) -> Self {
        Self {
            id,
            category: ViewCategory::Listing,
        }
    }

    #[must_use]
    pub fn detail(id: ViewId) -> Self {
        Self {
            id,
            category: ViewCategory::Detail,
        }
    }
}

/// Visibility of the two navigation regions.
///
/// Derived from the active view's category; never set independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationAffordance {
    pub listing_nav_visible: bool,
    pub detail_nav_visible: bool,
}

impl NavigationAffordance {
    #[must_use]
    pub fn for_category(category: ViewCategory) -> Self {
        let listing = category.is_listing();
        Self {
            listing_nav_visible: listing,
            detail_nav_visible: !listing,
        }
    }
}

impl Default for NavigationAffordance {
    fn default() -> Self {
        Self::for_category(ViewCategory::Listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affordance_is_complement_of_category() {
        let listing = NavigationAffordance::for_category(ViewCategory::Listing);
        assert!(listing.listing_nav_visible);
        assert!(!listing.detail_nav_visible);

        let detail = NavigationAffordance::for_category(ViewCategory::Detail);
        assert!(!detail.listing_nav_visible);
        assert!(detail.detail_nav_visible);
    }
}
