//! Client-side search and category filtering.
//!
//! Filtering is a pure function of the loaded items and the filter state.
//! `FilteredView` memoises the last result so a view can call it on every
//! render without redoing the work.

use crate::domain::Searchable;
use crate::loader::StoreSnapshot;

/// Category label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Category equality filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every category passes.
    #[default]
    All,
    /// Only items whose category equals this string (case-sensitive).
    Only(String),
}

impl CategoryFilter {
    /// Parse a tab label; `"All"` and the empty string mean no filter.
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() || label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == Some(wanted.as_str()),
        }
    }
}

/// Search box text plus the selected category tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: &str) -> Self {
        Self {
            query: query.into(),
            category: CategoryFilter::from_label(category),
        }
    }

    /// True when neither predicate can reject anything.
    pub fn is_identity(&self) -> bool {
        self.category == CategoryFilter::All && self.query.trim().is_empty()
    }

    /// Both predicates must hold.
    ///
    /// The query is matched against title and description joined by a single
    /// space, so a query can span the two but never glues their ends together.
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if !self.category.matches(item.category()) {
            return false;
        }

        let needle = self.query.trim();
        if needle.is_empty() {
            return true;
        }

        let haystack = format!("{} {}", item.title(), item.description()).to_lowercase();
        haystack.contains(&needle.to_lowercase())
    }
}

/// Stable filter: output keeps the input's relative order.
pub fn filter_items<T: Searchable + Clone>(items: &[T], filter: &FilterState) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.matches(*item))
        .cloned()
        .collect()
}

/// Category tab labels: `"All"` followed by each distinct category in
/// first-seen order.
pub fn categories<T: Searchable>(items: &[T]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORIES.to_string()];
    for category in items.iter().filter_map(Searchable::category) {
        if !labels.iter().any(|label| label == category) {
            labels.push(category.to_string());
        }
    }
    labels
}

/// Memoised filter over a store snapshot.
///
/// Recomputes only when the snapshot revision or the filter state changes.
#[derive(Debug)]
pub struct FilteredView<T> {
    cache: Option<(u64, FilterState, Vec<T>)>,
    computations: usize,
}

impl<T> Default for FilteredView<T> {
    fn default() -> Self {
        Self {
            cache: None,
            computations: 0,
        }
    }
}

impl<T: Searchable + Clone> FilteredView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtered items for this snapshot and filter.
    pub fn get(&mut self, snapshot: &StoreSnapshot<T>, filter: &FilterState) -> &[T] {
        let fresh = matches!(
            &self.cache,
            Some((revision, cached_filter, _))
                if *revision == snapshot.revision && cached_filter == filter
        );

        if !fresh {
            let items = filter_items(snapshot.state.visible_items(), filter);
            self.computations += 1;
            self.cache = Some((snapshot.revision, filter.clone(), items));
        }

        self.cache.as_ref().map_or(&[], |(_, _, items)| items.as_slice())
    }

    /// How many times the filter actually ran.
    pub const fn computations(&self) -> usize {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CollectionItem;
    use crate::loader::LoadState;

    fn item(id: &str, title: &str, description: &str, category: &str) -> CollectionItem {
        CollectionItem::new(id)
            .with_field("title", title)
            .with_field("description", description)
            .with_field("category", category)
    }

    fn sample() -> Vec<CollectionItem> {
        vec![
            item("1", "Getting Started Guide", "First steps", "Guides"),
            item("2", "Optimize Images", "Smaller image files", "Guides"),
            item("3", "DNS Basics", "Records explained", "Hosting"),
            item("4", "Image Hosting", "CDN setup", "Hosting"),
        ]
    }

    fn ids(items: &[CollectionItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_identity_filter_returns_input() {
        let items = sample();
        let filter = FilterState::default();
        assert!(filter.is_identity());
        assert_eq!(filter_items(&items, &filter), items);
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let items = sample();
        assert_eq!(filter_items(&items, &FilterState::new("   ", "All")), items);
    }

    #[test]
    fn test_case_insensitive_text_match() {
        let items = sample();
        let result = filter_items(&items, &FilterState::new("GUIDE", "All"));
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_text_matches_description() {
        let items = sample();
        let result = filter_items(&items, &FilterState::new("cdn", "All"));
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_title_and_description_joined_by_space() {
        let items = vec![item("1", "DNS", "Basics", "Hosting")];
        assert_eq!(filter_items(&items, &FilterState::new("dns basics", "All")).len(), 1);
        assert!(filter_items(&items, &FilterState::new("dnsbasics", "All")).is_empty());
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let items = sample();
        assert!(filter_items(&items, &FilterState::new("", "guides")).is_empty());
        assert_eq!(filter_items(&items, &FilterState::new("", "Guides")).len(), 2);
    }

    #[test]
    fn test_both_predicates_and_stable_order() {
        let items = sample();
        let result = filter_items(&items, &FilterState::new("image", "Hosting"));
        assert_eq!(ids(&result), vec!["4"]);

        let result = filter_items(&items, &FilterState::new("image", "All"));
        assert_eq!(ids(&result), vec!["2", "4"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample();
        for filter in [
            FilterState::new("image", "All"),
            FilterState::new("", "Hosting"),
            FilterState::new("s", "Guides"),
        ] {
            let once = filter_items(&items, &filter);
            let twice = filter_items(&once, &filter);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_items_without_category_only_pass_all() {
        let items = vec![CollectionItem::new("x").with_field("title", "Loose")];
        assert_eq!(filter_items(&items, &FilterState::new("", "All")).len(), 1);
        assert!(filter_items(&items, &FilterState::new("", "Guides")).is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(categories(&sample()), vec!["All", "Guides", "Hosting"]);
    }

    #[test]
    fn test_category_filter_labels() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("Guides").label(), "Guides");
    }

    #[test]
    fn test_filtered_view_memoises() {
        let snapshot = StoreSnapshot {
            revision: 3,
            state: LoadState::Ready(sample()),
        };
        let filter = FilterState::new("image", "All");
        let mut view = FilteredView::new();

        assert_eq!(view.get(&snapshot, &filter).len(), 2);
        assert_eq!(view.get(&snapshot, &filter).len(), 2);
        assert_eq!(view.computations(), 1);

        let narrowed = FilterState::new("image", "Guides");
        assert_eq!(view.get(&snapshot, &narrowed).len(), 1);
        assert_eq!(view.computations(), 2);

        let newer = StoreSnapshot {
            revision: 4,
            state: LoadState::Ready(sample()[..1].to_vec()),
        };
        assert!(view.get(&newer, &narrowed).is_empty());
        assert_eq!(view.computations(), 3);
    }
}
