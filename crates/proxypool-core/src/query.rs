//! Column filters and sorting over the fetched proxy list

use crate::{Category, Proxy};
use serde::{Deserialize, Serialize};

/// Active column filters. An empty set puts no constraint on its column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilters {
    #[serde(default)]
    pub category: Vec<Category>,
    #[serde(default)]
    pub anonymous: Vec<bool>,
}

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            category: categories.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.anonymous.is_empty()
    }

    pub fn matches(&self, proxy: &Proxy) -> bool {
        (self.category.is_empty() || self.category.iter().any(|c| proxy.category == *c))
            && (self.anonymous.is_empty() || self.anonymous.contains(&proxy.anonymous))
    }

    /// Adds the category if absent, removes it otherwise
    pub fn toggle_category(&mut self, category: Category) {
        toggle(&mut self.category, category);
    }

    pub fn toggle_anonymous(&mut self, anonymous: bool) {
        toggle(&mut self.anonymous, anonymous);
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    match values.iter().position(|v| *v == value) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(value),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Speed,
    DetectedAt,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Speed => "Speed",
            SortField::DetectedAt => "DetectedAt",
        }
    }

    fn key(&self, proxy: &Proxy) -> i64 {
        match self {
            SortField::Speed => i64::from(proxy.speed),
            SortField::DetectedAt => proxy.detected_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascend,
    Descend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorter {
    pub field: SortField,
    #[serde(default)]
    pub order: SortOrder,
}

impl Sorter {
    pub fn ascend(field: SortField) -> Self {
        Self { field, order: SortOrder::Ascend }
    }

    pub fn descend(field: SortField) -> Self {
        Self { field, order: SortOrder::Descend }
    }

    /// Next sort state when a column header is clicked:
    /// unsorted -> ascending -> descending -> unsorted.
    pub fn cycle(current: Option<Sorter>, field: SortField) -> Option<Sorter> {
        match current {
            Some(s) if s.field == field => match s.order {
                SortOrder::Ascend => Some(Sorter::descend(field)),
                SortOrder::Descend => None,
            },
            _ => Some(Sorter::ascend(field)),
        }
    }
}

/// Recomputes the visible rows from the original list without touching it.
pub fn visible_projection(
    original: &[Proxy],
    filters: &ColumnFilters,
    sorter: Option<Sorter>,
) -> Vec<Proxy> {
    let mut rows: Vec<Proxy> = original
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect();

    if let Some(sorter) = sorter {
        rows.sort_by_key(|p| sorter.field.key(p));
        if sorter.order == SortOrder::Descend {
            rows.reverse();
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProxyCategory;

    fn proxy(ip: &str, speed: u32, category: Category, detected_at: i64) -> Proxy {
        Proxy {
            ip: ip.to_string(),
            port: 80,
            speed,
            category: category.into(),
            anonymous: false,
            detected_at,
        }
    }

    fn sample() -> Vec<Proxy> {
        vec![
            proxy("a", 2, Category::Http, 30),
            proxy("b", 0, Category::Https, 10),
            proxy("c", 1, Category::Http, 20),
            proxy("d", 1, Category::Https, 40),
        ]
    }

    #[test]
    fn test_filter_http_only() {
        let rows = visible_projection(&sample(), &ColumnFilters::with_categories([Category::Http]), None);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|p| p.category == Category::Http));
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let original = sample();
        let rows = visible_projection(&original, &ColumnFilters::default(), None);
        assert_eq!(rows, original);
    }

    #[test]
    fn test_filters_combine() {
        let mut original = sample();
        original[0].anonymous = true;
        original[1].anonymous = true;

        let mut filters = ColumnFilters::with_categories([Category::Http]);
        filters.toggle_anonymous(true);
        let rows = visible_projection(&original, &filters, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ip, "a");
    }

    #[test]
    fn test_descend_is_reversed_ascend() {
        let original = sample();
        let filters = ColumnFilters::with_categories([Category::Http, Category::Https]);

        let mut ascending = visible_projection(&original, &filters, Some(Sorter::ascend(SortField::Speed)));
        ascending.reverse();
        let descending = visible_projection(&original, &filters, Some(Sorter::descend(SortField::Speed)));
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_https_sorted_by_speed() {
        let original = vec![
            proxy("x", 5, Category::Http, 0),
            proxy("y", 1, Category::Https, 0),
        ];
        let rows = visible_projection(
            &original,
            &ColumnFilters::with_categories([Category::Https]),
            Some(Sorter::ascend(SortField::Speed)),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].speed, 1);
        assert_eq!(rows[0].category, Category::Https);
    }

    #[test]
    fn test_sort_by_detected_at() {
        let rows = visible_projection(&sample(), &ColumnFilters::default(), Some(Sorter::descend(SortField::DetectedAt)));
        let times: Vec<i64> = rows.iter().map(|p| p.detected_at).collect();
        assert_eq!(times, vec![40, 30, 20, 10]);
    }

    #[test]
    fn test_unlisted_category_only_unfiltered() {
        let mut original = sample();
        original[2].category = ProxyCategory::Other("http, https".to_string());

        let all = visible_projection(&original, &ColumnFilters::default(), None);
        assert_eq!(all.len(), 4);

        let http = visible_projection(&original, &ColumnFilters::with_categories([Category::Http]), None);
        assert_eq!(http.len(), 1);
        assert_eq!(http[0].ip, "a");
    }

    #[test]
    fn test_toggle_category() {
        let mut filters = ColumnFilters::new();
        filters.toggle_category(Category::Https);
        assert_eq!(filters.category, vec![Category::Https]);
        filters.toggle_category(Category::Https);
        assert!(filters.is_empty());
    }

    #[test]
    fn test_sorter_cycle() {
        let first = Sorter::cycle(None, SortField::Speed);
        assert_eq!(first, Some(Sorter::ascend(SortField::Speed)));
        let second = Sorter::cycle(first, SortField::Speed);
        assert_eq!(second, Some(Sorter::descend(SortField::Speed)));
        assert_eq!(Sorter::cycle(second, SortField::Speed), None);
        assert_eq!(
            Sorter::cycle(second, SortField::DetectedAt),
            Some(Sorter::ascend(SortField::DetectedAt))
        );
    }
}
