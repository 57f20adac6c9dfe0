//! Filter stage: narrows rows by a conjunction of dimension constraints.

use super::row::ListRow;
use std::collections::{BTreeMap, BTreeSet};

/// Member of a categorical value set
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterValue {
    /// Enum-like status code
    Code(i64),
    Text(String),
}

impl From<i32> for FilterValue {
    fn from(code: i32) -> Self {
        FilterValue::Code(code as i64)
    }
}

impl From<&str> for FilterValue {
    fn from(text: &str) -> Self {
        FilterValue::Text(text.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(text: String) -> Self {
        FilterValue::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Row value must be one of the set; an empty set constrains nothing
    OneOf(BTreeSet<FilterValue>),
    /// Inclusive numeric range
    Range { min: f64, max: f64 },
}

impl Constraint {
    pub fn is_active(&self) -> bool {
        match self {
            Constraint::OneOf(values) => !values.is_empty(),
            Constraint::Range { .. } => true,
        }
    }

    fn accepts<T: ListRow>(&self, row: &T, dimension: &str) -> bool {
        match self {
            Constraint::OneOf(values) if values.is_empty() => true,
            Constraint::OneOf(values) => row
                .field(dimension)
                .as_filter_value()
                .map_or(false, |v| values.contains(&v)),
            Constraint::Range { min, max } => row
                .field(dimension)
                .as_number()
                .map_or(false, |v| *min <= v && v <= *max),
        }
    }
}

/// Active filter predicates of a list view.
///
/// Dimensions combine with AND, values inside one categorical dimension with OR.
/// A dimension that is absent places no constraint on rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    dimensions: BTreeMap<String, Constraint>,
    search: String,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<V: Into<FilterValue>>(
        mut self,
        dimension: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.set_values(dimension, values);
        self
    }

    pub fn with_range(mut self, dimension: &str, min: f64, max: f64) -> Self {
        self.set_range(dimension, min, max);
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    pub fn set_values<V: Into<FilterValue>>(
        &mut self,
        dimension: &str,
        values: impl IntoIterator<Item = V>,
    ) {
        let values: BTreeSet<FilterValue> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.dimensions.remove(dimension);
        } else {
            self.dimensions
                .insert(dimension.to_string(), Constraint::OneOf(values));
        }
    }

    /// Multi-select click: adds the value, or removes it when already selected
    pub fn toggle_value(&mut self, dimension: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        let entry = self
            .dimensions
            .entry(dimension.to_string())
            .or_insert_with(|| Constraint::OneOf(BTreeSet::new()));
        if let Constraint::Range { .. } = entry {
            *entry = Constraint::OneOf(BTreeSet::new());
        }
        let now_empty = match entry {
            Constraint::OneOf(values) => {
                if !values.remove(&value) {
                    values.insert(value);
                }
                values.is_empty()
            }
            Constraint::Range { .. } => false,
        };
        if now_empty {
            self.dimensions.remove(dimension);
        }
    }

    pub fn set_range(&mut self, dimension: &str, min: f64, max: f64) {
        self.dimensions
            .insert(dimension.to_string(), Constraint::Range { min, max });
    }

    /// "Clear filters" of a single dimension
    pub fn clear_dimension(&mut self, dimension: &str) {
        self.dimensions.remove(dimension);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// "Reset Filters": drops every dimension and the search term
    pub fn reset(&mut self) {
        self.dimensions.clear();
        self.search.clear();
    }

    pub fn constraint(&self, dimension: &str) -> Option<&Constraint> {
        self.dimensions.get(dimension)
    }

    pub fn selected_values(&self, dimension: &str) -> Option<&BTreeSet<FilterValue>> {
        match self.dimensions.get(dimension) {
            Some(Constraint::OneOf(values)) => Some(values),
            _ => None,
        }
    }

    pub fn is_selected(&self, dimension: &str, value: &FilterValue) -> bool {
        self.selected_values(dimension)
            .map_or(false, |values| values.contains(value))
    }

    pub fn range(&self, dimension: &str) -> Option<(f64, f64)> {
        match self.dimensions.get(dimension) {
            Some(Constraint::Range { min, max }) => Some((*min, *max)),
            _ => None,
        }
    }

    fn search_term(&self) -> Option<String> {
        let term = self.search.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    /// Number of constraints that currently narrow the list
    pub fn active_count(&self) -> usize {
        let dims = self.dimensions.values().filter(|c| c.is_active()).count();
        dims + usize::from(self.search_term().is_some())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }

    /// True when the row satisfies every active dimension and the search term
    pub fn matches<T: ListRow>(&self, row: &T) -> bool {
        let dims_ok = self
            .dimensions
            .iter()
            .all(|(dimension, constraint)| constraint.accepts(row, dimension));
        if !dims_ok {
            return false;
        }

        match self.search_term() {
            None => true,
            Some(term) => T::search_fields().iter().any(|name| {
                row.field(name)
                    .search_text()
                    .map_or(false, |text| text.contains(&term))
            }),
        }
    }
}

/// Keeps the rows accepted by `filter`, preserving their order
pub fn filter_rows<'a, T: ListRow + 'a>(
    rows: impl IntoIterator<Item = &'a T>,
    filter: &FilterSpec,
) -> Vec<&'a T> {
    rows.into_iter().filter(|row| filter.matches(*row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_rows::{ids, row, TestRow};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const LOW_STOCK: i32 = 1;
    const IN_STOCK: i32 = 0;

    fn catalog() -> Vec<TestRow> {
        vec![
            row("INV001").name("Wireless Headphones").category("Electronics").status(IN_STOCK).price(89.99),
            row("INV003").name("Laptop Stand").category("Office").status(LOW_STOCK).price(49.99),
            row("INV005").name("HDMI Adapter").category("Accessories").status(LOW_STOCK).price(24.99),
            row("INV010").name("Smart Watch").category("Electronics").status(LOW_STOCK).price(199.99),
        ]
    }

    #[test]
    fn test_status_and_price_scenario() {
        let rows = vec![
            row("1").status(LOW_STOCK).price(50.0),
            row("2").status(IN_STOCK).price(500.0),
        ];
        let filter = FilterSpec::new()
            .with_values("status", [LOW_STOCK])
            .with_range("price", 0.0, 100.0);
        assert_eq!(ids(&filter_rows(&rows, &filter)), vec!["1"]);
    }

    #[test]
    fn test_categorical_is_or_within_dimension() {
        let rows = catalog();
        let filter = FilterSpec::new().with_values("category", ["Office", "Accessories"]);
        assert_eq!(ids(&filter_rows(&rows, &filter)), vec!["INV003", "INV005"]);
    }

    #[test]
    fn test_dimensions_are_and() {
        let rows = catalog();
        let filter = FilterSpec::new()
            .with_values("category", ["Electronics"])
            .with_values("status", [LOW_STOCK]);
        assert_eq!(ids(&filter_rows(&rows, &filter)), vec!["INV010"]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let rows = catalog();
        let filter = FilterSpec::new().with_range("price", 24.99, 49.99);
        assert_eq!(ids(&filter_rows(&rows, &filter)), vec!["INV003", "INV005"]);
    }

    #[test]
    fn test_range_rejects_missing_value() {
        let rows = vec![row("a"), row("b").price(10.0)];
        let filter = FilterSpec::new().with_range("price", 0.0, 100.0);
        assert_eq!(ids(&filter_rows(&rows, &filter)), vec!["b"]);
    }

    #[test]
    fn test_empty_value_set_is_unconstrained() {
        let rows = catalog();
        let filter = FilterSpec::new().with_values("status", Vec::<i32>::new());
        assert!(filter.is_unconstrained());
        assert_eq!(filter_rows(&rows, &filter).len(), rows.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let rows = catalog();
        let by_name = FilterSpec::new().with_search("  WIRELESS ");
        assert_eq!(ids(&filter_rows(&rows, &by_name)), vec!["INV001"]);

        let by_id = FilterSpec::new().with_search("inv01");
        assert_eq!(ids(&filter_rows(&rows, &by_id)), vec!["INV010"]);

        let by_category = FilterSpec::new().with_search("offi");
        assert_eq!(ids(&filter_rows(&rows, &by_category)), vec!["INV003"]);
    }

    #[test]
    fn test_toggle_value_adds_and_removes() {
        let mut filter = FilterSpec::new();
        filter.toggle_value("status", LOW_STOCK);
        filter.toggle_value("status", IN_STOCK);
        assert!(filter.is_selected("status", &FilterValue::Code(1)));
        assert_eq!(filter.active_count(), 1);

        filter.toggle_value("status", LOW_STOCK);
        filter.toggle_value("status", IN_STOCK);
        assert_eq!(filter.constraint("status"), None);
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_clear_dimension_and_reset() {
        let mut filter = FilterSpec::new()
            .with_values("category", ["Office"])
            .with_range("price", 0.0, 10.0)
            .with_search("stand");
        assert_eq!(filter.active_count(), 3);

        filter.clear_dimension("category");
        assert_eq!(filter.selected_values("category"), None);
        assert_eq!(filter.range("price"), Some((0.0, 10.0)));

        filter.reset();
        assert!(filter.is_unconstrained());
        assert_eq!(filter.search(), "");
    }

    fn arb_rows() -> impl Strategy<Value = Vec<TestRow>> {
        prop::collection::vec((0i32..4, 0.0f64..600.0, "[a-c]{1,3}"), 0..40).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (status, price, name))| {
                    row(&format!("r{}", i)).status(status).price(price).name(&name)
                })
                .collect()
        })
    }

    fn arb_filter() -> impl Strategy<Value = FilterSpec> {
        (
            prop::collection::btree_set(0i32..4, 0..3),
            prop::option::of((0.0f64..300.0, 300.0f64..600.0)),
            prop::option::of("[a-c]{0,2}"),
        )
            .prop_map(|(statuses, range, search)| {
                let mut filter = FilterSpec::new().with_values("status", statuses);
                if let Some((min, max)) = range {
                    filter.set_range("price", min, max);
                }
                if let Some(term) = search {
                    filter.set_search(term);
                }
                filter
            })
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(rows in arb_rows(), filter in arb_filter()) {
            let once = filter_rows(&rows, &filter);
            let twice = filter_rows(once.iter().copied(), &filter);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_unconstrained_filter_is_identity(rows in arb_rows()) {
            let filter = FilterSpec::new().with_values("status", Vec::<i32>::new()).with_search("   ");
            let all: Vec<&TestRow> = rows.iter().collect();
            prop_assert_eq!(filter_rows(&rows, &filter), all);
        }

        #[test]
        fn prop_dimension_order_does_not_matter(rows in arb_rows(), statuses in prop::collection::btree_set(0i32..4, 1..3)) {
            let a = FilterSpec::new()
                .with_values("status", statuses.clone())
                .with_range("price", 100.0, 400.0);
            let b = FilterSpec::new()
                .with_range("price", 100.0, 400.0)
                .with_values("status", statuses);
            prop_assert_eq!(filter_rows(&rows, &a), filter_rows(&rows, &b));
        }
    }
}
