//! Sort stage: orders rows by one field without touching the source.

use super::row::{FieldValue, ListRow};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort field and direction.
///
/// A sort without field or without direction leaves rows in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Option<String>,
    pub direction: Option<SortDirection>,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction: Some(direction),
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Header click: same field flips asc <-> desc, any other field starts asc
    pub fn toggle(&mut self, field: &str) {
        match (self.field.as_deref(), self.direction) {
            (Some(current), Some(direction)) if current == field => {
                self.direction = Some(direction.flipped());
            }
            _ => {
                self.field = Some(field.to_string());
                self.direction = Some(SortDirection::Asc);
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.field.is_some() && self.direction.is_some()
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.is_active() && self.field.as_deref() == Some(field)
    }

    /// Header glyph for a column
    pub fn indicator(&self, field: &str) -> &'static str {
        if !self.is_sorted_by(field) {
            return " ⇅";
        }
        match self.direction {
            Some(SortDirection::Desc) => " ▼",
            _ => " ▲",
        }
    }

    /// CSS class for the indicator span
    pub fn indicator_class(&self, field: &str) -> &'static str {
        if self.is_sorted_by(field) {
            "sort-icon active"
        } else {
            "sort-icon"
        }
    }
}

/// Case-insensitive collation; on a tie lowercase sorts before uppercase
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Ascending comparison of two field values.
///
/// Only number/number and text/text pairs are ordered; every other pairing
/// compares equal. [`sort_refs`] never hands mixed pairs to the sort itself.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (FieldValue::Text(x), FieldValue::Text(y)) => locale_compare(x, y),
        _ => Ordering::Equal,
    }
}

/// Sorts row references according to `sort` (stable).
///
/// Numbers are ordered among the slots holding numbers and text among the
/// slots holding text. Rows with a missing, opaque or NaN value stay in their
/// position, so the comparator only ever sees a total order.
pub fn sort_refs<'a, T: ListRow>(rows: Vec<&'a T>, sort: &SortSpec) -> Vec<&'a T> {
    let (Some(field), Some(direction)) = (sort.field.as_deref(), sort.direction) else {
        return rows;
    };
    if rows.len() < 2 {
        return rows;
    }

    let values: Vec<FieldValue> = rows.iter().map(|row| row.field(field)).collect();
    let mut numbers = Vec::new();
    let mut texts = Vec::new();
    for (slot, value) in values.iter().enumerate() {
        match value {
            FieldValue::Number(n) if !n.is_nan() => numbers.push(slot),
            FieldValue::Text(_) => texts.push(slot),
            _ => {}
        }
    }

    let mut sorted = rows.clone();
    for slots in [numbers, texts] {
        let mut order = slots.clone();
        order.sort_by(|&a, &b| {
            let cmp = compare_values(&values[a], &values[b]);
            match direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
        for (&slot, source) in slots.iter().zip(order) {
            sorted[slot] = rows[source];
        }
    }
    sorted
}

/// Returns the rows ordered by `sort`; the input slice is left as is
pub fn sort_rows<'a, T: ListRow>(rows: &'a [T], sort: &SortSpec) -> Vec<&'a T> {
    sort_refs(rows.iter().collect(), sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_rows::{ids, row, TestRow};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sample() -> Vec<TestRow> {
        vec![
            row("a").name("banana").price(3.0),
            row("b").name("Apple").price(1.0),
            row("c").name("cherry").price(2.0),
        ]
    }

    #[test]
    fn test_null_spec_keeps_source_order() {
        let rows = sample();
        assert_eq!(ids(&sort_rows(&rows, &SortSpec::default())), vec!["a", "b", "c"]);

        let field_only = SortSpec {
            field: Some("price".into()),
            direction: None,
        };
        assert_eq!(ids(&sort_rows(&rows, &field_only)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_numeric_sort() {
        let rows = sample();
        assert_eq!(ids(&sort_rows(&rows, &SortSpec::asc("price"))), vec!["b", "c", "a"]);
        assert_eq!(ids(&sort_rows(&rows, &SortSpec::desc("price"))), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let rows = sample();
        assert_eq!(ids(&sort_rows(&rows, &SortSpec::asc("name"))), vec!["b", "a", "c"]);
        assert_eq!(ids(&sort_rows(&rows, &SortSpec::desc("name"))), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_missing_values_do_not_reorder() {
        let rows = vec![
            row("a").price(5.0),
            row("b"),
            row("c").price(1.0),
            row("d"),
        ];
        let sorted = sort_rows(&rows, &SortSpec::asc("price"));
        // rows without a price keep their slots
        assert_eq!(ids(&sorted), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_mixed_kinds_sort_within_their_slots() {
        let rows = vec![
            row("n3").tag(FieldValue::Number(3.0)),
            row("tb").tag(FieldValue::text("beta")),
            row("x").tag(FieldValue::Opaque),
            row("n1").tag(FieldValue::Number(1.0)),
            row("nan").tag(FieldValue::Number(f64::NAN)),
            row("ta").tag(FieldValue::text("Alpha")),
            row("m"),
        ];
        assert_eq!(
            ids(&sort_rows(&rows, &SortSpec::asc("tag"))),
            vec!["n1", "ta", "x", "n3", "nan", "tb", "m"]
        );
        assert_eq!(
            ids(&sort_rows(&rows, &SortSpec::desc("tag"))),
            vec!["n3", "tb", "x", "n1", "nan", "ta", "m"]
        );
    }

    #[test]
    fn test_mixed_types_compare_equal() {
        assert_eq!(
            compare_values(&FieldValue::Number(1.0), &FieldValue::text("1")),
            Ordering::Equal
        );
        assert_eq!(compare_values(&FieldValue::Opaque, &FieldValue::Opaque), Ordering::Equal);
    }

    #[test]
    fn test_source_is_untouched() {
        let rows = sample();
        let before = rows.clone();
        let _ = sort_rows(&rows, &SortSpec::desc("name"));
        assert_eq!(rows, before);
    }

    #[test]
    fn test_locale_compare_lowercase_first() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_toggle_rule() {
        let mut sort = SortSpec::default();
        sort.toggle("name");
        assert_eq!(sort, SortSpec::asc("name"));
        sort.toggle("name");
        assert_eq!(sort, SortSpec::desc("name"));
        sort.toggle("name");
        assert_eq!(sort, SortSpec::asc("name"));
        sort.toggle("price");
        assert_eq!(sort, SortSpec::asc("price"));
    }

    #[test]
    fn test_indicator() {
        let sort = SortSpec::desc("price");
        assert_eq!(sort.indicator("price"), " ▼");
        assert_eq!(sort.indicator("name"), " ⇅");
        assert_eq!(SortSpec::asc("name").indicator("name"), " ▲");
        assert_eq!(sort.indicator_class("price"), "sort-icon active");
    }

    fn arb_tag() -> impl Strategy<Value = Option<FieldValue>> {
        prop_oneof![
            Just(None),
            Just(Some(FieldValue::Opaque)),
            Just(Some(FieldValue::Number(f64::NAN))),
            (-500.0f64..500.0).prop_map(|n| Some(FieldValue::Number(n))),
            "[a-cA-C]{0,3}".prop_map(|s| Some(FieldValue::Text(s))),
        ]
    }

    fn tagged_rows(tags: Vec<Option<FieldValue>>) -> Vec<TestRow> {
        tags.into_iter()
            .enumerate()
            .map(|(i, tag)| {
                let r = row(&i.to_string());
                match tag {
                    Some(value) => r.tag(value),
                    None => r,
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_missing_prices_keep_their_slots(
            prices in prop::collection::vec(prop::option::weighted(0.66, -1000.0f64..1000.0), 20..220),
            descending in any::<bool>(),
        ) {
            let rows: Vec<TestRow> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| match p {
                    Some(p) => row(&i.to_string()).price(*p),
                    None => row(&i.to_string()),
                })
                .collect();
            let sort = if descending { SortSpec::desc("price") } else { SortSpec::asc("price") };
            let sorted = sort_rows(&rows, &sort);

            prop_assert_eq!(sorted.len(), rows.len());
            let mut seen: Vec<&str> = ids(&sorted);
            seen.sort_unstable();
            let mut all: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
            all.sort_unstable();
            prop_assert_eq!(seen, all);

            for (source, placed) in rows.iter().zip(&sorted) {
                if source.price.is_none() {
                    prop_assert_eq!(source.id.as_str(), placed.id.as_str());
                }
            }
            let priced: Vec<f64> = sorted.iter().filter_map(|r| r.price).collect();
            for pair in priced.windows(2) {
                if descending {
                    prop_assert!(pair[0] >= pair[1]);
                } else {
                    prop_assert!(pair[0] <= pair[1]);
                }
            }
        }

        #[test]
        fn prop_mixed_kinds_never_lose_rows(
            tags in prop::collection::vec(arb_tag(), 20..200),
            descending in any::<bool>(),
        ) {
            let rows = tagged_rows(tags);
            let sort = if descending { SortSpec::desc("tag") } else { SortSpec::asc("tag") };
            let sorted = sort_rows(&rows, &sort);
            prop_assert_eq!(sorted.len(), rows.len());

            for (source, placed) in rows.iter().zip(&sorted) {
                let kind = |r: &TestRow| std::mem::discriminant(&r.field("tag"));
                prop_assert_eq!(kind(source), kind(*placed));
            }
        }

        #[test]
        fn prop_null_field_is_identity(prices in prop::collection::vec(-1000.0f64..1000.0, 0..40)) {
            let rows: Vec<TestRow> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| row(&i.to_string()).price(*p))
                .collect();
            let sorted = sort_rows(&rows, &SortSpec { field: None, direction: Some(SortDirection::Desc) });
            let expected: Vec<&TestRow> = rows.iter().collect();
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn prop_desc_is_reversed_asc_without_ties(
            prices in prop::collection::btree_set(-100_000i64..100_000, 0..40)
        ) {
            // btree_set guarantees distinct values; shuffle them by reversing
            let rows: Vec<TestRow> = prices
                .iter()
                .rev()
                .enumerate()
                .map(|(i, p)| row(&i.to_string()).price(*p as f64))
                .collect();
            let mut asc = sort_rows(&rows, &SortSpec::asc("price"));
            asc.reverse();
            let desc = sort_rows(&rows, &SortSpec::desc("price"));
            prop_assert_eq!(asc, desc);
        }
    }
}
