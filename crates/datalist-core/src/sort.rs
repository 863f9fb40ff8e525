//! Stable ordering over record collections.
//!
//! Sorting never touches the caller's collection: [`stable_sort`] returns a new vector of
//! references, so records are neither moved nor cloned.

use crate::record::Record;
use crate::record::compare_values;
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
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

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// Field + direction pair describing the current table order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Ascending by record identifier; used whenever no explicit key was chosen.
    pub fn by_id() -> Self {
        Self::asc(Record::ID_FIELD)
    }

    /// Key produced by a sort request on `field`: the same field flips direction, a new field
    /// starts ascending.
    pub fn toggled(current: Option<&SortKey>, field: &str) -> Self {
        match current {
            Some(k) if k.field == field => Self::new(field, k.direction.flipped()),
            _ => Self::asc(field),
        }
    }
}

/// Sorts `items` with `compare`, breaking ties by original position.
///
/// `compare` does not need to be a total order: elements it reports as equal keep their input
/// order. The input slice is left untouched.
pub fn stable_sort<'a, T, F>(items: &'a [T], mut compare: F) -> Vec<&'a T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut decorated: Vec<(usize, &'a T)> = items.iter().enumerate().collect();
    decorated.sort_by(|(ia, a), (ib, b)| match compare(*a, *b) {
        Ordering::Equal => ia.cmp(ib),
        ord => ord,
    });
    decorated.into_iter().map(|(_, item)| item).collect()
}

/// Builds a record comparator for `field` in `direction`.
///
/// See [`compare_values`] for the ordering of mixed and missing values. Missing values come first
/// when ascending and last when descending.
pub fn get_sorting(
    direction: SortDirection,
    field: impl Into<String>,
) -> impl Fn(&Record, &Record) -> Ordering {
    let field = field.into();
    move |a: &Record, b: &Record| {
        let ord = compare_values(a.get(&field), b.get(&field));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Convenience: [`stable_sort`] with [`get_sorting`] for `key`.
pub fn sort_records<'a>(records: &'a [Record], key: &SortKey) -> Vec<&'a Record> {
    stable_sort(records, get_sorting(key.direction, key.field.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    fn ids(sorted: &[&Record]) -> Vec<String> {
        sorted.iter().map(|r| r.row_id().to_string()).collect()
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let records = vec![
            Record::new(2).with("name", "A"),
            Record::new(1).with("name", "A"),
            Record::new(3).with("name", "B"),
        ];
        let sorted = sort_records(&records, &SortKey::asc("name"));
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn descending_is_still_stable_among_ties() {
        let records = vec![
            Record::new(1).with("n", 1),
            Record::new(2).with("n", 2),
            Record::new(3).with("n", 1),
            Record::new(4).with("n", 2),
        ];
        let sorted = sort_records(&records, &SortKey::desc("n"));
        assert_eq!(ids(&sorted), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn sorting_sorted_input_is_identity() {
        let records: Vec<Record> = [5, 3, 9, 3, 1]
            .iter()
            .enumerate()
            .map(|(i, n)| Record::new(i).with("n", *n))
            .collect();
        let once: Vec<Record> = sort_records(&records, &SortKey::asc("n"))
            .into_iter()
            .cloned()
            .collect();
        let twice = sort_records(&once, &SortKey::asc("n"));
        assert_eq!(ids(&twice), ids(&once.iter().collect::<Vec<_>>()));
    }

    #[test]
    fn input_is_not_mutated() {
        let records = vec![Record::new(3), Record::new(1), Record::new(2)];
        let before = records.clone();
        let sorted = sort_records(&records, &SortKey::by_id());
        assert_eq!(ids(&sorted), vec!["1", "2", "3"]);
        assert_eq!(records, before);
    }

    #[test]
    fn missing_values_sort_before_defined_ones() {
        let records = vec![
            Record::new(1).with("name", "b"),
            Record::new(2),
            Record::new(3).with("name", "a"),
            Record::new(4).with("name", Value::Null),
        ];
        let sorted = sort_records(&records, &SortKey::asc("name"));
        assert_eq!(ids(&sorted), vec!["2", "4", "3", "1"]);
    }

    #[test]
    fn non_total_comparator_falls_back_to_input_order() {
        let items = vec![3, 1, 2];
        let sorted = stable_sort(&items, |_, _| Ordering::Equal);
        assert_eq!(sorted, vec![&3, &1, &2]);
    }

    #[test]
    fn toggled_flips_same_field_and_resets_new_field() {
        let k = SortKey::toggled(None, "name");
        assert_eq!(k, SortKey::asc("name"));
        let k = SortKey::toggled(Some(&k), "name");
        assert_eq!(k, SortKey::desc("name"));
        let k = SortKey::toggled(Some(&k), "age");
        assert_eq!(k, SortKey::asc("age"));
    }
}
