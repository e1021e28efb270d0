//! Query engine: pure transforms over record collections
//!
//! A [`Collection`] is an ordered sequence of records representing a view.
//! Every operation returns a new `Collection` and leaves the input untouched,
//! so a browser session can keep its full baseline and its current view side
//! by side and reset cheaply.
//!
//! All three operations treat an empty term or property name as a no-op that
//! returns the input unchanged, so they can be chained blindly from optional
//! CLI arguments.

use crate::record::Record;
use std::cmp::Ordering;

/// An ordered sequence of records representing "what filters apply now"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection(Vec<Record>);

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self(records)
    }
}

impl Collection {
    /// Number of records in the view
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the view holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the records in view order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.0
    }

    /// Consume the collection, yielding its records
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.0
    }

    /// Record at a view index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.0.get(index)
    }

    /// Case-insensitive substring-or-subsequence match on a property value
    ///
    /// Records lacking the property fall back to matching against the full
    /// file text. This is a stable filter, not a relevance ranking: matches
    /// keep their original collection order.
    #[must_use]
    pub fn fuzzy_search(&self, property: &str, term: &str) -> Self {
        if property.is_empty() || term.is_empty() {
            return self.clone();
        }

        let needle = term.to_lowercase();
        let matches = self
            .0
            .iter()
            .filter(|record| {
                let haystack = record.property(property).unwrap_or(&record.raw_content);
                fuzzy_matches(&haystack.to_lowercase(), &needle)
            })
            .cloned()
            .collect();

        Self(matches)
    }

    /// Case-sensitive exact equality on a property value
    ///
    /// Records lacking the property are excluded; there is no full-text
    /// fallback in exact mode.
    #[must_use]
    pub fn exact_search(&self, property: &str, term: &str) -> Self {
        if property.is_empty() || term.is_empty() {
            return self.clone();
        }

        let matches = self
            .0
            .iter()
            .filter(|record| record.property(property) == Some(term))
            .cloned()
            .collect();

        Self(matches)
    }

    /// Stable lexical sort by a property's string value
    ///
    /// Records missing the property sort after all records that have it,
    /// preserving their relative order. `reverse` inverts the final ordering
    /// as a whole, so the missing-property tail ends up first under reverse.
    /// Comparison is lexical even for values that look numeric or date-like.
    #[must_use]
    pub fn sorted_by(&self, property: &str, reverse: bool) -> Self {
        if property.is_empty() {
            return self.clone();
        }

        let (mut present, absent): (Vec<Record>, Vec<Record>) = self
            .0
            .iter()
            .cloned()
            .partition(|record| record.property(property).is_some());

        present.sort_by(|a, b| {
            match (a.property(property), b.property(property)) {
                (Some(left), Some(right)) => left.cmp(right),
                // partition guarantees both sides are present
                _ => Ordering::Equal,
            }
        });

        let mut ordered = present;
        ordered.extend(absent);
        if reverse {
            ordered.reverse();
        }

        Self(ordered)
    }
}

/// True when `needle` occurs in `haystack` as a substring or, failing that,
/// as an in-order character subsequence. Both sides must already be
/// lowercased by the caller.
fn fuzzy_matches(haystack: &str, needle: &str) -> bool {
    if haystack.contains(needle) {
        return true;
    }

    let mut chars = haystack.chars();
    needle
        .chars()
        .all(|wanted| chars.by_ref().any(|c| c == wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordKind;
    use std::path::PathBuf;

    fn todo(name: &str, text: &str) -> Record {
        Record::parse(
            RecordKind::Todo,
            PathBuf::from(format!("/tmp/todos/{name}")),
            text,
        )
    }

    fn statuses(collection: &Collection) -> Vec<&str> {
        collection
            .records()
            .iter()
            .map(|rec| rec.property("status").unwrap_or("-"))
            .collect()
    }

    fn sample() -> Collection {
        Collection::from(vec![
            todo("a.txt", "title: Water plants\nstatus: open\n"),
            todo("b.txt", "title: Write report\nstatus: open\n"),
            todo("c.txt", "title: Call dentist\nstatus: done\n"),
        ])
    }

    #[test]
    fn test_exact_search_keeps_original_order() {
        let result = sample().exact_search("status", "open");

        assert_eq!(result.len(), 2);
        let titles: Vec<_> = result
            .records()
            .iter()
            .map(|rec| rec.title().to_string())
            .collect();
        assert_eq!(titles, vec!["Water plants", "Write report"]);
    }

    #[test]
    fn test_exact_search_is_case_sensitive_and_excludes_missing() {
        let collection = Collection::from(vec![
            todo("a.txt", "status: Open\n"),
            todo("b.txt", "status: open\n"),
            todo("c.txt", "title: no status here\n"),
        ]);

        let result = collection.exact_search("status", "open");
        assert_eq!(result.len(), 1);
        assert_eq!(result.records()[0].file_name(), "b.txt");
    }

    #[test]
    fn test_fuzzy_substring_is_case_insensitive() {
        let result = sample().fuzzy_search("title", "REPORT");
        assert_eq!(result.len(), 1);
        assert_eq!(result.records()[0].title(), "Write report");
    }

    #[test]
    fn test_fuzzy_subsequence_match() {
        // "wrt" is not a substring of "Write report" but is a subsequence
        let result = sample().fuzzy_search("title", "wrt");
        assert_eq!(result.len(), 2); // "Water plants" also contains w..r..t
        assert_eq!(result.records()[0].title(), "Water plants");
        assert_eq!(result.records()[1].title(), "Write report");
    }

    #[test]
    fn test_fuzzy_falls_back_to_raw_content() {
        let collection = Collection::from(vec![
            todo("a.txt", "title: Errands\n\nbuy stamps at the post office\n"),
            todo("b.txt", "title: Other\n\nnothing relevant\n"),
        ]);

        // neither record has a "body" property, so raw content is searched
        let result = collection.fuzzy_search("body", "stamps");
        assert_eq!(result.len(), 1);
        assert_eq!(result.records()[0].title(), "Errands");
    }

    #[test]
    fn test_exact_is_subset_of_fuzzy() {
        let collection = sample();
        let exact = collection.exact_search("status", "open");
        let fuzzy = collection.fuzzy_search("status", "open");

        for record in exact.records() {
            assert!(fuzzy.records().contains(record));
        }
    }

    #[test]
    fn test_empty_term_and_property_are_no_ops() {
        let collection = sample();

        assert_eq!(collection.fuzzy_search("status", ""), collection);
        assert_eq!(collection.fuzzy_search("", "open"), collection);
        assert_eq!(collection.exact_search("status", ""), collection);
        assert_eq!(collection.sorted_by("", true), collection);
    }

    #[test]
    fn test_sort_status_scenario() {
        // three todos with status open, open, done
        let collection = sample();

        let asc = collection.sorted_by("status", false);
        assert_eq!(statuses(&asc), vec!["done", "open", "open"]);

        let desc = collection.sorted_by("status", true);
        assert_eq!(statuses(&desc), vec!["open", "open", "done"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let collection = sample();
        let sorted = collection.sorted_by("status", false);

        // the two "open" records keep their original relative order
        assert_eq!(sorted.records()[1].title(), "Water plants");
        assert_eq!(sorted.records()[2].title(), "Write report");
    }

    #[test]
    fn test_missing_property_sorts_last_and_flips_under_reverse() {
        let collection = Collection::from(vec![
            todo("a.txt", "due: 2026-09-02\n"),
            todo("b.txt", "title: no due date\n"),
            todo("c.txt", "due: 2026-09-01\n"),
            todo("d.txt", "title: also none\n"),
        ]);

        let asc = collection.sorted_by("due", false);
        let names: Vec<_> = asc.records().iter().map(Record::file_name).collect();
        assert_eq!(names, vec!["c.txt", "a.txt", "b.txt", "d.txt"]);

        let desc = collection.sorted_by("due", true);
        let names: Vec<_> = desc.records().iter().map(Record::file_name).collect();
        assert_eq!(names, vec!["d.txt", "b.txt", "a.txt", "c.txt"]);
    }

    #[test]
    fn test_reverse_is_true_inversion_of_forward_sort() {
        let collection = sample();
        let forward = collection.sorted_by("status", false);
        let double = forward.sorted_by("status", true);

        let mut expected = forward.records().to_vec();
        expected.reverse();
        assert_eq!(double.records(), expected.as_slice());
    }

    #[test]
    fn test_sort_is_lexical_not_numeric() {
        let collection = Collection::from(vec![
            todo("a.txt", "priority: 10\n"),
            todo("b.txt", "priority: 9\n"),
        ]);

        let sorted = collection.sorted_by("priority", false);
        // lexical: "10" < "9"
        assert_eq!(sorted.records()[0].property("priority"), Some("10"));
    }

    #[test]
    fn test_operations_do_not_mutate_source() {
        let collection = sample();
        let before = collection.clone();

        let _ = collection.fuzzy_search("title", "x");
        let _ = collection.exact_search("status", "done");
        let _ = collection.sorted_by("status", true);

        assert_eq!(collection, before);
    }
}
