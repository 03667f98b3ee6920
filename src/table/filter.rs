//! Filter engine: a conjunction of per-field substring predicates.
//!
//! A record is included iff, for each of the three filterable fields, the
//! criterion is empty OR the field value contains the criterion
//! case-insensitively. Criteria are normalized (trimmed, lowercased) at
//! construction so the per-record check is a plain `contains`.

use crate::record::{FilterField, Record};

/// Three independent substring predicates over group-name, name, and code.
///
/// Terms are stored trimmed and lowercased; an empty term matches everything
/// for its field. The overall filter is the logical AND of all three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    group_name: String,
    name: String,
    code: String,
}

impl FilterCriteria {
    /// Build criteria from raw user input; each term is trimmed and lowercased.
    pub fn new(group_name: &str, name: &str, code: &str) -> Self {
        Self {
            group_name: normalize(group_name),
            name: normalize(name),
            code: normalize(code),
        }
    }

    /// Replace one field's term with raw user input.
    pub fn set(&mut self, field: FilterField, raw: &str) {
        let slot = match field {
            FilterField::GroupName => &mut self.group_name,
            FilterField::Name => &mut self.name,
            FilterField::Code => &mut self.code,
        };
        *slot = normalize(raw);
    }

    /// The normalized term for a field; empty string means match-all.
    pub fn term(&self, field: FilterField) -> &str {
        match field {
            FilterField::GroupName => &self.group_name,
            FilterField::Name => &self.name,
            FilterField::Code => &self.code,
        }
    }

    /// The active (non-empty) term for a field, used for highlighting.
    pub fn active_term(&self, field: FilterField) -> Option<&str> {
        let term = self.term(field);
        (!term.is_empty()).then_some(term)
    }

    /// True when every term is empty, i.e. the filter is the identity.
    pub fn is_empty(&self) -> bool {
        self.group_name.is_empty() && self.name.is_empty() && self.code.is_empty()
    }

    /// Whether a single record satisfies all three predicates.
    ///
    /// A missing field under a non-empty criterion is a failed match; the
    /// check never panics on sparse records.
    pub fn matches(&self, record: &Record) -> bool {
        FilterField::ALL.iter().all(|&field| {
            let term = self.term(field);
            if term.is_empty() {
                return true;
            }
            match record.field(field) {
                Some(value) => value.to_lowercase().contains(term),
                None => false,
            }
        })
    }

    /// Apply the filter to a dataset, preserving original order.
    ///
    /// Pure and total: a fresh subsequence is produced on every call, never
    /// an incremental patch of a previous result.
    pub fn apply(&self, dataset: &[Record]) -> Vec<Record> {
        dataset
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(group: &str, name: &str, code: &str) -> Record {
        Record {
            group_name: Some(group.to_string()),
            name: Some(name.to_string()),
            code: Some(code.to_string()),
            ..Record::default()
        }
    }

    fn dataset() -> Vec<Record> {
        vec![
            record("Beverages", "Green Tea", "BV-001"),
            record("Beverages", "Black Coffee", "BV-002"),
            record("Snacks", "Tea Biscuits", "SN-001"),
            record("Snacks", "Peanuts", "SN-002"),
        ]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let data = dataset();
        let filtered = FilterCriteria::default().apply(&data);
        assert_eq!(filtered, data);
    }

    #[test]
    fn test_single_field_substring_case_insensitive() {
        let filtered = FilterCriteria::new("", "TEA", "").apply(&dataset());
        let names: Vec<_> = filtered.iter().map(|r| r.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["Green Tea", "Tea Biscuits"]);
    }

    #[test]
    fn test_conjunction_not_disjunction() {
        // "tea" matches two records, but only one of them is in Beverages
        let filtered = FilterCriteria::new("beverages", "tea", "").apply(&dataset());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name.as_deref(), Some("Green Tea"));
    }

    #[test]
    fn test_terms_are_trimmed_and_lowercased() {
        let criteria = FilterCriteria::new("  BEVERAGES  ", "", "");
        assert_eq!(criteria.term(FilterField::GroupName), "beverages");
        assert_eq!(criteria.apply(&dataset()).len(), 2);
    }

    #[test]
    fn test_missing_field_fails_non_empty_criterion() {
        let sparse = Record::default();
        let criteria = FilterCriteria::new("", "anything", "");
        assert!(!criteria.matches(&sparse));

        // ...but an empty criterion still matches a sparse record
        assert!(FilterCriteria::default().matches(&sparse));
    }

    #[test]
    fn test_order_preserved_as_subsequence() {
        let data = dataset();
        let filtered = FilterCriteria::new("", "", "sn").apply(&data);
        let codes: Vec<_> = filtered.iter().map(|r| r.code.as_deref().unwrap()).collect();
        assert_eq!(codes, vec!["SN-001", "SN-002"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let filtered = FilterCriteria::new("", "zzz", "").apply(&dataset());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_set_and_active_term() {
        let mut criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(criteria.active_term(FilterField::Name), None);

        criteria.set(FilterField::Name, " Tea ");
        assert_eq!(criteria.active_term(FilterField::Name), Some("tea"));
        assert!(!criteria.is_empty());

        criteria.set(FilterField::Name, "");
        assert!(criteria.is_empty());
    }
}
