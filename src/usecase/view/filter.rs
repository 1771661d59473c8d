use crate::domain::entities::dataset::Record;
use crate::domain::entities::view::{Category, FilterState};

/// Returns dataset indices of matching records, in dataset order.
pub fn filter_records(records: &[Record], filter: &FilterState) -> Vec<usize> {
    let needle = filter.search.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, filter, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// `needle` must already be lowercased.
pub fn record_matches(record: &Record, filter: &FilterState, needle: &str) -> bool {
    let categories_match = Category::ALL.iter().all(|category| {
        let selected = filter.selection(*category);
        selected.is_empty() || record.field(category.field()) == selected
    });
    if !categories_match {
        return false;
    }

    needle.is_empty()
        || record
            .values()
            .any(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Record> {
        vec![
            Record::from_pairs([
                ("APPLICATION", "AI"),
                ("COUNTRY/ORG", "EU"),
                ("INSTITUTION", "Commission"),
                ("DOCUMENT", "https://example.org/ai-act.pdf"),
            ]),
            Record::from_pairs([
                ("APPLICATION", "Payments"),
                ("COUNTRY/ORG", "US"),
                ("INSTITUTION", "Federal Reserve"),
            ]),
            Record::from_pairs([
                ("APPLICATION", "AI"),
                ("COUNTRY/ORG", "US"),
                ("INSTITUTION", "NIST"),
            ]),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let records = fixture();
        assert_eq!(
            filter_records(&records, &FilterState::default()),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn categorical_filters_are_exact_and_case_sensitive() {
        let records = fixture();
        let mut filter = FilterState::default();
        filter.select(Category::Application, "AI".to_string());
        filter.select(Category::CountryOrg, "US".to_string());
        assert_eq!(filter_records(&records, &filter), vec![2]);

        filter.select(Category::CountryOrg, "us".to_string());
        assert!(filter_records(&records, &filter).is_empty());
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let records = fixture();
        let filter = FilterState {
            search: "AI-ACT".to_string(),
            ..FilterState::default()
        };
        assert_eq!(filter_records(&records, &filter), vec![0]);

        let filter = FilterState {
            search: "reserve".to_string(),
            ..FilterState::default()
        };
        assert_eq!(filter_records(&records, &filter), vec![1]);
    }

    #[test]
    fn search_and_categories_combine() {
        let records = fixture();
        let filter = FilterState {
            application: "AI".to_string(),
            search: "nist".to_string(),
            ..FilterState::default()
        };
        assert_eq!(filter_records(&records, &filter), vec![2]);
    }
}
