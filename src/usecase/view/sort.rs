use crate::domain::entities::dataset::{Field, Record};
use crate::domain::entities::view::{SortDirection, SortState};

/// Same column flips direction; a different column starts ascending.
pub fn toggle_sort(current: Option<SortState>, column: Field) -> SortState {
    match current {
        Some(state) if state.column == column => SortState {
            column,
            direction: state.direction.flipped(),
        },
        _ => SortState {
            column,
            direction: SortDirection::Asc,
        },
    }
}

/// Equal keys fall back to dataset order in both directions.
pub fn sort_view(records: &[Record], indices: &mut [usize], sort: &SortState) {
    let mut keyed: Vec<(String, usize)> = indices
        .iter()
        .map(|&idx| (sort_key(&records[idx], sort.column), idx))
        .collect();

    keyed.sort_by(|(key_a, idx_a), (key_b, idx_b)| {
        let by_key = match sort.direction {
            SortDirection::Asc => key_a.cmp(key_b),
            SortDirection::Desc => key_b.cmp(key_a),
        };
        by_key.then(idx_a.cmp(idx_b))
    });

    for (slot, (_, idx)) in indices.iter_mut().zip(keyed) {
        *slot = idx;
    }
}

fn sort_key(record: &Record, column: Field) -> String {
    record.field(column).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(values: &[&str]) -> Vec<Record> {
        values
            .iter()
            .map(|value| Record::from_pairs([("INSTITUTION", *value)]))
            .collect()
    }

    fn institutions(records: &[Record], indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&idx| records[idx].field(Field::Institution).to_string())
            .collect()
    }

    #[test]
    fn toggle_flips_same_column_and_resets_on_new_column() {
        let first = toggle_sort(None, Field::Date);
        assert_eq!(first.direction, SortDirection::Asc);

        let second = toggle_sort(Some(first), Field::Date);
        assert_eq!(second.direction, SortDirection::Desc);

        let other = toggle_sort(Some(second), Field::Institution);
        assert_eq!(other.column, Field::Institution);
        assert_eq!(other.direction, SortDirection::Asc);
    }

    #[test]
    fn sort_is_case_insensitive_with_missing_values_first() {
        let mut data = records(&["beta", "Alpha", "gamma"]);
        data.push(Record::default());
        let mut indices: Vec<usize> = (0..data.len()).collect();

        sort_view(
            &data,
            &mut indices,
            &SortState {
                column: Field::Institution,
                direction: SortDirection::Asc,
            },
        );

        assert_eq!(indices, vec![3, 1, 0, 2]);
    }

    #[test]
    fn descending_reverses_ascending_and_keeps_ties_in_dataset_order() {
        let data = records(&["b", "a", "B", "c", "a"]);
        let mut asc: Vec<usize> = (0..data.len()).collect();
        let mut desc = asc.clone();

        sort_view(
            &data,
            &mut asc,
            &SortState {
                column: Field::Institution,
                direction: SortDirection::Asc,
            },
        );
        sort_view(
            &data,
            &mut desc,
            &SortState {
                column: Field::Institution,
                direction: SortDirection::Desc,
            },
        );

        assert_eq!(asc, vec![1, 4, 0, 2, 3]);
        assert_eq!(desc, vec![3, 0, 2, 1, 4]);
        assert_eq!(institutions(&data, &desc), vec!["c", "b", "B", "a", "a"]);
    }
}
