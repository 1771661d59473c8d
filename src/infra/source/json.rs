use serde_json::Value;

use crate::domain::entities::dataset::{Dataset, Record};
use crate::usecase::ports::source::LoadError;

/// Accepts only a top-level array whose items are all objects.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Array(items) = value else {
        return Err(LoadError::Shape);
    };

    let records = items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(Record::from(map)),
            _ => Err(LoadError::Shape),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::from(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dataset::Field;

    #[test]
    fn parses_array_of_objects_in_order() {
        let dataset = parse_dataset(
            br#"[{"APPLICATION":"AI","DATE":"2024-03-13"},{"APPLICATION":"Payments"}]"#,
        )
        .expect("dataset should parse");

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].field(Field::Date), "2024-03-13");
        assert_eq!(dataset[1].field(Field::Application), "Payments");
    }

    #[test]
    fn rejects_non_array_and_malformed_json() {
        assert!(matches!(parse_dataset(br#"{"a":1}"#), Err(LoadError::Shape)));
        assert!(matches!(parse_dataset(br#"[1, 2]"#), Err(LoadError::Shape)));
        assert!(matches!(parse_dataset(b"[{"), Err(LoadError::Parse(_))));
    }
}
