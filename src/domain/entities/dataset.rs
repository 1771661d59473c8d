use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// Known record fields. The JSON key is the exact spelling used in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Application,
    CountryOrg,
    Institution,
    Date,
    Document,
    DocIndex,
}

impl Field {
    pub const fn key(self) -> &'static str {
        match self {
            Field::Application => "APPLICATION",
            Field::CountryOrg => "COUNTRY/ORG",
            Field::Institution => "INSTITUTION",
            Field::Date => "DATE",
            Field::Document => "DOCUMENT",
            Field::DocIndex => "DOC # (INDEX)",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Field::Application => "Application",
            Field::CountryOrg => "Country/Org",
            Field::Institution => "Institution",
            Field::Date => "Date",
            Field::Document => "Document",
            Field::DocIndex => "Doc # (Index)",
        }
    }
}

/// One row of the dataset. Values are kept as text; `null` fields are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Missing fields read as the empty string.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn field(&self, field: Field) -> &str {
        self.get(field.key())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.values().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record::from_pairs(
            map.into_iter()
                .filter_map(|(key, value)| value_to_text(value).map(|text| (key, text))),
        )
    }
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number_to_text(&number)),
        other => Some(other.to_string()),
    }
}

// Integral floats print without a fraction, so `1.0` reads as `1`.
fn number_to_text(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) if float.fract() == 0.0 && float.abs() < 1e21 => format!("{float:.0}"),
        _ => number.to_string(),
    }
}

/// The loaded records in file order. Cheap to clone; never mutated after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset(Arc<[Record]>);

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Dataset(records.into())
    }
}

impl Deref for Dataset {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
