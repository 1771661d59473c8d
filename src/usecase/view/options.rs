use std::collections::BTreeSet;

use crate::domain::entities::dataset::Record;
use crate::domain::entities::view::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    fn all() -> Self {
        Self {
            value: String::new(),
            label: "All".to_string(),
        }
    }
}

/// Select options per category; each list starts with the empty "All" entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub application: Vec<FilterOption>,
    pub country_org: Vec<FilterOption>,
    pub institution: Vec<FilterOption>,
}

impl FilterOptions {
    pub fn for_category(&self, category: Category) -> &[FilterOption] {
        match category {
            Category::Application => &self.application,
            Category::CountryOrg => &self.country_org,
            Category::Institution => &self.institution,
        }
    }
}

pub fn derive_filter_options(records: &[Record]) -> FilterOptions {
    FilterOptions {
        application: options_for(records, Category::Application),
        country_org: options_for(records, Category::CountryOrg),
        institution: options_for(records, Category::Institution),
    }
}

fn options_for(records: &[Record], category: Category) -> Vec<FilterOption> {
    let distinct: BTreeSet<&str> = records
        .iter()
        .map(|record| record.field(category.field()))
        .filter(|value| !value.is_empty())
        .collect();

    std::iter::once(FilterOption::all())
        .chain(distinct.into_iter().map(|value| FilterOption {
            value: value.to_string(),
            label: value.to_string(),
        }))
        .collect()
}
