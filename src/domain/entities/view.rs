use std::str::FromStr;

use serde::Deserialize;

use crate::domain::entities::dataset::Field;

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

    pub fn as_attr(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Field,
    pub direction: SortDirection,
}

/// The three single-select filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Application,
    CountryOrg,
    Institution,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Application,
        Category::CountryOrg,
        Category::Institution,
    ];

    pub const fn field(self) -> Field {
        match self {
            Category::Application => Field::Application,
            Category::CountryOrg => Field::CountryOrg,
            Category::Institution => Field::Institution,
        }
    }

    pub const fn control_id(self) -> &'static str {
        match self {
            Category::Application => "filter-application",
            Category::CountryOrg => "filter-country",
            Category::Institution => "filter-institution",
        }
    }
}

/// Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub application: String,
    pub country_org: String,
    pub institution: String,
    pub search: String,
}

impl FilterState {
    pub fn selection(&self, category: Category) -> &str {
        match category {
            Category::Application => &self.application,
            Category::CountryOrg => &self.country_org,
            Category::Institution => &self.institution,
        }
    }

    pub fn select(&mut self, category: Category, value: String) {
        let slot = match category {
            Category::Application => &mut self.application,
            Category::CountryOrg => &mut self.country_org,
            Category::Institution => &mut self.institution,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: usize,
    pub size: usize,
}

impl PageState {
    pub fn first(size: usize) -> Self {
        Self {
            current: 1,
            size: size.max(1),
        }
    }
}

/// Which column layout the table renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    Classic,
    #[default]
    Indexed,
}

impl SchemaVariant {
    pub fn columns(self) -> &'static [Field] {
        match self {
            SchemaVariant::Classic => &[
                Field::Application,
                Field::CountryOrg,
                Field::Institution,
                Field::Date,
                Field::Document,
            ],
            SchemaVariant::Indexed => &[
                Field::DocIndex,
                Field::Application,
                Field::CountryOrg,
                Field::Institution,
                Field::Date,
                Field::Document,
            ],
        }
    }

    pub fn links_documents(self) -> bool {
        matches!(self, SchemaVariant::Indexed)
    }
}

impl FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(SchemaVariant::Classic),
            "indexed" => Ok(SchemaVariant::Indexed),
            other => Err(format!("unknown schema variant: {other} (expected classic or indexed)")),
        }
    }
}

/// Whether the summary panel counts the whole dataset or only the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryScope {
    #[default]
    Dataset,
    Filtered,
}
