use crate::domain::entities::dataset::{Field, Record};

const BLANK_LABEL: &str = "(blank)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub by_application: Vec<GroupCount>,
    pub by_country_org: Vec<GroupCount>,
}

pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut summary = Summary::default();
    for record in records {
        summary.total += 1;
        bump(&mut summary.by_application, record.field(Field::Application));
        bump(&mut summary.by_country_org, record.field(Field::CountryOrg));
    }
    summary
}

// Groups stay in first-seen order.
fn bump(groups: &mut Vec<GroupCount>, value: &str) {
    let value = if value.is_empty() { BLANK_LABEL } else { value };
    match groups.iter_mut().find(|group| group.value == value) {
        Some(group) => group.count += 1,
        None => groups.push(GroupCount {
            value: value.to_string(),
            count: 1,
        }),
    }
}
