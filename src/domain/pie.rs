use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieRow {
    pub label: String,
    pub value: u64,
}

pub fn pie_table(counts: &BTreeMap<String, u64>) -> Vec<PieRow> {
    counts
        .iter()
        .map(|(label, value)| PieRow {
            label: label.clone(),
            value: *value,
        })
        .collect()
}
