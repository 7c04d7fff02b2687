use crate::feed::Document;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Which map of the document feeds a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Locations,
    AreaCategories,
}

impl OptionField {
    fn source(self, doc: &Document) -> &BTreeMap<String, u64> {
        match self {
            OptionField::Locations => &doc.flats_per_location,
            OptionField::AreaCategories => &doc.flats_per_area_cat,
        }
    }
}

impl FromStr for OptionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "locations" => Ok(OptionField::Locations),
            "areas" => Ok(OptionField::AreaCategories),
            other => Err(format!("unknown option field: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Dropdown options for `field`, sorted by key.
pub fn build_options(doc: &Document, field: OptionField) -> Vec<SelectOption> {
    // BTreeMap iteration is already in ascending key order.
    field
        .source(doc)
        .keys()
        .map(|key| SelectOption {
            label: key.clone(),
            value: key.clone(),
        })
        .collect()
}
