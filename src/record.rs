//! Dataset record model.
//!
//! A [`Record`] is one flat row of the dataset: group, code, name, customer
//! info, address, revenue, upload date. Records are immutable once loaded and
//! are replaced wholesale on reload, never patched in place.
//!
//! Every field is optional at the serde level so a sparse or malformed row
//! deserializes instead of aborting the whole load; the filter engine treats
//! a missing field under a non-empty criterion as a failed match.

use serde::{Deserialize, Serialize};

/// A revenue value as it arrives from the source: either a plain JSON number
/// or a comma-grouped string such as `"1,234,567"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

/// One flat data row. Field names match the source document keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub customer_code: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub revenue: Option<Amount>,
    #[serde(default)]
    pub upload_date: Option<String>,
}

impl Record {
    /// Field accessor used by the filter engine; keeps the criterion-to-field
    /// pairing in one place.
    pub fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::GroupName => self.group_name.as_deref(),
            FilterField::Name => self.name.as_deref(),
            FilterField::Code => self.code.as_deref(),
        }
    }
}

/// The three fields the user can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    GroupName,
    Name,
    Code,
}

impl FilterField {
    /// All filterable fields, in display order.
    pub const ALL: [FilterField; 3] = [
        FilterField::GroupName,
        FilterField::Name,
        FilterField::Code,
    ];

    /// Label shown in the filter prompt.
    pub fn label(self) -> &'static str {
        match self {
            FilterField::GroupName => "group",
            FilterField::Name => "name",
            FilterField::Code => "code",
        }
    }

    /// The next field in Tab-cycling order.
    pub fn next(self) -> Self {
        match self {
            FilterField::GroupName => FilterField::Name,
            FilterField::Name => FilterField::Code,
            FilterField::Code => FilterField::GroupName,
        }
    }
}
