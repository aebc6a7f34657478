//! Filter and sort selections offered by the client list.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::client::GstType;
use crate::domain::types::TypeConstraintError;

/// Category restriction applied before sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterKey {
    #[default]
    All,
    Gst(GstType),
}

impl FilterKey {
    pub const ALL: [FilterKey; 4] = [
        FilterKey::All,
        FilterKey::Gst(GstType::Regular),
        FilterKey::Gst(GstType::Composite),
        FilterKey::Gst(GstType::Iff),
    ];

    /// Human readable label shown in the filter picker.
    pub const fn label(self) -> &'static str {
        match self {
            FilterKey::All => "All Clients",
            FilterKey::Gst(GstType::Regular) => "Regular GST",
            FilterKey::Gst(GstType::Composite) => "Composite GST",
            FilterKey::Gst(GstType::Iff) => "IFF GST",
        }
    }

    pub fn matches(self, gst_type: GstType) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Gst(wanted) => wanted == gst_type,
        }
    }
}

impl Display for FilterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterKey::All => f.write_str("all"),
            FilterKey::Gst(gst_type) => write!(f, "gst-{gst_type}"),
        }
    }
}

impl FromStr for FilterKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(FilterKey::All);
        }
        s.strip_prefix("gst-")
            .and_then(|suffix| suffix.parse::<GstType>().ok())
            .map(FilterKey::Gst)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown filter `{s}`")))
    }
}

impl TryFrom<String> for FilterKey {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterKey> for String {
    fn from(value: FilterKey) -> Self {
        value.to_string()
    }
}

/// Ordering applied to the filtered client list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortKey {
    /// Ascending by name.
    #[default]
    Name,
    /// Descending by name.
    NameDesc,
    /// Ascending by the derived status string (`clear`, `overdue`, `pending`).
    Status,
    /// Most pending files first.
    Pending,
    /// Largest outstanding amount first.
    Outstanding,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Name,
        SortKey::NameDesc,
        SortKey::Status,
        SortKey::Pending,
        SortKey::Outstanding,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::NameDesc => "name-desc",
            SortKey::Status => "status",
            SortKey::Pending => "pending",
            SortKey::Outstanding => "outstanding",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::Status => "Status",
            SortKey::Pending => "Pending Files",
            SortKey::Outstanding => "Outstanding Amount",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown sort key `{s}`")))
    }
}

impl TryFrom<String> for SortKey {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keys_parse_and_render() {
        for key in FilterKey::ALL {
            assert_eq!(key.to_string().parse::<FilterKey>().unwrap(), key);
        }
        assert_eq!(
            "gst-composite".parse::<FilterKey>().unwrap(),
            FilterKey::Gst(GstType::Composite)
        );
        assert!("gst-".parse::<FilterKey>().is_err());
        assert!("regular".parse::<FilterKey>().is_err());
    }

    #[test]
    fn sort_keys_parse() {
        assert_eq!("name-desc".parse::<SortKey>().unwrap(), SortKey::NameDesc);
        assert!("severity".parse::<SortKey>().is_err());
    }

    #[test]
    fn labels_match_picker_options() {
        assert_eq!(FilterKey::Gst(GstType::Iff).label(), "IFF GST");
        assert_eq!(SortKey::Outstanding.label(), "Outstanding Amount");
    }

    #[test]
    fn deserializes_from_wire_strings() {
        let key: FilterKey = serde_json::from_str(r#""gst-regular""#).unwrap();
        assert_eq!(key, FilterKey::Gst(GstType::Regular));
        let sort: SortKey = serde_json::from_str(r#""outstanding""#).unwrap();
        assert_eq!(sort, SortKey::Outstanding);
    }
}
