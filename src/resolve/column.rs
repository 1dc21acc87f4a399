use serde::{Deserialize, Serialize};

use crate::table::Table;

/// The mobile-number column as exported by the survey platform.
pub const MOBILE_COLUMN: &str = "رقم الجوال";

/// Name-column spelling variants seen across exports, in priority order.
pub const NAME_COLUMN_CANDIDATES: &[&str] = &[
    " اسم الطالبة الرباعي (مثال: سارة احمد محمد الزهراني)",
    "الاسم الثلاثي",
    "اسم الطالبة الرباعي",
    "الاسم",
];

/// Which identifying column a table resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnChoice {
    /// The exact mobile-number column is present.
    Mobile(String),
    /// No mobile column; a name-candidate matched.
    Name(String),
    /// Neither column is present.
    NotFound,
}

impl ColumnChoice {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnChoice::Mobile(_) => ColumnKind::Mobile,
            ColumnChoice::Name(_) => ColumnKind::Name,
            ColumnChoice::NotFound => ColumnKind::None,
        }
    }

    pub fn column_name(&self) -> Option<&str> {
        match self {
            ColumnChoice::Mobile(name) | ColumnChoice::Name(name) => Some(name),
            ColumnChoice::NotFound => None,
        }
    }
}

/// Resolver outcome kind, as reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Mobile,
    Name,
    None,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Mobile => write!(f, "mobile"),
            ColumnKind::Name => write!(f, "name"),
            ColumnKind::None => write!(f, "none"),
        }
    }
}

/// Pick the identifying column for a table.
///
/// The mobile column wins whenever it is present, even if every value in
/// it is missing; no value-level validation happens here.
/// Otherwise the first present name candidate is chosen, in list order.
/// Matching is exact, byte for byte.
pub fn resolve_column(table: &Table, mobile_column: &str, name_candidates: &[String]) -> ColumnChoice {
    if table.has_column(mobile_column) {
        return ColumnChoice::Mobile(mobile_column.to_string());
    }

    for candidate in name_candidates {
        if table.has_column(candidate) {
            return ColumnChoice::Name(candidate.clone());
        }
    }

    ColumnChoice::NotFound
}
