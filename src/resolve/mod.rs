//! Identifying-column resolution

pub mod column;

pub use column::{
    resolve_column, ColumnChoice, ColumnKind, MOBILE_COLUMN, NAME_COLUMN_CANDIDATES,
};
