//! Database tools.

pub mod dynamodb_table;
