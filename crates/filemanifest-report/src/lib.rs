//! Inventory rendering for filemanifest.
//!
//! The table format is the diffable contract of the tool: a fixed
//! 8-column separator-joined layout whose header only appears once at
//! least one record exists.

mod table;

pub use table::{
    format_build_time, format_system_time, write_table, TableWriter, COLUMNS, DEFAULT_SEPARATOR,
};
