//! Typed catalogs of Windows NTSTATUS and Win32 error codes.
//!
//! The built-in catalogs are read-only and shared across threads. Owned
//! copies can be extended with [`Catalog::register`] or with a TOML
//! definition file (see [`definitions`]).

pub mod catalog;
pub mod code;
pub mod config;
pub mod definitions;
pub mod errors;
pub mod export;
pub mod logging;
pub mod status;

pub use catalog::{Catalog, Family, TableEntry, ntstatus, parse_value, win32};
pub use code::ErrorCode;
pub use config::{OutputFormat, Settings, SettingsError};
pub use definitions::{DefinitionError, DefinitionFile, parse_definitions};
pub use errors::CatalogError;
pub use export::{CatalogExport, generate_export, generate_export_schema};
pub use logging::{LogConfig, LoggingError, init_logging};
pub use status::{StatusFields, StatusSeverity};
