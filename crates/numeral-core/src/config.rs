//! Numeral tables loaded from TOML.

use serde::Deserialize;

use crate::error::NumeralError;
use crate::table::NumeralTable;

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

#[derive(Deserialize)]
struct TableConfig {
    table: TableSection,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TableSection {
    pub(crate) symbols: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Table(#[from] NumeralError),
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLE_TOML
}

/// Parse TOML text with a `[table] symbols = [...]` section.
pub fn parse_table_toml(toml_str: &str) -> Result<NumeralTable, ConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(config.table.to_table()?)
}

impl TableSection {
    pub(crate) fn to_table(&self) -> Result<NumeralTable, NumeralError> {
        NumeralTable::from_strs(self.symbols.as_slice())
    }
}
