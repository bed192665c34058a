use std::fs;

use super::die;

pub fn table_export() {
    print!("{}", numeral_core::config::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(numeral_core::config::parse_table_toml(&content), "Error: {}");
    println!(
        "OK: {} symbols, {} orders, max value {}",
        table.len(),
        table.orders(),
        table.max_value()
    );
}

pub fn settings_export() {
    print!("{}", numeral_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        numeral_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: table={}, parse.ignore_case={}",
        s.table(),
        s.parse.ignore_case
    );
}

/// Install `--settings FILE` before any conversion reads the settings.
pub fn install_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        numeral_core::settings::init_custom(content),
        "Error in settings {file}: {}"
    );
}
