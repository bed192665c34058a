use std::fs;

use serde::Serialize;

use numeral_core::config::parse_table_toml;
use numeral_core::settings::settings;
use numeral_core::{arabic_to_roman, roman_to_arabic_with, NumeralTable};

use super::die;

/// One conversion, as printed with `--json`.
#[derive(Debug, Serialize)]
struct ConversionReport<'a> {
    arabic: u64,
    roman: &'a str,
    table: String,
}

/// Resolve `--table FILE`, falling back to the settings table.
fn load_table(table_file: Option<&str>) -> NumeralTable {
    match table_file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(parse_table_toml(&content), "Error in table {path}: {}")
        }
        None => settings().table().clone(),
    }
}

fn print_report(report: &ConversionReport<'_>, json: bool, text: &str) {
    if json {
        let line = die!(serde_json::to_string(report), "Error serializing output: {}");
        println!("{line}");
    } else {
        println!("{text}");
    }
}

pub fn to_roman_cmd(value: u64, table_file: Option<&str>, json: bool) {
    let table = load_table(table_file);
    let roman = die!(arabic_to_roman(value, Some(&table)), "Error: {}");
    let report = ConversionReport {
        arabic: value,
        roman: &roman,
        table: table.to_string(),
    };
    print_report(&report, json, &roman);
}

pub fn to_arabic_cmd(numeral: &str, table_file: Option<&str>, json: bool) {
    let table = load_table(table_file);
    let options = settings().parse_options();
    let value = die!(
        roman_to_arabic_with(numeral, Some(&table), options),
        "Error: {}"
    );
    let report = ConversionReport {
        arabic: value,
        roman: numeral,
        table: table.to_string(),
    };
    print_report(&report, json, &value.to_string());
}
