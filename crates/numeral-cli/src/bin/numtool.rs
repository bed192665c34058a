use clap::{Parser, Subcommand};

use numeral_cli::commands::{config_ops, convert_ops};
use numeral_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "numtool", version, about = "Arabic / Roman numeral converter")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an Arabic number to a Roman numeral
    ToRoman {
        /// Non-negative integer
        value: u64,
        /// Numeral table TOML (default: settings table)
        #[arg(long)]
        table: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a Roman numeral to an Arabic number
    ToArabic {
        /// Roman numeral
        numeral: String,
        /// Numeral table TOML (default: settings table)
        #[arg(long)]
        table: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the default numeral table as TOML
    TableExport,
    /// Validate a custom numeral table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Some(file) = cli.settings.as_deref() {
        config_ops::install_settings(file);
    }

    match cli.command {
        Command::ToRoman { value, table, json } => {
            convert_ops::to_roman_cmd(value, table.as_deref(), json)
        }
        Command::ToArabic {
            numeral,
            table,
            json,
        } => convert_ops::to_arabic_cmd(&numeral, table.as_deref(), json),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
