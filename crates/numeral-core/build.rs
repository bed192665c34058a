/// Embedded defaults that must parse as TOML before the crate is built.
const EMBEDDED: &[(&str, &str)] = &[
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    ),
    ("src/default_table.toml", include_str!("src/default_table.toml")),
];

fn main() {
    for &(path, content) in EMBEDDED {
        println!("cargo:rerun-if-changed={path}");
        if let Err(e) = content.parse::<toml::Value>() {
            panic!("{path} is not valid TOML: {e}");
        }
    }
}
