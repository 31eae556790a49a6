fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    check_settings(include_str!("src/default_settings.toml"));
}

/// The embedded defaults must parse and carry both sections, or `settings()`
/// would fail at first use.
fn check_settings(content: &str) {
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => panic!("src/default_settings.toml contains invalid TOML: {e}"),
    };
    for section in ["search", "ingest"] {
        if value.get(section).and_then(toml::Value::as_table).is_none() {
            panic!("src/default_settings.toml is missing the [{section}] table");
        }
    }
}
