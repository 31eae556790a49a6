use std::fs;
use std::path::Path;

use ladder_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: search.max_routes={}, search.deadline_ms={}, search.workers={}, ingest.remote_url={}",
        s.search.max_routes, s.search.deadline_ms, s.search.workers, s.ingest.remote_url
    );
}

/// Install `file` as the process-wide settings. Must run before anything
/// reads `settings()`.
pub fn settings_load(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    die!(
        settings::init_custom(content),
        "Error in {}: {}",
        file.display()
    );
}
