use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use ladder_cli::commands::{config_ops, dict_ops, route_ops};
use ladder_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "wordladder", about = "Find one-edit word ladders through a dictionary")]
struct Cli {
    /// Word list, one word per line (falls back to the remote list)
    #[arg(long, global = true, env = "WORD_LIST")]
    words: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write JSON trace logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find a route from one word to another
    Route {
        origin: String,
        target: String,
        /// Print the route as a JSON array
        #[arg(long)]
        json: bool,
        /// Search budget in milliseconds
        #[arg(long)]
        deadline_ms: Option<u64>,
        /// Stop after collecting more than this many routes
        #[arg(long)]
        max_routes: Option<usize>,
        /// Worker threads (0 = one per CPU)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// List the one-edit neighbors of a word
    Siblings {
        word: String,
        /// Rank the neighbors against this target
        #[arg(long)]
        target: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check dictionary membership
    Exists {
        #[arg(required = true, value_name = "WORD")]
        queries: Vec<String>,
    },
    /// Print the prefix tree
    Tree,
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Error creating {}: {e}", dir.display());
            process::exit(1);
        }
    }
    let _guard = init_tracing(cli.log_dir.as_deref());

    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }

    let words = cli.words.as_deref();
    match cli.command {
        Command::Route {
            origin,
            target,
            json,
            deadline_ms,
            max_routes,
            workers,
        } => {
            let opts = route_ops::RouteOptions {
                json,
                deadline_ms,
                max_routes,
                workers,
            };
            let index = dict_ops::load_index(words);
            route_ops::route(&index, &origin, &target, &opts);
        }
        Command::Siblings { word, target, json } => {
            let index = dict_ops::load_index(words);
            dict_ops::siblings(&index, &word, target.as_deref(), json);
        }
        Command::Exists { queries } => {
            let index = dict_ops::load_index(words);
            dict_ops::exists(&index, &queries);
        }
        Command::Tree => dict_ops::tree(&dict_ops::load_index(words)),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
