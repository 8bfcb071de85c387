use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use notebook::persist::json_export;
use notebook::persist::text_format::NameMatching;
use notebook::session::{Session, SessionConfig};

fn main() {
    let mut args = std::env::args().skip(1);
    let mut config = SessionConfig::default();
    let mut log_path: Option<PathBuf> = None;
    let mut export_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => match args.next() {
                Some(p) => config.data_path = PathBuf::from(p),
                None => {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            },
            "--log-file" => {
                log_path = args.next().map(PathBuf::from);
                if log_path.is_none() {
                    eprintln!("Error: --log-file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--export-json" => {
                export_path = args.next().map(PathBuf::from);
                if export_path.is_none() {
                    eprintln!("Error: --export-json requires a path argument");
                    std::process::exit(1);
                }
            }
            "--strict" => config.load_options.strict = true,
            "--exact-names" => config.load_options.name_matching = NameMatching::Exact,
            "--help" | "-h" => {
                println!("Notebook - contacts and reminders");
                println!();
                println!("Usage: notebook [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>        Data file path (default: data.txt)");
                println!("  --strict                 Refuse data files with truncated records");
                println!("  --exact-names            Link reminders to contacts by exact name");
                println!("  --log-file <PATH>        Append the activity log to a file");
                println!("  --export-json <PATH>     Write the notebook as JSON and exit");
                println!("  -h, --help               Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    init_logging(log_path.as_deref());

    if let Some(json_path) = export_path {
        let session = match Session::start(config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading notebook: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = json_export::export_json(&session.store, &json_path) {
            eprintln!("Export failed: {}", e);
            std::process::exit(1);
        }
        println!("Exported to {}", json_path.display());
        return;
    }

    notebook::cli::run(config);
}

/// Without a log file only warnings reach stderr, so the prompt stays
/// readable. With one, activity is appended at info level.
fn init_logging(log_path: Option<&Path>) {
    let default_level = if log_path.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    if let Some(path) = log_path {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {}", path.display(), e),
        }
    }

    builder.init();
}
