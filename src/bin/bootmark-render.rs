use bootmark::{load_tree, render_document, MarkupError, RenderOptions};
use std::env;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut check_only = false;
    let mut config_path: Option<String> = None;
    let mut files: Vec<String> = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--check" => check_only = true,
            "--config" => match iter.next() {
                Some(path) => config_path = Some(path),
                None => {
                    eprintln!("--config requires a path");
                    process::exit(1);
                }
            },
            _ => files.push(arg),
        }
    }

    if files.is_empty() {
        eprintln!("Usage: bootmark-render [--config options.yaml] [--check] <file.yaml>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  bootmark-render page.yaml > page.html");
        eprintln!("  bootmark-render --check *.yaml");
        process::exit(1);
    }

    let options = match config_path {
        Some(path) => match RenderOptions::from_file(&path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("✗ {} has errors:", path);
                eprintln!("  {}", e);
                process::exit(1);
            }
        },
        None => RenderOptions::default(),
    };

    let mut exit_code = 0;
    for file_path in files {
        match process_file(&file_path, &options, check_only) {
            Ok(Some(html)) => print!("{}", html),
            Ok(None) => println!("✓ {} is valid", file_path),
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn process_file(
    path: &str,
    options: &RenderOptions,
    check_only: bool,
) -> Result<Option<String>, MarkupError> {
    let content = fs::read_to_string(path)?;
    if check_only {
        load_tree(&content)?;
        return Ok(None);
    }
    render_document(&content, options).map(Some)
}

fn print_error(error: &MarkupError) {
    match error {
        MarkupError::Yaml(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        MarkupError::DuplicateId { id } => {
            eprintln!("  Duplicate id '{}'", id);
            eprintln!("    Client ids must be unique within the document");
        }
        MarkupError::InvalidId { id } => {
            eprintln!("  Invalid id '{}'", id);
            eprintln!("    Ids must be non-empty and contain no whitespace, control characters or ':'");
        }
        MarkupError::EmptyDocument => {
            eprintln!("  Empty document: no components found");
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
