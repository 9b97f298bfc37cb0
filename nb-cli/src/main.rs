// Command-line interface for nb
//
// This binary converts serialized document trees into notebook files.
//
// The input is a JSON document tree as produced by any front-end parser; the
// heavy lifting lives in the nb-convert crate. This crate is only the shell:
// argument handling, configuration layering, and file IO.
//
// Usage:
//  nb <input> [--to <backend>] [--output <file>]          - Convert (default)
//  nb convert <input> [--to <backend>] [--output <file>]  - Same as above (explicit)
//  nb inspect <input>                                     - Echo the parsed tree as pretty JSON
//  nb backends                                            - List available backends

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use nb_config::{Loader, NbConfig};
use nb_convert::diagnostics::StderrSink;
use nb_convert::registry::BackendRegistry;
use nb_convert::tree::nodes::Document;
use nb_convert::ConvertOptions;
use std::fs;

fn build_cli() -> Command {
    Command::new("nb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting document trees to notebooks")
        .long_about(
            "nb converts serialized document trees into notebook files.\n\n\
            Commands:\n  \
            - convert:  Render a document tree through a notebook backend (default)\n  \
            - inspect:  Parse a tree file and echo it back as pretty JSON\n  \
            - backends: List the available output backends\n\n\
            Examples:\n  \
            nb doc.json                         # Convert to ipynb (stdout)\n  \
            nb doc.json -o out.ipynb            # Convert to a file\n  \
            nb doc.json --pretty                # Pretty-print the JSON output\n  \
            nb inspect doc.json                 # Validate and echo the tree",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an nb.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document tree to a notebook (default command)")
                .long_about(
                    "Convert a serialized document tree into a notebook.\n\n\
                    The input file holds a JSON document tree. The backend defaults\n\
                    to 'jupyter' (ipynb, nbformat 4).\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    nb convert doc.json                       # ipynb to stdout\n  \
                    nb convert doc.json -o out.ipynb          # ipynb to a file\n  \
                    nb convert doc.json --language cpp        # Override fallback language\n  \
                    nb doc.json                               # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path (JSON document tree)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target backend (defaults to 'jupyter')")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .help("Pretty-print the emitted JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .help("Fallback language name when the document declares none")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("language-version")
                        .long("language-version")
                        .help("Fallback language version when the document declares none")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse a document tree file and echo it back as pretty JSON")
                .arg(
                    Arg::new("input")
                        .help("Input file path (JSON document tree)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("backends").about("List available output backends"))
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "inspect"
                && args[1] != "backends"
                && args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_inspect_command(input);
        }
        Some(("backends", _)) => handle_backends_command(),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &NbConfig) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let backend = matches
        .get_one::<String>("to")
        .map(|s| s.as_str())
        .unwrap_or("jupyter");
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    let pretty = matches.get_flag("pretty") || config.output.pretty;

    let registry = registry_with_pretty(pretty);
    if let Err(e) = registry.get(backend) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let doc = read_document(input);

    let mut options: ConvertOptions = (&config.notebook).into();
    if let Some(language) = matches.get_one::<String>("language") {
        options.language_name = language.clone();
    }
    if let Some(version) = matches.get_one::<String>("language-version") {
        options.language_version = version.clone();
    }

    let result = registry
        .convert(&doc, backend, &options, &StderrSink)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            println!("{result}");
        }
    }
}

/// Handle the inspect command: a round-trip through the tree model, useful for
/// validating parser output.
fn handle_inspect_command(input: &str) {
    let doc = read_document(input);
    let json = serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// Handle the backends command
fn handle_backends_command() {
    let registry = BackendRegistry::default();
    println!("Available backends:\n");
    for name in registry.list_backends() {
        match registry.get(&name) {
            Ok(backend) => println!(
                "  {name:<10} {} (.{})",
                backend.description(),
                backend.file_extension()
            ),
            Err(_) => println!("  {name}"),
        }
    }
}

fn read_document(path: &str) -> Document {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error parsing document tree '{path}': {e}");
        std::process::exit(1);
    })
}

fn registry_with_pretty(pretty: bool) -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry.register(nb_convert::JupyterBackend { pretty });
    registry
}

fn load_cli_config(explicit_path: Option<&str>) -> NbConfig {
    let loader = Loader::new().with_optional_file("nb.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
