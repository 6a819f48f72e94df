//! Command-line interface for modl
//!
//! Usage:
//!   modl parse `<path>` [--format `<format>`]  - Parse a MODL file and print the document
//!   modl tokens `<path>`                       - Print the token stream
//!   modl formats                               - List the available output formats
//!
//! `<path>` may be `-` to read standard input. Configuration is the built-in defaults, then
//! `modl.toml` in the working directory when present, then `--config <file>`, then flags such as
//! `--format` and `--max-depth`. `--verbose` turns on debug logging (`RUST_LOG` also works).

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;
use config::{ConfigError, ValueKind};
use modl::modl::config::{Loader, ModlConfig};
use modl::modl::error::{format_source_context, line_column, Error};
use modl::modl::formats::{FormatRegistry, TreevizFormatter};
use modl::modl::lexing::tokenize;
use modl::modl::parsing::ParserLimits;
use std::io::Read;

fn main() {
    let matches = Command::new("modl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting MODL files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the default configuration"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .global(true)
                .value_parser(clap::value_parser!(i64).range(1..))
                .help("Maximum map/array nesting accepted by the parser"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a MODL file and print the document tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the MODL file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g. 'treeviz', 'json', 'yaml')"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the tokens of a MODL file, one per line")
                .arg(
                    Arg::new("path")
                        .help("Path to the MODL file, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));
    let loader = load_config(&matches);

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let loader = match parse_matches.get_one::<String>("format") {
                Some(format) => apply(loader, "inspect.format", format.as_str()),
                None => loader,
            };
            handle_parse_command(required(parse_matches, "path"), &build(loader));
        }
        Some(("tokens", tokens_matches)) => {
            handle_tokens_command(required(tokens_matches, "path"));
        }
        Some(("formats", _)) => handle_formats_command(&build(loader)),
        _ => unreachable!(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| {
            eprintln!("Missing argument: {}", name);
            std::process::exit(2);
        })
}

const LOCAL_CONFIG: &str = "modl.toml";

/// Layers from files and global flags; subcommand flags are applied before building
fn load_config(matches: &ArgMatches) -> Loader {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        debug!("layering config file {}", path);
        loader = loader.with_file(path);
    }
    match matches.get_one::<i64>("max-depth") {
        Some(depth) => apply(loader, "limits.max_nesting_depth", *depth),
        None => loader,
    }
}

fn apply<I: Into<ValueKind>>(loader: Loader, key: &str, value: I) -> Loader {
    loader.set_override(key, value).unwrap_or_else(|e| config_error(e))
}

fn config_error(e: ConfigError) -> ! {
    eprintln!("Configuration error: {}", e);
    std::process::exit(1);
}

fn build(loader: Loader) -> ModlConfig {
    loader.build().unwrap_or_else(|e| config_error(e))
}

fn registry_for(config: &ModlConfig) -> FormatRegistry {
    FormatRegistry::with_treeviz(TreevizFormatter::from(&config.treeviz))
}

fn read_source(path: &str) -> String {
    let result = if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map(|_| source)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}

fn report_and_exit(source: &str, err: Error) -> ! {
    eprintln!("{}", err);
    if let Some(span) = err.span() {
        let (line, column) = line_column(source, span.start);
        eprintln!("  at line {}, column {}\n", line + 1, column + 1);
        eprint!("{}", format_source_context(source, &span));
    }
    std::process::exit(1);
}

fn handle_parse_command(path: &str, config: &ModlConfig) {
    let source = read_source(path);
    let limits = ParserLimits::from(&config.limits);
    let document = modl::parse_document_with_limits(&source, limits)
        .unwrap_or_else(|e| report_and_exit(&source, e));

    let output = registry_for(config)
        .render(&document, &config.inspect.format)
        .unwrap_or_else(|e| {
            eprintln!("Format error: {}", e);
            std::process::exit(1);
        });
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    let tokens = tokenize(&source).unwrap_or_else(|e| report_and_exit(&source, e.into()));
    for token in tokens {
        println!("{}", token);
    }
}

fn handle_formats_command(config: &ModlConfig) {
    println!("Available formats:\n");
    for (name, description) in registry_for(config).formats() {
        let marker = if name == config.inspect.format { " (default)" } else { "" };
        println!("  {}{}", name, marker);
        println!("    {}", description);
    }
}
