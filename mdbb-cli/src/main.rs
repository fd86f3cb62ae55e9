// Command-line interface for the Markdown to BBCode converter
//
// The binary is a thin shell around mdbb-babel: it picks the input, loads configuration,
// hands the complete document to the converter and writes the complete result back.
//
// Usage:
//  md-to-bbcode < input.md                       - Convert stdin to stdout
//  md-to-bbcode -i input.md -o output.bbcode     - Convert a file into another file
//  md-to-bbcode -f input.md                      - Same as --input, takes precedence over it
//
// Configuration:
//
// Settings come from the embedded defaults, then ./mdbb.toml if it exists, then the file given
// with --config. --verbose raises the log level to debug; RUST_LOG overrides everything.

use clap::{Arg, ArgAction, Command, ValueHint};
use mdbb_babel::{CleanupRules, Converter};
use mdbb_cli::io::{InputSource, OutputTarget};
use mdbb_config::{LogLevel, Loader, MdbbConfig};
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("md-to-bbcode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown text to BBCode format")
        .long_about(
            "md-to-bbcode converts Markdown documents into BBCode for bulletin boards.\n\n\
            Reads from stdin unless --input or --file is given, and writes to stdout\n\
            unless --output is given.\n\n\
            Examples:\n  \
            md-to-bbcode < post.md                      # stdin to stdout\n  \
            md-to-bbcode -i post.md -o post.bbcode      # file to file\n  \
            md-to-bbcode -f post.md --config forum.toml # custom cleanup settings"
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("Input Markdown file (default: stdin)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .help("Input file path (alternative to --input)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Output BBCode file (default: stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdbb.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion stages to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_flag("verbose"),
    );
    init_logging(config.log.level);

    let input = InputSource::from_args(
        matches.get_one::<String>("file").map(|s| s.as_str()),
        matches.get_one::<String>("input").map(|s| s.as_str()),
    );
    let output = OutputTarget::from_arg(matches.get_one::<String>("output").map(|s| s.as_str()));

    handle_convert_command(&input, &output, &config);
}

/// Handle the conversion
fn handle_convert_command(input: &InputSource, output: &OutputTarget, config: &MdbbConfig) {
    let markdown = input.read().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    tracing::info!(%input, bytes = markdown.len(), "read markdown");

    let rules = CleanupRules::from(&config.convert.cleanup);
    let bbcode = Converter::new(rules).convert(&markdown);

    output.write(&bbcode).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    tracing::info!(%output, bytes = bbcode.len(), "wrote bbcode");

    if output.is_file() {
        eprintln!("Conversion completed successfully!");
    }
}

fn load_cli_config(explicit_path: Option<&str>, verbose: bool) -> MdbbConfig {
    let loader = Loader::new().with_optional_file("mdbb.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = if verbose {
        loader.set_override("log.level", "debug")
    } else {
        Ok(loader)
    };
    loader.and_then(Loader::build).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
