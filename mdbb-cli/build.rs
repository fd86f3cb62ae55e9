use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md-to-bbcode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown text to BBCode format")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Input Markdown file (default: stdin)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Input file path (alternative to --input)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output BBCode file (default: stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a mdbb.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion stages to stderr")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md-to-bbcode", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md-to-bbcode", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md-to-bbcode", &outdir)?;

    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
