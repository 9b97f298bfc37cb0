use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI defined in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    Command::new("nb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting document trees to notebooks")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("to").long("to").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("language").long("language").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("language-version")
                        .long("language-version")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(Command::new("inspect").arg(
            Arg::new("input")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        ))
        .subcommand(Command::new("backends"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "nb", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "nb", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "nb", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
