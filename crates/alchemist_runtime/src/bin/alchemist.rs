//! Alchemist CLI entry point.

use std::env;
use std::process::ExitCode;

use alchemist_runtime::Repl;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            other => {
                return Err(format!("unknown option: {other}").into());
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("alchemist {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut repl = Repl::new()?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mAlchemist\x1b[0m - Witcher inventory, formula, and bestiary interpreter

\x1b[1mUSAGE:\x1b[0m
    alchemist [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information

\x1b[1mCOMMANDS:\x1b[0m
    Geralt loots <qty> <item>, ...                      Acquire ingredients
    Geralt trades <qty> <monster> trophy, ... for ...   Swap trophies for ingredients
    Geralt brews <potion>                               Brew from a known formula
    Geralt learns <x> sign is effective against <m>     Record a sign counter
    Geralt learns <x> potion is effective against <m>   Record a potion counter
    Geralt learns <p> potion consists of <qty> <i>, ... Record a formula
    Geralt encounters a <monster>                       Fight, if prepared

\x1b[1mQUERIES:\x1b[0m
    Total ingredient [name]?        One quantity, or all ingredients
    Total potion [name]?            One quantity, or all potions
    Total trophy [monster]?         One quantity, or all trophies
    What is in <potion>?            Formula contents
    What is effective against <m>?  Known counters

    Exit (or Ctrl+D) leaves the interpreter."
    );
}
