use clap::Parser;
use clap::error::ErrorKind;
use idfcheck::GateError;

#[derive(Parser)]
#[command(name = "idfcheck")]
#[command(version)]
#[command(
    about = "Gate an ESP32 build on the installed ESP-IDF toolchain version",
    long_about = None
)]
struct Cli {
    /// ESP-IDF version the build requires (e.g. "4.4.2")
    expected: String,
    /// ESP-IDF version actually installed
    given: String,
    /// Extra arguments some build recipes pass; accepted and ignored
    #[arg(trailing_var_arg = true, hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("{}", GateError::NotEnoughParameters);
            std::process::exit(1);
        }
    };

    let outcome = idfcheck::check(&cli.expected, &cli.given);
    std::process::exit(outcome.exit_code);
}
