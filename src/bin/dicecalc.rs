use log::{error, info};
use std::env;
use std::io;
use tenebrous_dicecalc::config::*;
use tenebrous_dicecalc::error::CalcError;
use tenebrous_dicecalc::repl::{self, ReplSettings};
use tenebrous_dicecalc::Calculator;
use tracing_subscriber::filter::EnvFilter;

/// Config from the path given as the first argument, then the default
/// config file if it exists, then built-in defaults.
fn load_config() -> Result<Config, CalcError> {
    if let Some(config_path) = env::args().nth(1) {
        info!("Reading config from {}", config_path);
        return Ok(read_config(config_path)?);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            info!("Reading config from {}", path.display());
            Ok(read_config(path)?)
        }
        _ => Ok(Config::default()),
    }
}

fn run() -> Result<(), CalcError> {
    let cfg = load_config()?;
    let mut calculator = Calculator::from_config(&cfg)?;
    let settings = ReplSettings::from(&cfg);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(stdin.lock(), stdout.lock(), &mut calculator, &settings)
}

fn main() {
    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("tenebrous_dicecalc=info,dicecalc=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}
