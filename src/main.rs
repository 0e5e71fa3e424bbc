use clap::Parser;
use log::{error, info, LevelFilter};

use gistmarks::{App, Cli, Config};

pub fn initialize_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    let app = App::new(config, cli.verbose);
    if let Err(e) = app.run(cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}
