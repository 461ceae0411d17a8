use clap::Parser;
use regkit::app::convert::ConvertApp;
use regkit::utils::{logger, validation::Validate};
use regkit::{AppEngine, CliConfig, JobConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting regkit");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Some(path) = cli.config.clone() {
        let job = JobConfig::from_file(&path)?;
        job.validate()?;
        tracing::info!("Running job '{}'", job.job.name);

        let mut engine = AppEngine::new(ConvertApp::new(job));
        engine.run()?;
    } else {
        let mut engine = AppEngine::new(ConvertApp::new(cli));
        engine.run()?;
    }

    println!("Conversion completed successfully");
    Ok(())
}
