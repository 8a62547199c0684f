use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use pulse::application::config::MonitorConfig;
use pulse::application::services::sampler::{SamplerService, StopReason};
use pulse::domain::ports::sink::SampleSink;
use pulse::domain::value_objects::thresholds::ThresholdSet;
use pulse::infrastructure::collectors::sysinfo_collector::SysinfoCollector;
use pulse::infrastructure::persistence::csv_sink::CsvSink;
use pulse::presentation::cli::app::Cli;
use pulse::presentation::cli::commands::monitor::run_monitor;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  PULSE — Host Health Sampler".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Configuration errors are fatal here, before the loop begins
    let config = MonitorConfig::try_from(&cli)?;

    print_banner();
    if config.log {
        println!("{} {}", "Logging enabled:".bold().green(), config.logfile);
    }

    // Manual DI — main.rs is the only place that knows concrete types
    let collector = SysinfoCollector::new();
    let sink = config.log.then(|| CsvSink::new(&config.logfile));
    let service = SamplerService::new(
        &collector,
        sink.as_ref().map(|s| s as &dyn SampleSink),
        &config,
    );
    let thresholds = ThresholdSet::default();

    let reason = run_monitor(&service, &config, &thresholds).await?;

    match reason {
        StopReason::IterationLimit => {
            println!(
                "{}",
                "Limite d'itérations atteinte. Arrêt du moniteur.".bold().yellow()
            );
        }
        StopReason::RuntimeLimit => {
            println!(
                "{}",
                "Durée maximale atteinte. Arrêt du moniteur.".bold().yellow()
            );
        }
        StopReason::Interrupted => {
            println!("\n{}", "Moniteur arrêté par l'utilisateur".bold().red());
        }
    }

    Ok(())
}
