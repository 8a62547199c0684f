use crate::application::config::{MonitorConfig, OutputMode};
use crate::application::services::sampler::{LoopState, SamplerService, StopReason, TickReport};
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::{json_fmt, table_fmt};

/// Drive the sampling loop at the configured cadence.
///
/// One tick runs to completion (sample → score → report → log) before the
/// next is scheduled; the only suspension point is the inter-tick sleep.
/// The next deadline is always `start + interval × tick_count`, so a slow
/// tick shortens the following sleep instead of shifting every later tick.
///
/// SIGINT (Ctrl+C) is raced against the sleep via [`tokio::select!`]: an
/// interrupt delivered mid-sleep stops the loop promptly with
/// [`StopReason::Interrupted`] instead of waiting out the residual sleep.
/// A tick that has already started always completes. Note: SIGTERM is
/// **not** handled.
///
/// # Errors
///
/// Never fails after startup — per-tick failures are logged diagnostics and
/// the loop continues. The `Result` only carries startup plumbing from the
/// runtime.
pub async fn run_monitor(
    service: &SamplerService<'_>,
    config: &MonitorConfig,
    thresholds: &ThresholdSet,
) -> anyhow::Result<StopReason> {
    tracing::info!("Moniteur démarré (intervalle : {}s)", config.interval_secs);
    service.prime();

    let interval = config.interval();
    let start = tokio::time::Instant::now();
    let mut deadline = start;
    let mut state = LoopState::new();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        deadline += interval;

        let report = service.run_once(&mut state);
        render(&report, config, thresholds);
        service.persist(&report, &mut state);

        if let Some(reason) = service.stop_reason(&state, start.elapsed()) {
            tracing::info!("Arrêt du moniteur : {reason}");
            return Ok(reason);
        }

        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Signal d'arrêt reçu, fermeture propre...");
                return Ok(StopReason::Interrupted);
            }
            () = tokio::time::sleep_until(deadline) => {}
        }
    }
}

fn render(report: &TickReport, config: &MonitorConfig, thresholds: &ThresholdSet) {
    match config.output {
        OutputMode::Json => match json_fmt::render_record(report) {
            Ok(record) => println!("{record}"),
            Err(e) => tracing::warn!("Sérialisation JSON échouée : {e}"),
        },
        OutputMode::Table => {
            table_fmt::clear_screen();
            println!("{}", table_fmt::format_sample_table(report, thresholds));
        }
    }
}
