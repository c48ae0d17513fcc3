use std::{fs::File, sync::OnceLock};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LogSettings;

static TRACER: OnceLock<()> = OnceLock::new();
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the file logger once per process. Later calls are no-ops.
pub fn setup_logger(settings: &LogSettings) -> Result<(), Box<dyn std::error::Error>> {
    let Some(dir) = settings.directory.as_deref() else {
        return Ok(());
    };
    if TRACER.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&settings.level)?;
    let file = File::create(format!("{}/kubeview.log", dir))?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_line_number(true)
        .with_writer(non_blocking_writer)
        .with_filter(filter);

    LOG_GUARD.set(guard).ok();
    TRACER.get_or_init(|| {
        tracing_subscriber::registry().with(file_layer).try_init().ok();
    });

    Ok(())
}
