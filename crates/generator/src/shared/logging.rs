use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";

/// Инициализация системы трассировки (tracing)
///
/// Логи пишутся в:
/// - stdout (с цветами)
/// - logs/generator.log рядом с исполняемым файлом (без цветов)
///
/// Если файл лога открыть не удалось, подписчик всё равно ставится (только stdout),
/// а ошибка возвращается вызывающему.
pub fn initialize() -> anyhow::Result<()> {
    let log_dir = match std::env::current_exe() {
        Ok(exe_path) => match exe_path.parent() {
            Some(exe_dir) => exe_dir.join("logs"),
            None => std::path::Path::new("target").join("logs"),
        },
        Err(_) => std::path::Path::new("target").join("logs"),
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into());

    let log_file = std::fs::create_dir_all(&log_dir).and_then(|_| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("generator.log"))
    });

    match log_file {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::EnvFilter::new(log_level))
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::sync::Arc::new(file))
                        .with_ansi(false),
                )
                .try_init()?;
            tracing::debug!("Log file: {}", log_dir.join("generator.log").display());
            Ok(())
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::EnvFilter::new(log_level))
                .with(tracing_subscriber::fmt::layer())
                .try_init()?;
            Err(anyhow::anyhow!(
                "Cannot open log file in {}: {}",
                log_dir.display(),
                e
            ))
        }
    }
}
