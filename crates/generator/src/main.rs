use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_render_page::RenderPage;
use generator::shared::{config, logging};

fn main() -> anyhow::Result<()> {
    if let Err(e) = logging::initialize() {
        eprintln!("Logging to file is disabled: {e}");
    }

    let config = config::load_config()?;
    let response = generator::run(&config).map_err(|e| {
        tracing::error!("[{}] failed: {:#}", RenderPage::full_name(), e);
        e
    })?;

    println!(
        "Archivo generado: {} ({} productos)",
        response.output_path.display(),
        response.entries_rendered
    );
    Ok(())
}
