use anyhow::Context;
use contracts::domain::a003_catalog_entry::CatalogEntry;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_render_page::{RenderPage, RenderResponse, StoreProfile};
use std::path::PathBuf;

use super::page::render_page;

/// Executor для UseCase генерации страницы
pub struct RenderExecutor {
    output_path: PathBuf,
}

impl RenderExecutor {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Отрендерить документ и записать его одним вызовом, перезаписывая прежний файл
    pub fn execute(
        &self,
        profile: &StoreProfile,
        entries: &[CatalogEntry],
    ) -> anyhow::Result<RenderResponse> {
        tracing::info!(
            "[{}] rendering {} entries to {}",
            RenderPage::full_name(),
            entries.len(),
            self.output_path.display()
        );

        let html = render_page(profile, entries);

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
        }

        std::fs::write(&self.output_path, &html)
            .with_context(|| format!("Failed to write {}", self.output_path.display()))?;

        tracing::info!(
            "[{}] wrote {} bytes to {}",
            RenderPage::full_name(),
            html.len(),
            self.output_path.display()
        );

        Ok(RenderResponse {
            output_path: self.output_path.clone(),
            entries_rendered: entries.len(),
            bytes_written: html.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> StoreProfile {
        StoreProfile {
            store_name: "Tienda".to_string(),
            currency_symbol: "$".to_string(),
            contact_number: "123".to_string(),
            social_links: vec![],
        }
    }

    #[test]
    fn test_execute_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalogo.html");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "old content").unwrap();

        let response = RenderExecutor::new(path.clone())
            .execute(&profile(), &[])
            .unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert_eq!(response.entries_rendered, 0);
        assert_eq!(response.bytes_written, html.len());
        assert!(!html.contains("old content"));
    }

    #[test]
    fn test_execute_fails_when_output_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = RenderExecutor::new(dir.path().to_path_buf())
            .execute(&profile(), &[])
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to write"));
    }
}
