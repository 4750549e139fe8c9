use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Результат генерации страницы
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    /// Куда записан документ
    #[serde(rename = "outputPath")]
    pub output_path: PathBuf,

    /// Сколько карточек попало на страницу
    #[serde(rename = "entriesRendered")]
    pub entries_rendered: usize,

    /// Размер документа в байтах
    #[serde(rename = "bytesWritten")]
    pub bytes_written: usize,
}
