use serde::{Deserialize, Serialize};

use crate::domain::a003_catalog_entry::CatalogEntry;
use crate::usecases::common::UseCaseError;

/// Коды восстановленных проблем загрузки.
/// Ни одна из них не прерывает генерацию страницы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    /// Фид недоступен, не является JSON или не содержит товаров
    EmptyFeed,
    /// Файл таблицы не найден
    MissingSheet,
    /// В таблице нет колонки с названием товара
    NoNameColumn,
    /// Таблица существует, но не читается
    SheetReadError,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::EmptyFeed => "EMPTY_FEED",
            IssueCode::MissingSheet => "MISSING_SHEET",
            IssueCode::NoNameColumn => "NO_NAME_COLUMN",
            IssueCode::SheetReadError => "SHEET_READ_ERROR",
        }
    }
}

/// Результат загрузки каталога
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadReport {
    /// Сопоставленные позиции в порядке фида
    pub entries: Vec<CatalogEntry>,

    /// Сколько товаров пришло в фиде
    #[serde(rename = "feedProducts")]
    pub feed_products: usize,

    /// Сколько строк с непустым названием прочитано из таблицы
    #[serde(rename = "sheetRows")]
    pub sheet_rows: usize,

    /// Товары фида, которых нет в таблице
    #[serde(rename = "unmatchedFeed", default)]
    pub unmatched_feed: Vec<String>,

    /// Строки таблицы, для которых нет товара в фиде
    #[serde(rename = "unmatchedSheet", default)]
    pub unmatched_sheet: Vec<String>,

    /// Нормализованные названия, встретившиеся в таблице повторно
    #[serde(rename = "duplicateKeys", default)]
    pub duplicate_keys: Vec<String>,

    /// Восстановленные проблемы (фид, таблица, колонки)
    #[serde(default)]
    pub issues: Vec<UseCaseError>,
}

impl LoadReport {
    pub fn has_issue(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code.as_str())
    }
}
