use contracts::usecases::common::UseCaseError;
use contracts::usecases::u601_load_catalog::IssueCode;
use std::path::PathBuf;
use thiserror::Error;

/// Ошибки загрузки каталога.
///
/// Каждая ошибка восстанавливается на месте: фид превращается в пустой список,
/// таблица в пустой индекс цен, а сама ошибка попадает в отчёт как issue.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Feed request failed: {0}")]
    FeedTransport(String),

    #[error("Feed is not valid JSON: {0}")]
    FeedDecode(String),

    #[error("Feed contains no products")]
    FeedEmpty,

    #[error("Spreadsheet not found: {}", .0.display())]
    MissingSheet(PathBuf),

    #[error("No name column found (expected one of {expected:?}, headers: {headers:?})")]
    NoNameColumn {
        expected: Vec<String>,
        headers: Vec<String>,
    },

    #[error("Cannot read spreadsheet {}: {reason}", path.display())]
    SheetRead { path: PathBuf, reason: String },
}

impl LoadError {
    pub fn code(&self) -> IssueCode {
        match self {
            LoadError::FeedTransport(_) | LoadError::FeedDecode(_) | LoadError::FeedEmpty => {
                IssueCode::EmptyFeed
            }
            LoadError::MissingSheet(_) => IssueCode::MissingSheet,
            LoadError::NoNameColumn { .. } => IssueCode::NoNameColumn,
            LoadError::SheetRead { .. } => IssueCode::SheetReadError,
        }
    }

    pub(crate) fn sheet_read(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        LoadError::SheetRead {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

impl From<LoadError> for UseCaseError {
    fn from(err: LoadError) -> Self {
        let message = match err.code() {
            IssueCode::EmptyFeed => "Product feed unavailable, continuing with no products",
            IssueCode::MissingSheet => "Spreadsheet missing, continuing with no prices",
            IssueCode::NoNameColumn => "Spreadsheet has no product name column",
            IssueCode::SheetReadError => "Spreadsheet unreadable, continuing with no prices",
        };
        UseCaseError::new(err.code().as_str(), message).with_details(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(LoadError::FeedTransport("timeout".into()).code(), IssueCode::EmptyFeed);
        assert_eq!(LoadError::FeedDecode("eof".into()).code(), IssueCode::EmptyFeed);
        assert_eq!(LoadError::FeedEmpty.code(), IssueCode::EmptyFeed);
        assert_eq!(
            LoadError::MissingSheet(PathBuf::from("productos.xlsx")).code(),
            IssueCode::MissingSheet
        );
        assert_eq!(
            LoadError::NoNameColumn {
                expected: vec![],
                headers: vec![]
            }
            .code(),
            IssueCode::NoNameColumn
        );
    }

    #[test]
    fn test_into_usecase_error_keeps_details() {
        let err: UseCaseError = LoadError::MissingSheet(PathBuf::from("productos.xlsx")).into();
        assert_eq!(err.code, "MISSING_SHEET");
        assert_eq!(
            err.details.as_deref(),
            Some("Spreadsheet not found: productos.xlsx")
        );
    }
}
