pub mod request;
pub mod response;

pub use request::{ColumnAliases, LoadRequest};
pub use response::{LoadReport, IssueCode};

use crate::usecases::common::UseCaseMetadata;

pub struct LoadCatalog;

impl UseCaseMetadata for LoadCatalog {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "load_catalog"
    }

    fn display_name() -> &'static str {
        "Загрузка каталога"
    }

    fn description() -> &'static str {
        "Загрузка фида товаров, чтение таблицы цен и сопоставление по нормализованному названию"
    }
}
