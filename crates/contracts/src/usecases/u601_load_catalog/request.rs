use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Запрос на загрузку каталога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Путь к таблице цен (xlsx/xls/ods/csv)
    #[serde(rename = "sheetPath")]
    pub sheet_path: PathBuf,

    /// Имя листа; если не задано — первый лист книги
    #[serde(rename = "sheetName", default)]
    pub sheet_name: Option<String>,

    /// Псевдонимы заголовков колонок
    #[serde(default)]
    pub aliases: ColumnAliases,
}

impl LoadRequest {
    pub fn new(sheet_path: impl Into<PathBuf>) -> Self {
        Self {
            sheet_path: sheet_path.into(),
            sheet_name: None,
            aliases: ColumnAliases::default(),
        }
    }
}

/// Псевдонимы заголовков в порядке приоритета (сравнение без учёта регистра,
/// побеждает первый найденный)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAliases {
    pub name: Vec<String>,
    pub price: Vec<String>,
    pub sizes: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            name: to_strings(&[
                "nombre",
                "nombre_producto",
                "name",
                "producto",
                "producto_nombre",
                "product_name",
                "name_product",
            ]),
            price: to_strings(&["precio", "price", "cost"]),
            sizes: to_strings(&["tallas", "talla", "sizes"]),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
