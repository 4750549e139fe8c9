use serde::{Deserialize, Serialize};

/// Строка таблицы цен
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub name: String,

    /// Цена как текст; `None`, если колонка не найдена или ячейка пустая
    pub price: Option<String>,

    /// Доступные размеры как текст
    pub sizes: Option<String>,
}

impl SheetRow {
    /// Собрать строку из сырых ячеек: пустые значения превращаются в `None`
    pub fn from_cells(name: &str, price: Option<&str>, sizes: Option<&str>) -> Self {
        Self {
            name: name.trim().to_string(),
            price: non_blank(price),
            sizes: non_blank(sizes),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Статус сопоставления логической колонки с заголовком файла
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Логическое имя колонки ("name", "price", "sizes")
    pub expected: String,
    /// Найденный заголовок в файле (если найден)
    pub found: Option<String>,
    /// Индекс колонки в файле
    pub file_index: Option<usize>,
}

impl ColumnMapping {
    pub fn is_resolved(&self) -> bool {
        self.file_index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_blank_values_become_none() {
        let row = SheetRow::from_cells(" Bota X ", Some("   "), None);
        assert_eq!(row.name, "Bota X");
        assert_eq!(row.price, None);
        assert_eq!(row.sizes, None);

        let row = SheetRow::from_cells("Bota X", Some(" 15000 "), Some("38-42"));
        assert_eq!(row.price.as_deref(), Some("15000"));
        assert_eq!(row.sizes.as_deref(), Some("38-42"));
    }
}
