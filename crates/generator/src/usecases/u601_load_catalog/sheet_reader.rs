use calamine::{open_workbook_auto, Data, Reader};
use encoding_rs::WINDOWS_1252;
use contracts::domain::a002_sheet_row::{ColumnMapping, SheetRow};
use contracts::usecases::u601_load_catalog::{ColumnAliases, LoadRequest};
use std::collections::HashMap;
use std::path::Path;

use super::error::LoadError;
use crate::shared::text::JoinKey;

/// Сырые данные листа: заголовки + строки (все ячейки как текст)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Первая строка — заголовки, остальные — данные
    fn from_raw(mut raw: Vec<Vec<String>>) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        let headers = raw
            .remove(0)
            .into_iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        Self { headers, rows: raw }
    }
}

/// Индекс цен: нормализованное название → строка таблицы.
/// При повторе ключа побеждает последняя строка.
#[derive(Debug, Clone, Default)]
pub struct PriceIndex {
    rows: HashMap<JoinKey, SheetRow>,
    /// Ключи в порядке первого появления (для стабильных отчётов)
    order: Vec<JoinKey>,
    duplicates: Vec<String>,
    row_count: usize,
}

impl PriceIndex {
    pub fn from_rows(rows: impl IntoIterator<Item = SheetRow>) -> Self {
        let mut index = Self::default();

        for row in rows {
            let key = JoinKey::from_name(&row.name);
            if key.is_empty() {
                continue;
            }
            index.row_count += 1;

            if index.rows.contains_key(&key) {
                tracing::warn!("Duplicate spreadsheet row for '{}', last row wins", row.name);
                if !index.duplicates.iter().any(|d| d == key.as_str()) {
                    index.duplicates.push(key.as_str().to_string());
                }
            } else {
                index.order.push(key.clone());
            }
            index.rows.insert(key, row);
        }

        index
    }

    pub fn get(&self, key: &JoinKey) -> Option<&SheetRow> {
        self.rows.get(key)
    }

    /// Количество уникальных ключей
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Сколько строк с непустым названием было прочитано
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Строки в порядке первого появления ключа
    pub fn iter(&self) -> impl Iterator<Item = (&JoinKey, &SheetRow)> {
        self.order
            .iter()
            .filter_map(move |key| self.rows.get(key).map(|row| (key, row)))
    }
}

/// Прочитать таблицу цен согласно запросу и построить индекс
pub fn read_price_index(request: &LoadRequest) -> Result<PriceIndex, LoadError> {
    let table = read_table(&request.sheet_path, request.sheet_name.as_deref())?;
    let rows = extract_rows(&table, &request.aliases, &request.sheet_path)?;
    Ok(PriceIndex::from_rows(rows))
}

/// Прочитать лист целиком. Формат определяется по расширению файла.
pub fn read_table(path: &Path, sheet_name: Option<&str>) -> Result<SheetTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingSheet(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(path, sheet_name),
        other => Err(LoadError::sheet_read(
            path,
            format!("unsupported file extension '{}'", other),
        )),
    }
}

fn read_workbook(path: &Path, sheet_name: Option<&str>) -> Result<SheetTable, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| LoadError::sheet_read(path, e))?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| LoadError::sheet_read(path, "workbook has no sheets"))?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| LoadError::sheet_read(path, format!("sheet '{}': {}", sheet, e)))?;

    let raw: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>())
        .collect();

    tracing::debug!("Read sheet '{}' from {}", sheet, path.display());
    Ok(SheetTable::from_raw(raw))
}

/// Ячейка как текст. Целые числа выводятся без дробной части (15000, а не 15000.0).
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn read_csv(path: &Path) -> Result<SheetTable, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::sheet_read(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(sniff_delimiter(&bytes))
        .from_reader(&bytes[..]);

    let mut raw: Vec<Vec<String>> = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| LoadError::sheet_read(path, e))?;
        raw.push(record.iter().map(decode_field).collect());
    }

    Ok(SheetTable::from_raw(raw))
}

/// Поле CSV как текст: UTF-8, иначе Windows-1252 (так сохраняет Excel в испанской локали)
fn decode_field(field: &[u8]) -> String {
    match std::str::from_utf8(field) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(field);
            text.into_owned()
        }
    }
}

/// Excel в испанской и русской локалях сохраняет CSV через ';'
fn sniff_delimiter(content: &[u8]) -> u8 {
    let header = content.split(|b| *b == b'\n').next().unwrap_or_default();
    if header.contains(&b';') && !header.contains(&b',') {
        b';'
    } else {
        b','
    }
}

/// Найти колонку по псевдонимам: без учёта регистра, побеждает первый псевдоним по приоритету
pub fn resolve_column(headers: &[String], expected: &str, aliases: &[String]) -> ColumnMapping {
    let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

    for alias in aliases {
        let alias = alias.trim().to_lowercase();
        if let Some(idx) = lowered.iter().position(|h| *h == alias) {
            return ColumnMapping {
                expected: expected.to_string(),
                found: Some(headers[idx].clone()),
                file_index: Some(idx),
            };
        }
    }

    ColumnMapping {
        expected: expected.to_string(),
        found: None,
        file_index: None,
    }
}

/// Превратить строки листа в `SheetRow` по найденным колонкам
pub fn extract_rows(
    table: &SheetTable,
    aliases: &ColumnAliases,
    path: &Path,
) -> Result<Vec<SheetRow>, LoadError> {
    let name_col = resolve_column(&table.headers, "name", &aliases.name);
    let price_col = resolve_column(&table.headers, "price", &aliases.price);
    let sizes_col = resolve_column(&table.headers, "sizes", &aliases.sizes);

    for mapping in [&name_col, &price_col, &sizes_col] {
        match &mapping.found {
            Some(found) => tracing::info!("Column '{}' -> '{}'", mapping.expected, found),
            None => tracing::warn!(
                "Column '{}' not found in {} (headers: {:?})",
                mapping.expected,
                path.display(),
                table.headers
            ),
        }
    }

    let Some(name_idx) = name_col.file_index else {
        return Err(LoadError::NoNameColumn {
            expected: aliases.name.clone(),
            headers: table.headers.clone(),
        });
    };

    let cell = |row: &[String], idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| row.get(i)).map(|v| v.trim().to_string())
    };

    let rows = table
        .rows
        .iter()
        .filter_map(|row| {
            let row = row.as_slice();
            let name = cell(row, Some(name_idx)).unwrap_or_default();
            if name.is_empty() {
                return None;
            }
            let price = cell(row, price_col.file_index);
            let sizes = cell(row, sizes_col.file_index);
            Some(SheetRow::from_cells(&name, price.as_deref(), sizes.as_deref()))
        })
        .collect();

    Ok(rows)
}
