use serde::{Deserialize, Serialize};

use crate::domain::a001_remote_product::RemoteProduct;

/// Подставляется вместо пустой цены
pub const PRICE_SENTINEL: &str = "N/D";

/// Подставляется вместо пустого списка размеров
pub const SIZES_SENTINEL: &str = "Consultar";

/// Готовая к рендеру позиция каталога: изображения из фида + цена и размеры из таблицы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Название в исходном регистре фида
    pub name: String,
    pub price: String,
    pub sizes: String,
    pub images: Vec<String>,
}

impl CatalogEntry {
    /// Собрать позицию из товара фида и значений таблицы.
    /// Пустые значения заменяются на [`PRICE_SENTINEL`] / [`SIZES_SENTINEL`].
    pub fn from_parts(product: &RemoteProduct, price: Option<&str>, sizes: Option<&str>) -> Self {
        Self {
            name: product.name.clone(),
            price: or_sentinel(price, PRICE_SENTINEL),
            sizes: or_sentinel(sizes, SIZES_SENTINEL),
            images: product.images.clone(),
        }
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

fn or_sentinel(value: Option<&str>, sentinel: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => sentinel.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_for_blank_values() {
        let product = RemoteProduct::new("Bota X", vec![]);

        let entry = CatalogEntry::from_parts(&product, Some(""), None);
        assert_eq!(entry.price, "N/D");
        assert_eq!(entry.sizes, "Consultar");
        assert!(!entry.has_images());

        let entry = CatalogEntry::from_parts(&product, Some("15000"), Some("38-42"));
        assert_eq!(entry.price, "15000");
        assert_eq!(entry.sizes, "38-42");
    }
}
