//! Модель корзины страницы.
//!
//! Встроенный скрипт (`assets::CART_SCRIPT`) повторяет эти же правила на стороне браузера:
//! `reduceCart`, `parsePrice`, `cartTotal`, `orderSummary`, `orderLink`.

use contracts::domain::a003_catalog_entry::CatalogEntry;
use std::fmt::Write as _;

const WA_ME: &str = "https://wa.me/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub name: String,
    pub price: String,
    pub sizes: String,
}

impl From<&CatalogEntry> for CartItem {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            price: entry.price.clone(),
            sizes: entry.sizes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(CartItem),
    /// Удалить по позиции; индекс вне диапазона игнорируется
    Remove(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn reduce(&self, action: CartAction) -> Cart {
        let mut items = self.items.clone();
        match action {
            CartAction::Add(item) => items.push(item),
            CartAction::Remove(index) => {
                if index < items.len() {
                    items.remove(index);
                }
            }
        }
        Cart { items }
    }

    /// Число на значке корзины
    pub fn badge(&self) -> usize {
        self.items.len()
    }

    /// Приблизительная сумма: цены, которые не удалось разобрать, пропускаются
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .filter_map(|item| parse_price(&item.price))
            .sum()
    }

    pub fn order_summary(&self, store_name: &str, currency: &str) -> String {
        let mut summary = format!("Pedido desde {}\n\n", store_name);
        for (i, item) in self.items.iter().enumerate() {
            let _ = writeln!(
                summary,
                "{}. {} - {}{} - Tallas: {}",
                i + 1,
                item.name,
                currency,
                item.price,
                item.sizes
            );
        }

        let total = self.total();
        if total > 0.0 {
            let _ = write!(summary, "\nTotal aproximado: {}{}", currency, total);
        }
        summary
    }

    /// Ссылка `wa.me` с текстом заказа. `None` для пустой корзины или номера без цифр.
    pub fn order_link(&self, contact_digits: &str, store_name: &str, currency: &str) -> Option<String> {
        if self.is_empty() || contact_digits.is_empty() {
            return None;
        }
        let summary = self.order_summary(store_name, currency);
        Some(format!(
            "{}{}?text={}",
            WA_ME,
            contact_digits,
            urlencoding::encode(&summary)
        ))
    }
}

/// Цена из произвольной строки: оставить `[0-9.-]`, затем взять самый длинный
/// префикс вида `-?\d*(\.\d*)?` хотя бы с одной цифрой.
///
/// `"₡15.000"` → `15.0`, `"1.2.3"` → `1.2`, `"N/D"` → `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let bytes = stripped.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }
    stripped[..end].parse().ok()
}
