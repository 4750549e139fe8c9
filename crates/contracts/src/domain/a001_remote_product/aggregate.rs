use serde::{Deserialize, Serialize};

/// Сколько изображений товара попадает в карусель
pub const MAX_IMAGES: usize = 3;

/// Товар из JSON-фида магазина
///
/// Фид является источником истины для названий и изображений.
/// Цены и размеры приходят из таблицы.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteProduct {
    /// Отображаемое название (уже обрезанное по краям)
    pub name: String,

    /// URL изображений в порядке фида, не более [`MAX_IMAGES`]
    #[serde(default)]
    pub images: Vec<String>,
}

impl RemoteProduct {
    /// Создать товар, ограничив список изображений первыми [`MAX_IMAGES`]
    pub fn new(name: impl Into<String>, images: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            images: images.into_iter().take(MAX_IMAGES).collect(),
        }
    }
}
