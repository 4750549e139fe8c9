use serde::{Deserialize, Serialize};

/// Неизменяемые настройки магазина, передаваемые в рендер
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    /// Название магазина в шапке и заголовке страницы
    #[serde(rename = "storeName")]
    pub store_name: String,

    /// Символ валюты перед ценой
    #[serde(rename = "currencySymbol")]
    pub currency_symbol: String,

    /// Номер для ссылки wa.me (как задан в настройках)
    #[serde(rename = "contactNumber")]
    pub contact_number: String,

    /// Ссылки на соцсети; пустые URL не выводятся
    #[serde(rename = "socialLinks", default)]
    pub social_links: Vec<SocialLink>,
}

impl StoreProfile {
    /// Номер, сокращённый до цифр (формат wa.me)
    pub fn contact_digits(&self) -> String {
        self.contact_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }

    /// Ссылки с непустым URL в фиксированном порядке платформ
    pub fn active_links(&self) -> Vec<&SocialLink> {
        let mut links: Vec<&SocialLink> = self
            .social_links
            .iter()
            .filter(|l| !l.url.trim().is_empty())
            .collect();
        links.sort_by_key(|l| l.platform);
        links
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
}

impl SocialPlatform {
    pub fn title(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Twitter => "Twitter",
        }
    }

    /// Класс иконки Font Awesome
    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "fab fa-facebook-f",
            SocialPlatform::Instagram => "fab fa-instagram",
            SocialPlatform::Twitter => "fab fa-twitter",
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "link-facebook",
            SocialPlatform::Instagram => "link-instagram",
            SocialPlatform::Twitter => "link-twitter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}
