use contracts::usecases::u601_load_catalog::{ColumnAliases, LoadRequest};
use contracts::usecases::u602_render_page::{SocialLink, SocialPlatform, StoreProfile};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub feed: FeedConfig,
    pub sheet: SheetConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub name: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub social: SocialConfig,
}

/// Пустая строка означает, что ссылка не выводится
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SocialConfig {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub twitter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl FeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SheetConfig {
    pub path: String,
    #[serde(default)]
    pub sheet_name: Option<String>,
    #[serde(default)]
    pub name_aliases: Vec<String>,
    #[serde(default)]
    pub price_aliases: Vec<String>,
    #[serde(default)]
    pub sizes_aliases: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub path: String,
}

fn default_currency_symbol() -> String {
    "₡".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[store]
name = "Regate FutStore"
currency_symbol = "₡"
contact_number = ""

[store.social]
facebook = ""
instagram = ""
twitter = ""

[feed]
url = "https://www.maxsport.com.co/collections/zapatillas-max/products.json"
timeout_secs = 10

[sheet]
path = "productos.xlsx"

[output]
path = "catalogo.html"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Разобрать TOML и проверить значения, без которых страница бессмысленна
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;

    if config.store.name.trim().is_empty() {
        anyhow::bail!("[store] name must not be empty");
    }
    if config.output.path.trim().is_empty() {
        anyhow::bail!("[output] path must not be empty");
    }
    if config.feed.timeout_secs == 0 {
        anyhow::bail!("[feed] timeout_secs must be greater than zero");
    }

    Ok(config)
}

/// Resolve a configured path.
/// Absolute paths are used as is, relative ones are resolved against the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(path_str)
}

impl Config {
    pub fn store_profile(&self) -> StoreProfile {
        let social = &self.store.social;
        let social_links = [
            (SocialPlatform::Facebook, &social.facebook),
            (SocialPlatform::Instagram, &social.instagram),
            (SocialPlatform::Twitter, &social.twitter),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(platform, url)| SocialLink {
            platform,
            url: url.trim().to_string(),
        })
        .collect();

        StoreProfile {
            store_name: self.store.name.trim().to_string(),
            currency_symbol: self.store.currency_symbol.clone(),
            contact_number: self.store.contact_number.clone(),
            social_links,
        }
    }

    pub fn load_request(&self) -> LoadRequest {
        let defaults = ColumnAliases::default();

        LoadRequest {
            sheet_path: resolve_path(&self.sheet.path),
            sheet_name: self
                .sheet
                .sheet_name
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            aliases: ColumnAliases {
                name: aliases_or(&self.sheet.name_aliases, defaults.name),
                price: aliases_or(&self.sheet.price_aliases, defaults.price),
                sizes: aliases_or(&self.sheet.sizes_aliases, defaults.sizes),
            },
        }
    }

    pub fn output_path(&self) -> PathBuf {
        resolve_path(&self.output.path)
    }
}

/// Пустые псевдонимы отбрасываются; если не осталось ни одного, берутся значения по умолчанию
fn aliases_or(configured: &[String], defaults: Vec<String>) -> Vec<String> {
    let cleaned: Vec<String> = configured
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    if cleaned.is_empty() {
        defaults
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.store.name, "Regate FutStore");
        assert_eq!(config.store.currency_symbol, "₡");
        assert_eq!(config.feed.timeout_secs, 10);
        assert_eq!(config.sheet.path, "productos.xlsx");
        assert_eq!(config.output.path, "catalogo.html");
    }

    #[test]
    fn test_workspace_config_loads() {
        let config = parse_config(include_str!("../../../../config.toml")).unwrap();
        assert_eq!(config.store.contact_number, "50670107098");
        assert_eq!(config.store_profile().social_links.len(), 3);
    }

    #[test]
    fn test_empty_social_links_are_omitted() {
        let config = parse_config(
            r#"
            [store]
            name = "Tienda"
            [store.social]
            instagram = "https://instagram.test/tienda"
            [feed]
            url = "https://feed.test/products.json"
            [sheet]
            path = "precios.csv"
            [output]
            path = "out.html"
            "#,
        )
        .unwrap();

        let profile = config.store_profile();
        assert_eq!(profile.currency_symbol, "₡");
        assert_eq!(
            profile.social_links,
            vec![SocialLink {
                platform: SocialPlatform::Instagram,
                url: "https://instagram.test/tienda".to_string(),
            }]
        );
    }

    #[test]
    fn test_aliases_fall_back_to_defaults() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.sheet.price_aliases = vec!["  PVP ".to_string(), "".to_string()];
        config.sheet.sheet_name = Some("   ".to_string());

        let request = config.load_request();
        assert_eq!(request.aliases.name, ColumnAliases::default().name);
        assert_eq!(request.aliases.price, vec!["pvp".to_string()]);
        assert_eq!(request.sheet_name, None);
    }

    #[test]
    fn test_rejects_empty_store_name() {
        let broken = DEFAULT_CONFIG.replace("name = \"Regate FutStore\"", "name = \" \"");
        assert!(parse_config(&broken).is_err());
    }

    #[test]
    fn test_resolve_absolute_path_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("catalogo.html");
        assert_eq!(resolve_path(&absolute.display().to_string()), absolute);
    }
}
