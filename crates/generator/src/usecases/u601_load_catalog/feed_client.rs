use contracts::domain::a001_remote_product::RemoteProduct;
use serde_json::Value;
use std::time::Duration;

use super::error::LoadError;

/// Источник тела JSON-фида
pub trait FeedSource {
    /// Описание источника для логов (обычно URL)
    fn describe(&self) -> String;

    /// Получить тело ответа целиком
    fn fetch(&self) -> Result<String, LoadError>;
}

/// HTTP-клиент фида товаров (Shopify-совместимый `products.json`)
pub struct HttpFeedClient {
    url: String,
    timeout: Duration,
}

impl HttpFeedClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    fn client(&self) -> Result<reqwest::blocking::Client, LoadError> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("catalog-generator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LoadError::FeedTransport(format!("cannot build HTTP client: {}", e)))
    }
}

impl FeedSource for HttpFeedClient {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        tracing::info!("GET {}", self.url);

        let response = self
            .client()?
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| LoadError::FeedTransport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::error!("Feed request failed: {} {}", status, preview(&body));
            return Err(LoadError::FeedTransport(format!(
                "status {}: {}",
                status,
                preview(&body)
            )));
        }

        let body = response
            .text()
            .map_err(|e| LoadError::FeedTransport(e.to_string()))?;
        tracing::debug!("Feed response preview: {}", preview(&body));
        Ok(body)
    }
}

/// Первые 500 символов тела для логов
fn preview(body: &str) -> String {
    let preview: String = body.chars().take(500).collect();
    if preview.len() < body.len() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Разобрать тело фида в список товаров.
///
/// Невалидный JSON — ошибка. Отсутствующие или неверного типа поля считаются пустыми:
/// товар без `title` отбрасывается, изображение без строкового `src` пропускается.
pub fn parse_feed(body: &str) -> Result<Vec<RemoteProduct>, LoadError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| LoadError::FeedDecode(e.to_string()))?;

    let products = value
        .get("products")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    Ok(products.iter().filter_map(parse_product).collect())
}

fn parse_product(product: &Value) -> Option<RemoteProduct> {
    let title = product
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();

    if title.is_empty() {
        tracing::debug!("Skipping feed product without title: {}", product);
        return None;
    }

    let images = product
        .get("images")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .filter_map(|image| image.get("src").and_then(Value::as_str))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string);

    Some(RemoteProduct::new(title, images))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_caps_images() {
        let body = r#"{"products":[{"title":"  Bota X ","images":[
            {"src":"https://cdn.test/1.jpg"},{"src":"https://cdn.test/2.jpg"},
            {"src":"https://cdn.test/3.jpg"},{"src":"https://cdn.test/4.jpg"},
            {"src":"https://cdn.test/5.jpg"}]}]}"#;

        let products = parse_feed(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Bota X");
        assert_eq!(
            products[0].images,
            vec![
                "https://cdn.test/1.jpg",
                "https://cdn.test/2.jpg",
                "https://cdn.test/3.jpg"
            ]
        );
    }

    #[test]
    fn test_parse_feed_tolerates_malformed_fields() {
        let body = r#"{"products":[
            {"title":"Sin imagenes"},
            {"title":"Imagen rota","images":[{"alt":"x"},{"src":42},{"src":"https://cdn.test/ok.jpg"}]},
            {"title":17,"images":[]},
            {"images":[{"src":"https://cdn.test/orphan.jpg"}]},
            "not an object"
        ]}"#;

        let products = parse_feed(body).unwrap();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sin imagenes", "Imagen rota"]);
        assert!(products[0].images.is_empty());
        assert_eq!(products[1].images, vec!["https://cdn.test/ok.jpg"]);
    }

    #[test]
    fn test_parse_feed_without_products_is_empty() {
        assert!(parse_feed(r#"{"items":[]}"#).unwrap().is_empty());
        assert!(parse_feed(r#"{"products":"nope"}"#).unwrap().is_empty());
        assert!(parse_feed("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_feed_invalid_json() {
        let err = parse_feed("<html>maintenance</html>").unwrap_err();
        assert!(matches!(err, LoadError::FeedDecode(_)));
    }

    #[test]
    fn test_preview_truncates_long_bodies() {
        let body = "x".repeat(600);
        assert_eq!(preview(&body).len(), 503);
        assert_eq!(preview("short"), "short");
    }
}
