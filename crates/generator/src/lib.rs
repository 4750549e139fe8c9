//! Генератор статической страницы каталога.
//!
//! Конвейер: фид товаров + таблица цен → сопоставление (u601) → HTML-документ (u602).

pub mod shared;
pub mod usecases;

use contracts::usecases::u602_render_page::RenderResponse;

use shared::config::Config;
use usecases::u601_load_catalog::{FeedSource, HttpFeedClient, LoadExecutor};
use usecases::u602_render_page::RenderExecutor;

/// Полный прогон с HTTP-фидом из настроек
pub fn run(config: &Config) -> anyhow::Result<RenderResponse> {
    let feed = HttpFeedClient::new(&config.feed.url, config.feed.timeout());
    run_with_feed(config, feed)
}

/// Полный прогон с произвольным источником фида.
///
/// Проблемы загрузки не прерывают прогон: страница генерируется всегда,
/// ошибкой завершается только запись результата.
pub fn run_with_feed<F: FeedSource>(config: &Config, feed: F) -> anyhow::Result<RenderResponse> {
    let report = LoadExecutor::new(feed).execute(&config.load_request());

    for issue in &report.issues {
        tracing::warn!("Catalog loaded with issue: {}", issue);
    }

    RenderExecutor::new(config.output_path()).execute(&config.store_profile(), &report.entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_load_catalog::LoadError;

    struct StaticFeed(&'static str);

    impl FeedSource for StaticFeed {
        fn describe(&self) -> String {
            "static".to_string()
        }

        fn fetch(&self) -> Result<String, LoadError> {
            Ok(self.0.to_string())
        }
    }

    struct OfflineFeed;

    impl FeedSource for OfflineFeed {
        fn describe(&self) -> String {
            "offline".to_string()
        }

        fn fetch(&self) -> Result<String, LoadError> {
            Err(LoadError::FeedTransport("connection refused".to_string()))
        }
    }

    fn config_for(dir: &std::path::Path) -> Config {
        let mut config = shared::config::parse_config(shared::config::DEFAULT_CONFIG).unwrap();
        config.sheet.path = dir.join("productos.csv").display().to_string();
        config.output.path = dir.join("out").join("catalogo.html").display().to_string();
        config
    }

    #[test]
    fn test_end_to_end_single_match() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("productos.csv"),
            "Nombre,Precio,Tallas\nbota x,15000,38-42\notro,1,2\n",
        )
        .unwrap();

        let feed = StaticFeed(
            r#"{"products":[
                {"title":"Bota X","images":[{"src":"https://cdn.test/a.jpg"},{"src":"https://cdn.test/b.jpg"}]},
                {"title":"Sin precio","images":[]}
            ]}"#,
        );

        let response = run_with_feed(&config_for(dir.path()), feed).unwrap();
        assert_eq!(response.entries_rendered, 1);

        let html = std::fs::read_to_string(&response.output_path).unwrap();
        assert_eq!(html.len(), response.bytes_written);
        assert_eq!(html.matches("<div class=\"producto\">").count(), 1);
        assert!(html.contains("<h2>Bota X</h2>"));
        assert!(html.contains("Precio: ₡15000"));
        assert!(html.contains("Tallas disponibles: 38-42"));
        assert_eq!(html.matches("class=\"swiper-slide\"").count(), 2);
        assert!(!html.contains("Sin precio"));
    }

    #[test]
    fn test_offline_feed_still_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("productos.csv"), "Nombre,Precio\nBota X,1\n").unwrap();

        let response = run_with_feed(&config_for(dir.path()), OfflineFeed).unwrap();
        assert_eq!(response.entries_rendered, 0);

        let html = std::fs::read_to_string(&response.output_path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert_eq!(
            html.matches(usecases::u602_render_page::page::NO_MATCHES_TEXT).count(),
            1
        );
    }

    #[test]
    fn test_same_inputs_give_identical_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("productos.csv"), "name,price\nBota X,10\n").unwrap();
        let body = r#"{"products":[{"title":"Bota X","images":[{"src":"https://cdn.test/a.jpg"}]}]}"#;
        let config = config_for(dir.path());

        let first = run_with_feed(&config, StaticFeed(body)).unwrap();
        let first_html = std::fs::read_to_string(&first.output_path).unwrap();
        let second = run_with_feed(&config, StaticFeed(body)).unwrap();
        let second_html = std::fs::read_to_string(&second.output_path).unwrap();

        assert_eq!(first_html, second_html);
    }
}
