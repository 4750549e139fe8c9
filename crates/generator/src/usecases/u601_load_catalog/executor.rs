use contracts::domain::a001_remote_product::RemoteProduct;
use contracts::domain::a003_catalog_entry::CatalogEntry;
use contracts::usecases::common::{UseCaseError, UseCaseMetadata};
use contracts::usecases::u601_load_catalog::{LoadCatalog, LoadReport, LoadRequest};
use std::collections::HashSet;

use super::error::LoadError;
use super::feed_client::{parse_feed, FeedSource};
use super::sheet_reader::{read_price_index, PriceIndex};
use crate::shared::text::JoinKey;

/// Executor для UseCase загрузки каталога
pub struct LoadExecutor<F: FeedSource> {
    feed: F,
}

/// Результат сопоставления фида с индексом цен
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinOutcome {
    pub entries: Vec<CatalogEntry>,
    pub unmatched_feed: Vec<String>,
    pub unmatched_sheet: Vec<String>,
}

impl<F: FeedSource> LoadExecutor<F> {
    pub fn new(feed: F) -> Self {
        Self { feed }
    }

    /// Загрузить фид и таблицу, сопоставить по нормализованному названию.
    ///
    /// Никогда не падает: любая проблема превращается в пустой фид или пустой
    /// индекс цен и записывается в `issues` отчёта.
    pub fn execute(&self, request: &LoadRequest) -> LoadReport {
        let started_at = std::time::Instant::now();
        tracing::info!(
            "[{}] feed={}, sheet={}",
            LoadCatalog::full_name(),
            self.feed.describe(),
            request.sheet_path.display()
        );

        let mut issues: Vec<UseCaseError> = Vec::new();

        let products = match self.load_feed() {
            Ok(products) => products,
            Err(e) => {
                tracing::error!("Feed unavailable: {}", e);
                issues.push(e.into());
                Vec::new()
            }
        };

        let index = match read_price_index(request) {
            Ok(index) => index,
            Err(e) => {
                tracing::error!("Spreadsheet unavailable: {}", e);
                issues.push(e.into());
                PriceIndex::default()
            }
        };

        let outcome = join_products(&products, &index);

        for name in &outcome.unmatched_feed {
            tracing::debug!("Feed product not in spreadsheet: {}", name);
        }
        if !outcome.unmatched_sheet.is_empty() {
            tracing::info!(
                "{} spreadsheet rows have no feed product: {:?}",
                outcome.unmatched_sheet.len(),
                outcome.unmatched_sheet
            );
        }

        tracing::info!(
            "[{}] matched {} of {} feed products ({} spreadsheet rows) in {}ms",
            LoadCatalog::full_name(),
            outcome.entries.len(),
            products.len(),
            index.row_count(),
            started_at.elapsed().as_millis()
        );

        LoadReport {
            entries: outcome.entries,
            feed_products: products.len(),
            sheet_rows: index.row_count(),
            unmatched_feed: outcome.unmatched_feed,
            unmatched_sheet: outcome.unmatched_sheet,
            duplicate_keys: index.duplicates().to_vec(),
            issues,
        }
    }

    fn load_feed(&self) -> Result<Vec<RemoteProduct>, LoadError> {
        let body = self.feed.fetch()?;
        let products = parse_feed(&body)?;
        if products.is_empty() {
            return Err(LoadError::FeedEmpty);
        }
        Ok(products)
    }
}

/// Сопоставить товары фида с таблицей.
///
/// Позиция появляется только если ключ есть и в фиде, и в таблице.
/// Порядок позиций совпадает с порядком фида.
pub fn join_products(products: &[RemoteProduct], index: &PriceIndex) -> JoinOutcome {
    let mut outcome = JoinOutcome::default();
    let mut matched_keys = HashSet::new();

    for product in products {
        let key = JoinKey::from_name(&product.name);
        match index.get(&key) {
            Some(row) => {
                outcome.entries.push(CatalogEntry::from_parts(
                    product,
                    row.price.as_deref(),
                    row.sizes.as_deref(),
                ));
                matched_keys.insert(key);
            }
            None => outcome.unmatched_feed.push(product.name.clone()),
        }
    }

    outcome.unmatched_sheet = index
        .iter()
        .filter(|(key, _)| !matched_keys.contains(*key))
        .map(|(_, row)| row.name.clone())
        .collect();

    outcome
}
