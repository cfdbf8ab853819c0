//! Per-view state of the product catalog page.
//!
//! A [`CatalogPage`] is built for one page view, loads categories and then
//! products, and afterwards only changes through the filter and pagination
//! transitions. [`CatalogPage::view`] flattens the current state into data
//! a template can bind directly.

use crate::card::{Card, render_card};
use crate::error::{CatalogError, Result};
use crate::filter::compute_visible;
use crate::handlers::CatalogApi;
use crate::i18n::lookup;
use crate::locale::Locale;
use crate::models::{Categories, Category, Product};
use crate::pagination::{PageLinks, Pagination};
use crate::report::{ErrorContext, ErrorReporter};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct CatalogPage {
    locale: Locale,
    site_name: String,
    category: Option<String>,
    /// Search input as typed; [`compute_visible`] normalizes it.
    query: String,
    categories: Categories,
    all_products: Vec<Product>,
    filtered: Vec<Product>,
    pagination: Pagination,
    state: LoadState,
}

/// Header content taken from the active category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageHeader {
    pub title: String,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub hero_alt: String,
    pub breadcrumb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewStatus {
    Loading { message: String },
    Ready,
    NoResults { message: String },
    Failed { message: String, hint: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationLabels {
    pub prev: String,
    pub next: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub locale: Locale,
    pub document_title: String,
    pub header: Option<PageHeader>,
    pub status: ViewStatus,
    pub cards: Vec<Card>,
    /// Only present when there is more than one page.
    pub pagination: Option<PageLinks>,
    pub labels: PaginationLabels,
    pub category: Option<String>,
    pub query: String,
    pub total: usize,
}

impl CatalogPage {
    pub fn new(
        locale: Locale,
        category: Option<String>,
        page_size: usize,
        site_name: impl Into<String>,
    ) -> Self {
        CatalogPage {
            locale,
            site_name: site_name.into(),
            category: category.filter(|slug| !slug.is_empty()),
            query: String::new(),
            categories: Categories::default(),
            all_products: Vec::new(),
            filtered: Vec::new(),
            pagination: Pagination::new(0, page_size),
            state: LoadState::Loading,
        }
    }

    /// Loads categories, then products, recording failures on the page.
    pub async fn load(&mut self, api: &CatalogApi, reporter: Option<&dyn ErrorReporter>) {
        let categories = api.load_categories(self.locale).await;
        self.apply_categories(categories, reporter);

        let products = api.load_products(self.locale).await;
        self.apply_products(products, reporter);
    }

    /// Stores the category list. A failed load leaves it empty.
    pub fn apply_categories(
        &mut self,
        result: Result<Vec<Category>>,
        reporter: Option<&dyn ErrorReporter>,
    ) {
        match result {
            Ok(list) => {
                self.categories = Categories::new(list);
                if let Some(slug) = &self.category {
                    if self.categories.get(slug).is_none() {
                        tracing::warn!(category = %slug, "category not found");
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "categories unavailable, continuing without them");
                self.report(reporter, "Categories loading error", "categories", &e);
                self.categories = Categories::default();
            }
        }
    }

    /// Stores the full product list, or the error that replaced it.
    pub fn apply_products(
        &mut self,
        result: Result<Vec<Product>>,
        reporter: Option<&dyn ErrorReporter>,
    ) {
        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "products loaded");
                self.all_products = products;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!(error = %e, "products loading failed");
                self.report(reporter, "Products loading error", "products", &e);
                self.all_products = Vec::new();
                self.state = LoadState::Failed;
            }
        }
        self.refilter();
    }

    fn report(
        &self,
        reporter: Option<&dyn ErrorReporter>,
        what: &str,
        file: &'static str,
        error: &CatalogError,
    ) {
        let Some(reporter) = reporter else {
            return;
        };
        let context = ErrorContext {
            file,
            url: error.url().unwrap_or_default().to_string(),
            category: self.category.clone(),
        };
        reporter.report(&format!("{what}: {error}"), &context);
    }

    fn refilter(&mut self) {
        self.filtered = compute_visible(&self.all_products, self.category.as_deref(), &self.query);
        self.pagination.set_total(self.filtered.len());
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|slug| !slug.is_empty());
        self.refilter();
    }

    pub fn goto(&mut self, page: usize) -> bool {
        self.pagination.goto(page)
    }

    pub fn next(&mut self) -> bool {
        self.pagination.next()
    }

    pub fn prev(&mut self) -> bool {
        self.pagination.prev()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn all_products(&self) -> &[Product] {
        &self.all_products
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, LoadState::Failed)
    }

    /// Products on the current page.
    pub fn visible(&self) -> &[Product] {
        self.pagination.slice(&self.filtered)
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.category
            .as_deref()
            .and_then(|slug| self.categories.get(slug))
    }

    pub fn header(&self) -> Option<PageHeader> {
        let category = self.current_category()?;
        let name = category.display_name().to_string();
        Some(PageHeader {
            title: name.clone(),
            description: category.description.clone().filter(|d| !d.is_empty()),
            hero_image: category.hero_image_url.clone().filter(|u| !u.is_empty()),
            hero_alt: name.clone(),
            breadcrumb: name,
        })
    }

    pub fn document_title(&self) -> String {
        match self.current_category() {
            Some(category) => format!("{} - {}", category.display_name(), self.site_name),
            None => self.site_name.clone(),
        }
    }

    pub fn status(&self) -> ViewStatus {
        let t = |key| lookup(self.locale, key).to_string();
        match &self.state {
            LoadState::Loading => ViewStatus::Loading {
                message: t("status.loading"),
            },
            // the error detail goes to the log and the reporter only
            LoadState::Failed => ViewStatus::Failed {
                message: t("status.error"),
                hint: t("status.try_again"),
            },
            LoadState::Loaded if self.filtered.is_empty() => ViewStatus::NoResults {
                message: t("status.no_results"),
            },
            LoadState::Loaded => ViewStatus::Ready,
        }
    }

    pub fn view(&self) -> CatalogView {
        let status = self.status();
        let cards = match status {
            ViewStatus::Ready => self
                .visible()
                .iter()
                .map(|product| render_card(product, self.locale))
                .collect(),
            _ => Vec::new(),
        };
        let pagination = (status == ViewStatus::Ready && self.pagination.total_pages() > 1)
            .then(|| self.pagination.links());

        CatalogView {
            locale: self.locale,
            document_title: self.document_title(),
            header: self.header(),
            status,
            cards,
            pagination,
            labels: PaginationLabels {
                prev: lookup(self.locale, "pagination.prev").to_string(),
                next: lookup(self.locale, "pagination.next").to_string(),
            },
            category: self.category.clone(),
            query: self.query.clone(),
            total: self.filtered.len(),
        }
    }
}
