//! HTML routes: bind the catalog state to the Tera templates in `public/`.

use crate::brands::BrandSelector;
use crate::config::Config;
use crate::handlers::CatalogApi;
use crate::locale::{LOCALE_COOKIE, Locale, LocaleSources, resolve};
use crate::menu::{Menu, build_menu};
use crate::models::Categories;
use crate::page::CatalogPage;
use crate::report::{ErrorContext, ErrorReporter};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;
use tera::{Context, Tera};

pub struct AppState {
    pub config: Config,
    pub api: CatalogApi,
    pub tera: Tera,
    pub reporter: Option<Arc<dyn ErrorReporter>>,
}

impl AppState {
    fn reporter(&self) -> Option<&dyn ErrorReporter> {
        self.reporter.as_deref()
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub page: Option<String>,
    pub lang: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct BrandQuery {
    pub brand: Option<String>,
    pub page: Option<String>,
    pub model: Option<String>,
    pub close: Option<String>,
    pub lang: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct MenuQuery {
    pub lang: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/products/", web::get().to(products_page))
        .route("/products/cards", web::get().to(products_fragment))
        .route("/brands/", web::get().to(brands_page))
        .route("/menu", web::get().to(menu_fragment));
}

fn request_locale(req: &HttpRequest, lang: Option<&str>, config: &Config) -> Locale {
    let cookie = req.cookie(LOCALE_COOKIE);
    resolve(LocaleSources {
        page: lang,
        global: config.language_code.map(|locale| locale.code()),
        cookie: cookie.as_ref().map(|c| c.value()),
    })
}

/// The `lang` query parameter, when it names a site language. Links carry it
/// forward so navigation keeps the page-level locale.
fn page_lang(lang: Option<&str>) -> Option<Locale> {
    lang.and_then(Locale::from_code)
}

/// Page numbers arrive as text; anything unparsable means page 1.
fn page_number(raw: Option<&str>) -> usize {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}

/// Query string for a catalog link, ending in `page=` for the number.
fn page_base(category: Option<&str>, query: &str, lang: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(category) = category {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }
    if let Some(lang) = lang {
        params.push(format!("lang={}", urlencoding::encode(lang)));
    }
    params.push("page=".to_string());
    format!("?{}", params.join("&"))
}

fn render(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) => {
            tracing::error!(template, error = ?err, "Tera render error");
            HttpResponse::InternalServerError().body("Template render error")
        }
    }
}

fn base_context(state: &AppState, locale: Locale, lang: Option<Locale>, menu: &Menu) -> Context {
    let mut context = Context::new();
    context.insert("lang", &locale);
    context.insert("page_lang", &lang);
    context.insert("site_name", &state.config.site_name);
    context.insert("static_url", &state.config.static_url);
    context.insert("menu", menu);
    context
}

async fn load_catalog(state: &AppState, locale: Locale, query: &CatalogQuery) -> CatalogPage {
    let mut page = CatalogPage::new(
        locale,
        query.category.clone(),
        state.config.page_size,
        state.config.site_name.clone(),
    );
    page.load(&state.api, state.reporter()).await;
    page.set_query(query.q.as_deref().unwrap_or_default());
    page.goto(page_number(query.page.as_deref()));
    page
}

fn catalog_context(state: &AppState, page: &CatalogPage, query: &CatalogQuery) -> Context {
    let view = page.view();
    let lang = page_lang(query.lang.as_deref());
    let menu = build_menu(page.categories(), page.locale(), lang);
    let mut context = base_context(state, page.locale(), lang, &menu);
    context.insert(
        "page_base",
        &page_base(
            view.category.as_deref(),
            &view.query,
            lang.map(|lang| lang.code()),
        ),
    );
    context.insert("view", &view);
    context
}

pub async fn products_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<CatalogQuery>,
) -> HttpResponse {
    let locale = request_locale(&req, query.lang.as_deref(), &state.config);
    let page = load_catalog(&state, locale, &query).await;
    render(&state.tera, "products.html", &catalog_context(&state, &page, &query))
}

/// Card grid and pagination only, for re-rendering on search input.
pub async fn products_fragment(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<CatalogQuery>,
) -> HttpResponse {
    let locale = request_locale(&req, query.lang.as_deref(), &state.config);
    let page = load_catalog(&state, locale, &query).await;
    render(
        &state.tera,
        "partials/catalog.html",
        &catalog_context(&state, &page, &query),
    )
}

/// Menu for pages that do not load the catalog. A category failure leaves
/// the menu on its placeholder.
async fn load_menu(state: &AppState, locale: Locale, lang: Option<Locale>) -> Menu {
    let categories = match state.api.load_categories(locale).await {
        Ok(list) => Categories::new(list),
        Err(e) => {
            tracing::warn!(error = %e, "menu categories unavailable");
            if let Some(reporter) = state.reporter() {
                let context = ErrorContext {
                    file: "menu",
                    url: e.url().unwrap_or_default().to_string(),
                    category: None,
                };
                reporter.report(&format!("Menu loading error: {e}"), &context);
            }
            Categories::default()
        }
    };
    build_menu(&categories, locale, lang)
}

pub async fn menu_fragment(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<MenuQuery>,
) -> HttpResponse {
    let locale = request_locale(&req, query.lang.as_deref(), &state.config);
    let lang = page_lang(query.lang.as_deref());
    let menu = load_menu(&state, locale, lang).await;
    render(
        &state.tera,
        "partials/menu.html",
        &base_context(&state, locale, lang, &menu),
    )
}

pub async fn brands_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<BrandQuery>,
) -> HttpResponse {
    let locale = request_locale(&req, query.lang.as_deref(), &state.config);

    let mut selector = BrandSelector::new(state.config.brand_page_size);
    if let Some(brand) = query.brand.as_deref() {
        selector.select_brand(brand);
    }
    if query.page.is_some() {
        selector.goto(page_number(query.page.as_deref()));
    }
    if let Some(model) = query.model.as_deref().and_then(|m| m.trim().parse().ok()) {
        selector.select_model(model);
    }
    if query.close.is_some() {
        selector.close_panel();
    }

    let lang = page_lang(query.lang.as_deref());
    let menu = load_menu(&state, locale, lang).await;
    let mut context = base_context(&state, locale, lang, &menu);
    context.insert("brands", &selector.view(&state.config.static_url));
    render(&state.tera, "brands.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_parsing() {
        assert_eq!(page_number(None), 1);
        assert_eq!(page_number(Some("3")), 3);
        assert_eq!(page_number(Some("-2")), 1);
        assert_eq!(page_number(Some("abc")), 1);
        assert_eq!(page_number(Some("0")), 0);
    }

    #[test]
    fn test_page_lang_only_keeps_site_languages() {
        assert_eq!(page_lang(Some("RU")), Some(Locale::Ru));
        assert_eq!(page_lang(Some("de")), None);
        assert_eq!(page_lang(None), None);
    }

    #[test]
    fn test_page_base() {
        assert_eq!(page_base(None, "", None), "?page=");
        assert_eq!(
            page_base(Some("trucks"), "malibu xl", Some("ru")),
            "?category=trucks&q=malibu%20xl&lang=ru&page="
        );
    }
}
