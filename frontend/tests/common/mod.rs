//! In-process stand-in for the catalog backend API.

#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use autoliga_frontend::CatalogApi;
use autoliga_frontend::config::Config;
use autoliga_frontend::report::{ErrorContext, ErrorReporter};
use autoliga_frontend::routes::AppState;
use reqwest::Url;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tera::Tera;

#[derive(Clone, Debug)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Text(&'static str),
}

impl Reply {
    fn respond(&self) -> HttpResponse {
        match self {
            Reply::Json(body) => HttpResponse::Ok().json(body),
            Reply::Status(code) => {
                HttpResponse::build(StatusCode::from_u16(*code).unwrap()).body("backend failure")
            }
            Reply::Text(body) => HttpResponse::Ok().content_type("text/html").body(*body),
        }
    }
}

/// What the mock answers. `product_pages[i]` is served for `?page={i + 1}`.
#[derive(Clone, Debug)]
pub struct Backend {
    pub categories: Reply,
    pub product_pages: Vec<Reply>,
}

#[derive(Default)]
pub struct Hits {
    pub categories: AtomicUsize,
    pub products: AtomicUsize,
    pub locales: Mutex<Vec<String>>,
}

pub struct MockServer {
    pub base: String,
    pub hits: web::Data<Hits>,
    handle: ServerHandle,
}

impl MockServer {
    pub fn url(&self) -> Url {
        Url::parse(&self.base).unwrap()
    }

    pub fn api(&self) -> CatalogApi {
        CatalogApi::new(self.url(), 1000).unwrap()
    }

    pub fn product_hits(&self) -> usize {
        self.hits.products.load(Ordering::SeqCst)
    }

    pub fn category_hits(&self) -> usize {
        self.hits.categories.load(Ordering::SeqCst)
    }

    pub fn locales(&self) -> Vec<String> {
        self.hits.locales.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn categories_handler(
    backend: web::Data<Backend>,
    hits: web::Data<Hits>,
    locale: web::Path<String>,
) -> HttpResponse {
    hits.categories.fetch_add(1, Ordering::SeqCst);
    hits.locales.lock().unwrap().push(locale.into_inner());
    backend.categories.respond()
}

async fn products_handler(
    backend: web::Data<Backend>,
    hits: web::Data<Hits>,
    locale: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    hits.products.fetch_add(1, Ordering::SeqCst);
    hits.locales.lock().unwrap().push(locale.into_inner());
    let page: usize = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    match backend.product_pages.get(page.saturating_sub(1)) {
        Some(reply) => reply.respond(),
        None => HttpResponse::NotFound().finish(),
    }
}

/// Starts the mock on a free port. `build` gets the base URL so fixtures
/// can embed absolute `next` links.
pub fn spawn(build: impl FnOnce(&str) -> Backend) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let backend = web::Data::new(build(&base));
    let hits = web::Data::new(Hits::default());
    let server_hits = hits.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(backend.clone())
            .app_data(server_hits.clone())
            .route("/api/{locale}/product-categories/", web::get().to(categories_handler))
            .route("/api/{locale}/products/", web::get().to(products_handler))
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    MockServer { base, hits, handle }
}

pub fn product(title: &str, category: Option<&str>) -> Value {
    let slug = title.to_lowercase().replace(' ', "-");
    match category {
        Some(category) => json!({
            "id": slug,
            "title": title,
            "slug": slug,
            "image_url": format!("/media/{slug}.png"),
            "category": { "slug": category, "name": category },
            "card_specs": [
                { "value": "Diesel", "order": 2 },
                { "icon": { "icon_url": "/media/icons/power.svg", "name": "Power" }, "value": "150 hp", "order": 1 }
            ]
        }),
        None => json!({ "id": slug, "title": title, "slug": slug, "category": null }),
    }
}

pub fn products(prefix: &str, count: usize, category: Option<&str>) -> Vec<Value> {
    (1..=count)
        .map(|i| product(&format!("{prefix} {i}"), category))
        .collect()
}

pub fn single_page(items: Vec<Value>) -> Vec<Reply> {
    vec![Reply::Json(json!({ "count": items.len(), "next": null, "results": items }))]
}

pub fn categories_fixture() -> Reply {
    Reply::Json(json!({
        "results": [
            {
                "slug": "trucks",
                "name": "Trucks",
                "description": "Heavy duty haulers",
                "hero_image_url": "/media/hero/trucks.jpg"
            },
            { "slug": "buses", "name": "Buses" }
        ]
    }))
}

#[derive(Default)]
pub struct Recorder {
    pub reports: Mutex<Vec<(String, ErrorContext)>>,
}

impl ErrorReporter for Recorder {
    fn report(&self, message: &str, context: &ErrorContext) {
        self.reports
            .lock()
            .unwrap()
            .push((message.to_string(), context.clone()));
    }
}

pub fn test_config(api: Url) -> Config {
    let mut config = Config::from_lookup(|_| None).unwrap();
    config.api = api;
    config
}

pub fn app_state(server: &MockServer, reporter: Option<Arc<dyn ErrorReporter>>) -> web::Data<AppState> {
    let config = test_config(server.url());
    let tera = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/public/**/*.html")).unwrap();
    web::Data::new(AppState {
        api: CatalogApi::new(config.api.clone(), config.max_pages).unwrap(),
        config,
        tera,
        reporter,
    })
}
