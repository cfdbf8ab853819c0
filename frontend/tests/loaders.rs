mod common;

use autoliga_frontend::{CatalogApi, CatalogError, CatalogPage, Locale};
use common::{Backend, Recorder, Reply, categories_fixture, products, single_page, spawn};
use serde_json::json;

#[actix_web::test]
async fn test_follows_absolute_next_and_stops_at_null() {
    let server = spawn(|base| Backend {
        categories: categories_fixture(),
        product_pages: vec![
            Reply::Json(json!({
                "next": format!("{base}/api/en/products/?page=2"),
                "results": products("Page one", 8, Some("trucks")),
            })),
            Reply::Json(json!({
                "next": null,
                "results": products("Page two", 4, Some("buses")),
            })),
            Reply::Json(json!({ "next": null, "results": products("Never", 3, None) })),
        ],
    });

    let all = server.api().load_products(Locale::En).await.unwrap();
    assert_eq!(all.len(), 12);
    assert_eq!(all[0].display_title(), Some("Page one 1"));
    assert_eq!(all[8].display_title(), Some("Page two 1"));
    assert_eq!(server.product_hits(), 2);
    assert_eq!(server.locales(), vec!["en", "en"]);
    server.stop().await;
}

#[actix_web::test]
async fn test_relative_next_and_alternate_shapes() {
    let server = spawn(|_| Backend {
        categories: categories_fixture(),
        product_pages: vec![
            Reply::Json(json!({
                "next": "/api/ru/products/?page=2",
                "products": products("Legacy", 2, None),
            })),
            Reply::Json(json!(products("Bare", 3, None))),
        ],
    });

    let all = server.api().load_products(Locale::Ru).await.unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[4].display_title(), Some("Bare 3"));
    assert_eq!(server.product_hits(), 2);
    assert!(server.locales().iter().all(|l| l == "ru"));
    server.stop().await;
}

#[actix_web::test]
async fn test_failure_on_later_page_discards_everything() {
    let server = spawn(|_| Backend {
        categories: categories_fixture(),
        product_pages: vec![
            Reply::Json(json!({
                "next": "?page=2",
                "results": products("Ok", 8, None),
            })),
            Reply::Status(502),
        ],
    });

    let err = server.api().load_products(Locale::En).await.unwrap_err();
    assert!(err.is_network());
    assert!(matches!(err, CatalogError::Status { status, .. } if status.as_u16() == 502));
    server.stop().await;
}

#[actix_web::test]
async fn test_self_referencing_next_hits_page_limit() {
    let server = spawn(|_| Backend {
        categories: categories_fixture(),
        product_pages: vec![Reply::Json(json!({
            "next": "/api/en/products/?page=1",
            "results": products("Loop", 1, None),
        }))],
    });

    let api = CatalogApi::new(server.url(), 5).unwrap();
    let err = api.load_products(Locale::En).await.unwrap_err();
    assert!(matches!(err, CatalogError::PageLimit(5)));
    assert_eq!(server.product_hits(), 5);
    server.stop().await;
}

#[actix_web::test]
async fn test_category_shapes() {
    let server = spawn(|_| Backend {
        categories: Reply::Json(json!([
            { "slug": "vans", "name": "Vans" },
            { "name": "no slug" },
            { "slug": "suv" }
        ])),
        product_pages: single_page(Vec::new()),
    });
    let categories = server.api().load_categories(Locale::Uz).await.unwrap();
    let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["vans", "suv"]);
    server.stop().await;

    let server = spawn(|_| Backend {
        categories: Reply::Json(json!({ "detail": "Not paginated" })),
        product_pages: single_page(Vec::new()),
    });
    assert!(server.api().load_categories(Locale::Uz).await.unwrap().is_empty());
    server.stop().await;
}

#[actix_web::test]
async fn test_non_json_body_is_decode_error() {
    let server = spawn(|_| Backend {
        categories: Reply::Text("<html>maintenance</html>"),
        product_pages: vec![Reply::Text("<html>maintenance</html>")],
    });
    let err = server.api().load_categories(Locale::En).await.unwrap_err();
    assert!(err.is_decode());
    let err = server.api().load_products(Locale::En).await.unwrap_err();
    assert!(err.is_decode());
    server.stop().await;
}

#[actix_web::test]
async fn test_category_outage_does_not_block_products() {
    let server = spawn(|_| Backend {
        categories: Reply::Status(500),
        product_pages: single_page(products("Truck", 5, Some("trucks"))),
    });
    let recorder = Recorder::default();

    let mut page = CatalogPage::new(Locale::En, Some("trucks".into()), 8, "Autoliga");
    page.load(&server.api(), Some(&recorder)).await;

    assert!(page.categories().is_empty());
    assert!(page.header().is_none());
    assert_eq!(page.document_title(), "Autoliga");
    assert_eq!(page.visible().len(), 5);
    assert_eq!(server.category_hits(), 1);
    assert_eq!(server.product_hits(), 1);

    let reports = recorder.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].1.file, "categories");
    assert!(reports[0].1.url.ends_with("/api/en/product-categories/"));
    drop(reports);
    server.stop().await;
}

#[actix_web::test]
async fn test_product_outage_leaves_catalog_empty() {
    let server = spawn(|_| Backend {
        categories: categories_fixture(),
        product_pages: vec![Reply::Status(500)],
    });
    let recorder = Recorder::default();

    let mut page = CatalogPage::new(Locale::Uz, None, 8, "Autoliga");
    page.load(&server.api(), Some(&recorder)).await;

    assert!(page.is_failed());
    assert!(page.all_products().is_empty());
    assert!(page.visible().is_empty());
    assert_eq!(page.categories().len(), 2);

    let reports = recorder.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].0.starts_with("Products loading error"));
    assert!(reports[0].1.url.ends_with("/api/uz/products/"));
    drop(reports);
    server.stop().await;
}
