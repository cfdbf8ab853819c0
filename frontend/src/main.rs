use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use anyhow::Context as _;
use autoliga_frontend::config::Config;
use autoliga_frontend::report::LogReporter;
use autoliga_frontend::routes::{self, AppState};
use autoliga_frontend::CatalogApi;
use dotenvy::dotenv;
use std::sync::Arc;
use tera::Tera;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let tera = Tera::new(&config.templates)
        .with_context(|| format!("failed to load templates from {}", config.templates))?;
    let api = CatalogApi::new(config.api.clone(), config.max_pages)?;

    let bind = (config.host.clone(), config.port);
    let static_mount = config.static_url.trim_end_matches('/').to_string();
    let static_dir = config.static_dir.clone();
    tracing::info!(api = %config.api, host = %bind.0, port = bind.1, "starting catalog frontend");

    let state = web::Data::new(AppState {
        config,
        api,
        tera,
        reporter: Some(Arc::new(LogReporter)),
    });

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
            .service(Files::new(&static_mount, &static_dir))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
