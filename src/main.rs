mod cards;
mod catalog;
mod config;
mod query;
mod routes;
mod state;
mod validate;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();

    // A failed load is terminal: the site runs with its empty state, no retry.
    let catalog = match catalog::load(&config.data_file).await {
        Ok(catalog) => {
            tracing::info!(
                articles = catalog.len(),
                path = %config.data_file.display(),
                "article catalog loaded"
            );
            Some(catalog)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %config.data_file.display(),
                "article catalog unavailable, blog will render its empty state"
            );
            None
        }
    };

    let state = state::AppState::new(catalog, &config.site_name);

    let app = routes::app(state, &config.website_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "blogboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
