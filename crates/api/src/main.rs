use std::sync::Arc;

use pocket_api::app;
use pocket_api::config::ApiConfig;

#[tokio::main]
async fn main() {
    pocket_observability::init();

    let config = ApiConfig::from_env();
    tracing::info!(
        users = %config.users_file.display(),
        transactions = %config.transactions_file.display(),
        "starting pocket wallet api"
    );

    let services = Arc::new(app::services::AppServices::from_config(&config));
    let router = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, router).await.unwrap();
}
