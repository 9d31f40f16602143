use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use vr_api::config::Config;
use vr_api::routes;
use vr_api::routes::verification::AppState;

use vr_core::services::flow::{FlowConfig, VerificationFlowService};
use vr_infra::cache::InMemoryCorrelationStore;
use vr_infra::provider::{OidcProviderClient, ProviderConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting VerifyRelay API server");

    // Load configuration and the provider private key
    let config = Config::from_env()?;
    let private_key = config.load_private_key()?;

    let mut provider_config = ProviderConfig::new(
        config.application_id.clone(),
        private_key,
        config.redirect_url(),
    );
    if let Some(url) = &config.auth_url {
        provider_config.auth_url = url.clone();
    }
    if let Some(url) = &config.token_url {
        provider_config.token_url = url.clone();
    }
    if let Some(url) = &config.api_base_url {
        provider_config.api_base_url = url.clone();
    }

    // Wire the provider client and correlation store into the flow service
    let provider = Arc::new(OidcProviderClient::new(provider_config)?);
    let store = Arc::new(InMemoryCorrelationStore::with_settings(
        config.state_ttl_seconds,
        config.state_capacity,
    ));
    let flow_service = Arc::new(VerificationFlowService::new(
        provider,
        store,
        FlowConfig::default(),
    ));

    let app_state = web::Data::new(AppState { flow_service });

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .route("/_/health", web::get().to(routes::health::health_check))
            .route(
                "/prepStep1",
                web::get().to(
                    routes::verification::initiate::initiate::<
                        OidcProviderClient,
                        InMemoryCorrelationStore,
                    >,
                ),
            )
            .route(
                "/step2",
                web::get().to(
                    routes::verification::callback::callback::<
                        OidcProviderClient,
                        InMemoryCorrelationStore,
                    >,
                ),
            )
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
