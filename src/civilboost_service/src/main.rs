use civilboost_adapters::{
    config::Settings, persistence::postgres_user_store::PostgresUserStore,
    sms::twilio_verify_client::TwilioVerifyClient,
};
use civilboost_service::ApiService;
use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    dotenvy::dotenv().ok();
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let config = Settings::load()?;

    // Setup database connection pool
    let pg_pool = PgPoolOptions::new()
        .max_connections(config.postgres.max_connections)
        .connect(config.postgres.url.expose_secret())
        .await?;

    // Run migrations
    sqlx::migrate!("../../migrations").run(&pg_pool).await?;

    // Create the user store
    let user_store = PostgresUserStore::new(pg_pool, config.password_hash.clone().into());

    // Create the SMS verification client
    let http_client = HttpClient::builder().timeout(config.twilio.timeout()).build()?;
    let sms_verifier = TwilioVerifyClient::new(
        config.twilio.base_url.clone(),
        config.twilio.account_sid.clone(),
        config.twilio.auth_token.clone(),
        config.twilio.verify_service_sid.clone(),
        http_client,
    );

    // Assemble the API around the injected adapters
    let api_service = ApiService::new(
        user_store,
        sms_verifier,
        config.auth.session_token_config(),
    );

    let allowed_origins = (!config.server.allowed_origins.is_empty())
        .then(|| config.server.allowed_origins.clone());

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    tracing::info!("Starting CivilBoost API service...");

    api_service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
