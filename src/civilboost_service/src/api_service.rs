use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use civilboost_adapters::{config::AllowedOrigins, session::SessionTokenConfig};
use civilboost_axum::routes::{
    forgot_password, health, login, not_found, profile, register, reset_password, root,
    send_verification, verify_reset_code,
};
use civilboost_core::{SmsVerifier, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled HTTP API: all auth routes plus the health and banner
/// endpoints, wired to whichever store and verifier implementations the
/// caller injects.
pub struct ApiService {
    router: Router,
}

impl ApiService {
    /// Build the service around the injected port implementations.
    ///
    /// # Note on Architecture
    /// Adapters implement Clone via internal pooling/Arc sharing. Each
    /// route is given only the state it needs, so the in-memory test wiring
    /// and the Postgres deployment go through identical code.
    pub fn new<U, S>(user_store: U, sms_verifier: S, token_config: SessionTokenConfig) -> Self
    where
        U: UserStore + Clone + 'static,
        S: SmsVerifier + Clone + 'static,
    {
        let auth_router = Router::new()
            // Register needs the store, the verifier, and token issuance
            .route("/register", post(register::<U, S>))
            .with_state((
                user_store.clone(),
                sms_verifier.clone(),
                token_config.clone(),
            ))
            // Login needs the store and token issuance
            .route("/login", post(login::<U>))
            .with_state((user_store.clone(), token_config.clone()))
            // Send-verification only talks to the provider
            .route("/send-verification", post(send_verification::<S>))
            .with_state(sms_verifier.clone())
            // Profile validates the bearer token, then reads the store
            .route("/profile", get(profile::<U>))
            .with_state((user_store.clone(), token_config))
            // The three recovery steps all need store + provider
            .route("/forgot-password", post(forgot_password::<U, S>))
            .with_state((user_store.clone(), sms_verifier.clone()))
            .route("/verify-reset-code", post(verify_reset_code::<U, S>))
            .with_state((user_store.clone(), sms_verifier.clone()))
            .route("/reset-password", post(reset_password::<U, S>))
            .with_state((user_store, sms_verifier));

        let router = Router::new()
            .route("/", get(root))
            .route("/health", get(health))
            .nest("/api/auth", auth_router)
            .fallback(not_found);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Finish the router, optionally restricting CORS to an origin
    /// allow-list.
    pub fn into_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin.as_bytes())
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the API as a standalone server on the given listener.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("CivilBoost API listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
