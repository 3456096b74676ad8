use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header::CONTENT_TYPE, request},
    routing::post,
};
use relock_adapters::{
    config::{AllowedOrigins, ResetSettings},
    handlers::ErrorExposure,
};
use relock_axum::routes::{
    TriggerState, request_password_reset, reset_password, verification_code_created,
    verify_reset_code,
};
use relock_core::{AccountStore, AuthProvider, EmailClient, VerificationCodeStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::tracing::{REQUEST_ID_HEADER, make_span_with_request_id, on_request, on_response};

pub const TRIGGER_PATH: &str = "/triggers/verification-code-created";

/// Password-reset service exposing the callable operations and the trigger webhook
pub struct RelockService {
    router: Router,
}

impl RelockService {
    /// Create a new RelockService with the provided stores and email client
    ///
    /// # Arguments
    /// * `account_store` - Profiles looked up by the verification email trigger
    /// * `verification_code_store` - Store for reset records; wrap it in a
    ///   `TriggeringVerificationCodeStore` to have new records emailed in process
    /// * `auth_provider` - Owner of the credentials being reset
    /// * `email_client` - Client for sending emails
    /// * `reset` - Error exposure, the name used in emails and the webhook secret
    ///
    /// Each route is given only the state it needs. The trigger webhook is only mounted
    /// when `reset.trigger_secret` is set.
    pub fn new<A, V, P, E>(
        account_store: A,
        verification_code_store: V,
        auth_provider: P,
        email_client: E,
        reset: &ResetSettings,
    ) -> Self
    where
        A: AccountStore + Clone + 'static,
        V: VerificationCodeStore + Clone + 'static,
        P: AuthProvider + Clone + 'static,
        E: EmailClient + Clone + 'static,
    {
        let exposure = ErrorExposure::from_collapse_flag(reset.collapse_errors);

        let router: Router = Router::new()
            // Issuing and verifying codes only need the verification code store
            .route("/request-password-reset", post(request_password_reset::<V>))
            .with_state(verification_code_store.clone())
            .route("/verify-reset-code", post(verify_reset_code::<V>))
            .with_state(verification_code_store.clone())
            // Reset needs the record and the auth provider
            .route("/reset-password", post(reset_password::<V, P>))
            .with_state((verification_code_store.clone(), auth_provider, exposure));

        let Some(secret) = reset.trigger_secret.clone() else {
            return Self { router };
        };

        // Webhook delivery of record creation
        let trigger_router: Router = Router::new()
            .route(TRIGGER_PATH, post(verification_code_created::<A, V, E>))
            .with_state(TriggerState {
                account_store,
                verification_code_store,
                email_client,
                app_name: reset.app_name.clone(),
                secret,
            });

        Self {
            router: router.merge(trigger_router),
        }
    }

    fn with_trace_layer(mut self) -> Self {
        let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);

        self.router = self
            .router
            .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            )
            .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid));
        self
    }

    /// Convert the RelockService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_headers([CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .map(|origin| allowed_origins.contains(origin))
                            .unwrap_or(false)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Relock service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
