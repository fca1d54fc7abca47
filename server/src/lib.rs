//! # Canteen Backend
//!
//! In-memory backend for the corporate sandwich-ordering service.
//!
//! # General Infrastructure
//! - Single axum process, no external stores: catalog, staff accounts,
//!   settings, and submitted orders all live in the in-memory [`store::Store`]
//!   owned by the app state.
//! - Public surface: service status, order windows, reference data, active
//!   catalog, order submission, order status polling.
//! - Admin surface behind simulated bearer auth: staff accounts, catalog
//!   CRUD, operating hours, maintenance mode, QR sheet generation.
//! - Every admin handler decides access through [`policy::can_access`]
//!   rather than a per-route role list.
//!
//! # Order Lifecycle
//! - `POST /orders` validates the draft with the `order` crate against the
//!   current windows and active ingredients; errors come back aggregated as
//!   a 422 body.
//! - Accepted orders start out SENT_TO_PRINT. Each `GET
//!   /orders/{id}/status` advances the simulated print pipeline; the third
//!   poll reports PRINTED and the status is sticky from there.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod auth;
pub mod config;
pub mod error;
pub mod policy;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/service/status", get(routes::public::service_status))
        .route("/config/order-windows", get(routes::public::order_windows))
        .route("/reference/departments", get(routes::public::departments))
        .route("/reference/wings", get(routes::public::wings))
        .route(
            "/catalog/special-sandwiches",
            get(routes::public::special_sandwiches),
        )
        .route("/catalog/ingredients", get(routes::public::ingredients))
        .route("/catalog/extras", get(routes::public::extras))
        .route("/orders", post(routes::orders::create_order))
        .route("/orders/{id}/status", get(routes::orders::order_status))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/me", get(routes::auth::me))
        .route(
            "/admin/users",
            get(routes::admin_users::list).post(routes::admin_users::create),
        )
        .route(
            "/admin/users/{id}/reset-password",
            post(routes::admin_users::reset_password),
        )
        .route(
            "/admin/special-sandwiches",
            get(routes::admin_catalog::list_specials).post(routes::admin_catalog::create_special),
        )
        .route(
            "/admin/special-sandwiches/{id}",
            axum::routing::patch(routes::admin_catalog::update_special)
                .delete(routes::admin_catalog::delete_special),
        )
        .route(
            "/admin/ingredients",
            get(routes::admin_catalog::list_ingredients)
                .post(routes::admin_catalog::create_ingredient),
        )
        .route(
            "/admin/ingredients/{id}",
            axum::routing::patch(routes::admin_catalog::update_ingredient)
                .delete(routes::admin_catalog::delete_ingredient),
        )
        .route(
            "/admin/extras",
            get(routes::admin_catalog::list_extras).post(routes::admin_catalog::create_extra),
        )
        .route(
            "/admin/extras/{id}",
            axum::routing::patch(routes::admin_catalog::update_extra)
                .delete(routes::admin_catalog::delete_extra),
        )
        .route(
            "/admin/settings/time",
            get(routes::admin_settings::get_time).put(routes::admin_settings::put_time),
        )
        .route(
            "/admin/settings/maintenance",
            get(routes::admin_settings::get_maintenance)
                .put(routes::admin_settings::put_maintenance),
        )
        .route("/admin/qr/pdf", post(routes::admin_settings::qr_pdf))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    let router = app(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
