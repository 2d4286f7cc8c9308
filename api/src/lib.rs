//! HTTP surface of the campus portal backend.
//!
//! One axum router: the chatbot endpoint, the delegated auth endpoints, the
//! read-only dashboard projections, and a health probe for the model
//! backend. All responses use the universal success/error envelope.

use std::{env, error::Error, sync::Arc};

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::core::app_state::AppState;
use crate::error_handler::AppError;
use crate::middleware_layer::json_extractor::json_error_mapper;
use crate::routes::{
    ask::ask_question_route::ask_question,
    auth::{login_route::login, logout_route::logout, signup_route::signup},
    dashboard::{
        parent_dashboard_route::parent_dashboard, student_dashboard_route::student_dashboard,
    },
    health_route::health,
};

pub async fn start() -> Result<(), Box<dyn Error>> {
    let host_url =
        env::var("API_ADDRESS").map_err(|_| AppError::MissingEnv("API_ADDRESS"))?;

    let state = Arc::new(AppState::from_env()?);

    let app = Router::new()
        .route("/ask_question", post(ask_question))
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/auth/logout", post(logout))
        .route("/parents/{uid}", get(parent_dashboard))
        .route("/students/{student_id}", get(student_dashboard))
        .route("/health", get(health))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;

    info!(%host_url, "campus portal API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
