use axum::{
    Json, Router,
    routing::{get, put},
};

use std::sync::Arc;

use api_types::Message;
use engine::Engine;

use crate::{categories, summary, transactions};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn health() -> Json<Message> {
    Json(Message {
        message: "Budget Planner API".to_string(),
    })
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api", get(health))
        .route("/api/", get(health))
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/api/categories/{id}",
            put(categories::update).delete(categories::delete),
        )
        .route(
            "/api/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/api/transactions/{id}",
            put(transactions::update).delete(transactions::delete),
        )
        .route("/api/summary/monthly", get(summary::monthly))
        .route("/api/summary/yearly", get(summary::yearly))
        .route("/api/summary/budget-status", get(summary::budget_status))
        .with_state(state)
}

/// Build the HTTP application around `engine`.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}
