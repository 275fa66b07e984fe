//! Transactions API endpoints

use api_types::{
    Message,
    transaction::{TransactionList, TransactionNew, TransactionUpdate, TransactionView},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{ServerError, map_kind, server::ServerState, unmap_kind};

fn map_transaction(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id.to_string(),
        kind: map_kind(tx.kind),
        amount: tx.amount,
        category_id: tx.category_id.to_string(),
        description: tx.description,
        date: tx.date,
        created_at: tx.created_at,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TransactionList>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    // A month without a year (or the reverse) does not filter.
    let period = match (query.month, query.year) {
        (Some(month), Some(year)) => Some(engine::MonthPeriod::new(year, month)?),
        _ => None,
    };

    let filter = engine::TransactionListFilter {
        period,
        kind: query.kind.map(unmap_kind),
        category_id: query.category_id.filter(|id| !id.trim().is_empty()),
    };

    let transactions = state
        .engine
        .list_transactions(&filter)
        .await?
        .into_iter()
        .map(map_transaction)
        .collect();

    Ok(Json(transactions))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let tx = state
        .engine
        .create_transaction(engine::CreateTransactionCmd {
            kind: unmap_kind(payload.kind),
            amount: payload.amount,
            category_id: payload.category_id,
            description: payload.description,
            date: payload.date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_transaction(tx))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(transaction_id): Path<String>,
    Json(payload): Json<TransactionUpdate>,
) -> Result<Json<TransactionView>, ServerError> {
    let tx = state
        .engine
        .update_transaction(
            &transaction_id,
            engine::UpdateTransactionCmd {
                kind: payload.kind.map(unmap_kind),
                amount: payload.amount,
                category_id: payload.category_id,
                description: payload.description,
                date: payload.date,
            },
        )
        .await?;

    Ok(Json(map_transaction(tx)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_transaction(&transaction_id).await?;

    Ok(Json(Message {
        message: "Transaction deleted".to_string(),
    }))
}
