use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{app, run_with_listener};

mod categories;
mod server;
mod summary;
mod transactions;

pub mod types {
    pub mod category {
        pub use api_types::category::{CategoryCreate, CategoryUpdate, CategoryView};
    }

    pub mod transaction {
        pub use api_types::transaction::{
            TransactionList, TransactionNew, TransactionUpdate, TransactionView,
        };
    }

    pub mod summary {
        pub use api_types::summary::{
            BudgetStatus, CategoryBreakdown, MonthTotals, MonthlySummary, YearlySummary,
        };
    }

    pub use api_types::{Message, TransactionKind};
}

pub enum ServerError {
    Engine(EngineError),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::UnknownCategory(_)
        | EngineError::CategoryInUse(_)
        | EngineError::EmptyUpdate => StatusCode::BAD_REQUEST,
        EngineError::InvalidAmount(_)
        | EngineError::InvalidName(_)
        | EngineError::InvalidPeriod(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let ServerError::Engine(err) = self;
        let status = status_for_engine_error(&err);
        let error = message_for_engine_error(err);

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

/// Convert between the engine and wire spellings of a kind.
fn map_kind(kind: engine::TransactionKind) -> api_types::TransactionKind {
    match kind {
        engine::TransactionKind::Income => api_types::TransactionKind::Income,
        engine::TransactionKind::Expense => api_types::TransactionKind::Expense,
    }
}

fn unmap_kind(kind: api_types::TransactionKind) -> engine::TransactionKind {
    match kind {
        api_types::TransactionKind::Income => engine::TransactionKind::Income,
        api_types::TransactionKind::Expense => engine::TransactionKind::Expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res =
            ServerError::from(EngineError::KeyNotFound("Category".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn referential_errors_map_to_400() {
        let res = ServerError::from(EngineError::UnknownCategory("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let res = ServerError::from(EngineError::CategoryInUse("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_update_maps_to_400() {
        let res = ServerError::from(EngineError::EmptyUpdate).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        let res = ServerError::from(EngineError::InvalidAmount("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let res = ServerError::from(EngineError::InvalidPeriod("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = EngineError::Database(sea_orm::DbErr::Custom("boom".to_string()));
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn kinds_map_both_ways() {
        for kind in [engine::TransactionKind::Income, engine::TransactionKind::Expense] {
            assert_eq!(unmap_kind(map_kind(kind)), kind);
        }
    }
}
