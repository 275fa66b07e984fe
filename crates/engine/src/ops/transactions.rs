use sea_orm::{
    ActiveValue, DatabaseTransaction, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    prelude::*,
};
use uuid::Uuid;

use crate::{
    CreateTransactionCmd, EngineError, ResultEngine, Transaction, TransactionKind,
    UpdateTransactionCmd, categories,
    period::MonthPeriod,
    transactions,
    util::{normalize_optional_text, parse_uuid, validate_amount},
};

use super::{Engine, with_tx};

/// Upper bound on the rows a single listing returns.
pub const MAX_LIST_LIMIT: u64 = 1000;

/// Filters for listing transactions. Unset fields do not filter.
#[derive(Clone, Debug, Default)]
pub struct TransactionListFilter {
    /// Restricts to `[first day of month, first day of next month)`.
    pub period: Option<MonthPeriod>,
    pub kind: Option<TransactionKind>,
    pub category_id: Option<String>,
}

impl Engine {
    /// Lists transactions newest first (by date, then by creation time),
    /// capped at [`MAX_LIST_LIMIT`] rows.
    pub async fn list_transactions(
        &self,
        filter: &TransactionListFilter,
    ) -> ResultEngine<Vec<Transaction>> {
        let mut query = transactions::Entity::find();

        if let Some(period) = filter.period {
            let (start, end) = period.bounds()?;
            query = query
                .filter(transactions::Column::Date.gte(start))
                .filter(transactions::Column::Date.lt(end));
        }
        if let Some(kind) = filter.kind {
            query = query.filter(transactions::Column::Kind.eq(kind.as_str()));
        }
        if let Some(category_id) = filter.category_id.as_deref() {
            let category_id = category_id.trim();
            // Stored ids are lowercase hyphenated; ids that do not parse match nothing.
            let category_id = Uuid::parse_str(category_id)
                .map(|id| id.to_string())
                .unwrap_or_else(|_| category_id.to_string());
            query = query.filter(transactions::Column::CategoryId.eq(category_id));
        }

        query
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::CreatedAt)
            .limit(MAX_LIST_LIMIT)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    /// Return a single transaction.
    pub async fn transaction(&self, transaction_id: &str) -> ResultEngine<Transaction> {
        let id = parse_uuid(transaction_id, "Transaction")?;
        let model = transactions::Entity::find_by_id(id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("Transaction".to_string()))?;
        Transaction::try_from(model)
    }

    /// Record a new transaction against an existing category.
    pub async fn create_transaction(&self, cmd: CreateTransactionCmd) -> ResultEngine<Transaction> {
        validate_amount(cmd.amount)?;

        with_tx!(self, |db_tx| {
            let category_id = Self::require_category(&db_tx, &cmd.category_id).await?;
            let tx = Transaction::new(
                cmd.kind,
                cmd.amount,
                category_id,
                cmd.description.clone(),
                cmd.date,
            )?;
            transactions::ActiveModel::from(&tx).insert(&db_tx).await?;
            tracing::debug!(id = %tx.id, kind = tx.kind.as_str(), "transaction created");
            Ok(tx)
        })
    }

    /// Updates the supplied fields of a transaction.
    ///
    /// A new `category_id` must name an existing category.
    pub async fn update_transaction(
        &self,
        transaction_id: &str,
        cmd: UpdateTransactionCmd,
    ) -> ResultEngine<Transaction> {
        if cmd.is_empty() {
            return Err(EngineError::EmptyUpdate);
        }
        if let Some(amount) = cmd.amount {
            validate_amount(amount)?;
        }

        with_tx!(self, |db_tx| {
            let category_id = match cmd.category_id.as_deref() {
                Some(raw) => Some(Self::require_category(&db_tx, raw).await?),
                None => None,
            };

            let id = parse_uuid(transaction_id, "Transaction")?;
            let model = transactions::Entity::find_by_id(id.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("Transaction".to_string()))?;

            let mut active: transactions::ActiveModel = model.into();
            if let Some(kind) = cmd.kind {
                active.kind = ActiveValue::Set(kind.as_str().to_string());
            }
            if let Some(amount) = cmd.amount {
                active.amount = ActiveValue::Set(amount);
            }
            if let Some(category_id) = category_id {
                active.category_id = ActiveValue::Set(category_id.to_string());
            }
            if let Some(description) = cmd.description.as_deref() {
                // An explicit blank description clears it.
                let description = normalize_optional_text(Some(description)).unwrap_or_default();
                active.description = ActiveValue::Set(description);
            }
            if let Some(date) = cmd.date {
                active.date = ActiveValue::Set(date);
            }

            let updated = active.update(&db_tx).await?;
            tracing::debug!(id = %id, "transaction updated");
            Transaction::try_from(updated)
        })
    }

    /// Delete a transaction by id.
    pub async fn delete_transaction(&self, transaction_id: &str) -> ResultEngine<()> {
        let id = parse_uuid(transaction_id, "Transaction")?;
        let result = transactions::Entity::delete_by_id(id.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound("Transaction".to_string()));
        }
        tracing::debug!(id = %id, "transaction deleted");
        Ok(())
    }

    /// Resolve a client-supplied category id, failing with
    /// [`EngineError::UnknownCategory`] when it does not name a stored row.
    async fn require_category(db_tx: &DatabaseTransaction, raw: &str) -> ResultEngine<Uuid> {
        let unknown = || EngineError::UnknownCategory(raw.trim().to_string());
        let id = parse_uuid(raw, "Category").map_err(|_| unknown())?;
        categories::Entity::find_by_id(id.to_string())
            .one(db_tx)
            .await?
            .ok_or_else(unknown)?;
        Ok(id)
    }
}
