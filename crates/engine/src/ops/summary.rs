use chrono::NaiveDate;
use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{
    Category, ResultEngine, Transaction, TransactionKind, categories,
    period::{MonthPeriod, year_bounds},
    summary::{self, BudgetStatus, MonthlySummary, YearlySummary},
    transactions,
};

use super::Engine;

impl Engine {
    /// Income, expenses and per-category totals of one month.
    pub async fn monthly_summary(&self, year: i32, month: u32) -> ResultEngine<MonthlySummary> {
        let period = MonthPeriod::new(year, month)?;
        let (start, end) = period.bounds()?;

        let txs = self.transactions_between(start, end, None).await?;
        let categories = self.list_categories().await?;

        Ok(summary::monthly_summary(period, &txs, &categories))
    }

    /// Month-by-month income and expenses of one year.
    pub async fn yearly_summary(&self, year: i32) -> ResultEngine<YearlySummary> {
        let (start, end) = year_bounds(year)?;
        let txs = self.transactions_between(start, end, None).await?;

        Ok(summary::yearly_summary(year, &txs))
    }

    /// Spending of every expense category against its budget for one month.
    pub async fn budget_status(&self, year: i32, month: u32) -> ResultEngine<Vec<BudgetStatus>> {
        let period = MonthPeriod::new(year, month)?;
        let (start, end) = period.bounds()?;

        let txs = self
            .transactions_between(start, end, Some(TransactionKind::Expense))
            .await?;
        let categories = categories::Entity::find()
            .filter(categories::Column::Kind.eq(TransactionKind::Expense.as_str()))
            .order_by_asc(categories::Column::Name)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Category::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;

        Ok(summary::budget_status(period, &txs, &categories))
    }

    /// Every transaction dated in `[start, end)`, uncapped.
    async fn transactions_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        kind: Option<TransactionKind>,
    ) -> ResultEngine<Vec<Transaction>> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::Date.gte(start))
            .filter(transactions::Column::Date.lt(end));
        if let Some(kind) = kind {
            query = query.filter(transactions::Column::Kind.eq(kind.as_str()));
        }

        query
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }
}
