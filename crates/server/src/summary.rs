//! Summary API endpoints

use api_types::summary::{
    BudgetStatus, CategoryBreakdown, MonthQuery, MonthTotals, MonthlySummary, YearQuery,
    YearlySummary,
};
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{ServerError, map_kind, server::ServerState};

/// Handle requests for the totals of one month.
pub async fn monthly(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthlySummary>, ServerError> {
    let summary = state.engine.monthly_summary(query.year, query.month).await?;

    let category_breakdown = summary
        .category_breakdown
        .into_iter()
        .map(|entry| CategoryBreakdown {
            category_id: entry.category_id.to_string(),
            category_name: entry.category_name,
            kind: map_kind(entry.kind),
            total: entry.total,
            budget_limit: entry.budget_limit,
            color: entry.color,
        })
        .collect();

    Ok(Json(MonthlySummary {
        month: summary.month,
        year: summary.year,
        total_income: summary.total_income,
        total_expenses: summary.total_expenses,
        balance: summary.balance,
        category_breakdown,
    }))
}

/// Handle requests for the month-by-month totals of one year.
pub async fn yearly(
    State(state): State<ServerState>,
    Query(query): Query<YearQuery>,
) -> Result<Json<YearlySummary>, ServerError> {
    let summary = state.engine.yearly_summary(query.year).await?;

    let monthly_data = summary
        .months
        .into_iter()
        .map(|m| MonthTotals {
            month: m.month,
            income: m.income,
            expenses: m.expenses,
            balance: m.balance,
        })
        .collect();

    Ok(Json(YearlySummary {
        year: summary.year,
        monthly_data,
        total_income: summary.total_income,
        total_expenses: summary.total_expenses,
    }))
}

/// Handle requests for the budget status of every expense category.
pub async fn budget_status(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<BudgetStatus>>, ServerError> {
    let status = state
        .engine
        .budget_status(query.year, query.month)
        .await?
        .into_iter()
        .map(|s| BudgetStatus {
            category_id: s.category_id.to_string(),
            category_name: s.category_name,
            budget_limit: s.budget_limit,
            spent: s.spent,
            remaining: s.remaining,
            percentage: s.percentage,
            over_budget: s.over_budget,
            color: s.color,
        })
        .collect();

    Ok(Json(status))
}
