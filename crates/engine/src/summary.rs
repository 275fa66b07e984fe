//! Reporting over stored transactions: monthly and yearly roll-ups and the
//! per-category budget status.
//!
//! Everything here is plain arithmetic over rows already loaded from the
//! store, so it can be tested without a database. Amounts are summed as
//! `f64` without rounding.

use std::collections::HashMap;

use chrono::Datelike;
use uuid::Uuid;

use crate::{Category, Transaction, TransactionKind, categories::DEFAULT_COLOR, period::MonthPeriod};

/// Name reported for transactions whose category no longer exists.
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";

/// Sum of one category's transactions over a month.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category_id: Uuid,
    pub category_name: String,
    pub kind: TransactionKind,
    pub total: f64,
    pub budget_limit: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub category_breakdown: Vec<CategoryTotal>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonthTotals {
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct YearlySummary {
    pub year: i32,
    /// Always twelve entries, January first.
    pub months: Vec<MonthTotals>,
    pub total_income: f64,
    pub total_expenses: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetStatus {
    pub category_id: Uuid,
    pub category_name: String,
    pub budget_limit: f64,
    pub spent: f64,
    pub remaining: f64,
    /// `spent / budget_limit * 100`, capped at 100. Zero for unlimited
    /// categories.
    pub percentage: f64,
    pub over_budget: bool,
    pub color: String,
}

impl BudgetStatus {
    fn new(category: &Category, spent: f64) -> Self {
        let budget_limit = category.budget_limit;
        let percentage = if category.has_budget() {
            spent / budget_limit * 100.0
        } else {
            0.0
        };

        Self {
            category_id: category.id,
            category_name: category.name.clone(),
            budget_limit,
            spent,
            remaining: (budget_limit - spent).max(0.0),
            percentage: percentage.min(100.0),
            over_budget: category.has_budget() && spent > budget_limit,
            color: category.color.clone(),
        }
    }
}

/// Totals for `period`, with a breakdown for every category that has at least
/// one transaction in it.
///
/// Transactions outside `period` are ignored.
pub fn monthly_summary(
    period: MonthPeriod,
    transactions: &[Transaction],
    categories: &[Category],
) -> MonthlySummary {
    let by_id: HashMap<Uuid, &Category> = categories.iter().map(|c| (c.id, c)).collect();

    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut per_category: HashMap<Uuid, f64> = HashMap::new();

    for tx in transactions.iter().filter(|tx| period.contains(tx.date)) {
        match tx.kind {
            TransactionKind::Income => total_income += tx.amount,
            TransactionKind::Expense => total_expenses += tx.amount,
        }
        *per_category.entry(tx.category_id).or_insert(0.0) += tx.amount;
    }

    let mut category_breakdown: Vec<CategoryTotal> = per_category
        .into_iter()
        .map(|(category_id, total)| match by_id.get(&category_id) {
            Some(category) => CategoryTotal {
                category_id,
                category_name: category.name.clone(),
                kind: category.kind,
                total,
                budget_limit: category.budget_limit,
                color: category.color.clone(),
            },
            None => CategoryTotal {
                category_id,
                category_name: UNKNOWN_CATEGORY_NAME.to_string(),
                kind: TransactionKind::Expense,
                total,
                budget_limit: 0.0,
                color: DEFAULT_COLOR.to_string(),
            },
        })
        .collect();
    category_breakdown.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category_name.cmp(&b.category_name))
    });

    MonthlySummary {
        year: period.year(),
        month: period.month(),
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        category_breakdown,
    }
}

/// Income and expenses for each month of `year`, plus the yearly totals.
///
/// The yearly totals are the sums of the monthly figures.
pub fn yearly_summary(year: i32, transactions: &[Transaction]) -> YearlySummary {
    let mut months: Vec<MonthTotals> = (1..=12)
        .map(|month| MonthTotals {
            month,
            ..Default::default()
        })
        .collect();

    for tx in transactions.iter().filter(|tx| tx.date.year() == year) {
        let totals = &mut months[tx.date.month0() as usize];
        match tx.kind {
            TransactionKind::Income => totals.income += tx.amount,
            TransactionKind::Expense => totals.expenses += tx.amount,
        }
    }

    for totals in &mut months {
        totals.balance = totals.income - totals.expenses;
    }

    YearlySummary {
        year,
        total_income: months.iter().map(|m| m.income).sum(),
        total_expenses: months.iter().map(|m| m.expenses).sum(),
        months,
    }
}

/// Spending against the limit of every expense category, including the ones
/// with nothing spent in `period`.
///
/// Only expense transactions in `period` count as spending. The output keeps
/// the order of `categories`.
pub fn budget_status(
    period: MonthPeriod,
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<BudgetStatus> {
    let mut spent: HashMap<Uuid, f64> = HashMap::new();
    for tx in transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense && period.contains(tx.date))
    {
        *spent.entry(tx.category_id).or_insert(0.0) += tx.amount;
    }

    categories
        .iter()
        .filter(|category| category.kind == TransactionKind::Expense)
        .map(|category| BudgetStatus::new(category, spent.get(&category.id).copied().unwrap_or(0.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn category(name: &str, kind: TransactionKind, budget_limit: f64) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            budget_limit,
            color: "#123456".to_string(),
            created_at: Utc::now(),
        }
    }

    fn tx(kind: TransactionKind, amount: f64, category: &Category, date: (i32, u32, u32)) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            kind,
            amount,
            category_id: category.id,
            description: String::new(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn march() -> MonthPeriod {
        MonthPeriod::new(2024, 3).unwrap()
    }

    #[test]
    fn salary_and_rent_month() {
        let salary = category("Salary", TransactionKind::Income, 0.0);
        let rent = category("Rent", TransactionKind::Expense, 1500.0);
        let txs = vec![
            tx(TransactionKind::Income, 1000.0, &salary, (2024, 3, 1)),
            tx(TransactionKind::Expense, 250.0, &rent, (2024, 3, 5)),
        ];
        let categories = vec![salary.clone(), rent.clone()];

        let summary = monthly_summary(march(), &txs, &categories);
        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.total_expenses, 250.0);
        assert_eq!(summary.balance, 750.0);
        assert_eq!(summary.category_breakdown.len(), 2);
        assert_eq!(summary.category_breakdown[0].category_name, "Salary");
        assert_eq!(summary.category_breakdown[1].total, 250.0);

        let status = budget_status(march(), &txs, &categories);
        assert_eq!(status.len(), 1);
        let rent_status = &status[0];
        assert_eq!(rent_status.category_name, "Rent");
        assert_eq!(rent_status.spent, 250.0);
        assert_eq!(rent_status.remaining, 1250.0);
        assert!((rent_status.percentage - 16.666_666).abs() < 0.001);
        assert!(!rent_status.over_budget);
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let salary = category("Salary", TransactionKind::Income, 0.0);
        let food = category("Food", TransactionKind::Expense, 100.0);
        let txs = vec![
            tx(TransactionKind::Income, 10.25, &salary, (2024, 3, 2)),
            tx(TransactionKind::Expense, 99.5, &food, (2024, 3, 3)),
            tx(TransactionKind::Expense, 0.75, &food, (2024, 3, 31)),
        ];
        let summary = monthly_summary(march(), &txs, &[salary, food]);
        assert_eq!(summary.total_income - summary.total_expenses, summary.balance);
        assert!(summary.balance < 0.0);
    }

    #[test]
    fn transactions_outside_the_month_are_ignored() {
        let food = category("Food", TransactionKind::Expense, 100.0);
        let txs = vec![
            tx(TransactionKind::Expense, 5.0, &food, (2024, 2, 29)),
            tx(TransactionKind::Expense, 7.0, &food, (2024, 4, 1)),
        ];
        let categories = vec![food];
        let summary = monthly_summary(march(), &txs, &categories);
        assert_eq!(summary.total_expenses, 0.0);
        assert!(summary.category_breakdown.is_empty());

        // Budget status still lists the category with nothing spent.
        let status = budget_status(march(), &txs, &categories);
        assert_eq!(status.len(), 1);
        assert_eq!(status[0].spent, 0.0);
        assert_eq!(status[0].remaining, 100.0);
    }

    #[test]
    fn deleted_category_is_reported_as_unknown_expense() {
        let gone = category("Gone", TransactionKind::Income, 50.0);
        let txs = vec![tx(TransactionKind::Income, 20.0, &gone, (2024, 3, 10))];

        let summary = monthly_summary(march(), &txs, &[]);
        let entry = &summary.category_breakdown[0];
        assert_eq!(entry.category_id, gone.id);
        assert_eq!(entry.category_name, UNKNOWN_CATEGORY_NAME);
        assert_eq!(entry.kind, TransactionKind::Expense);
        assert_eq!(entry.budget_limit, 0.0);
        assert_eq!(entry.color, DEFAULT_COLOR);
    }

    #[test]
    fn percentage_is_capped_and_over_budget_flagged() {
        let fun = category("Fun", TransactionKind::Expense, 200.0);
        let txs = vec![
            tx(TransactionKind::Expense, 150.0, &fun, (2024, 3, 1)),
            tx(TransactionKind::Expense, 850.0, &fun, (2024, 3, 2)),
        ];
        let status = budget_status(march(), &txs, &[fun]);
        assert_eq!(status[0].spent, 1000.0);
        assert_eq!(status[0].percentage, 100.0);
        assert_eq!(status[0].remaining, 0.0);
        assert!(status[0].over_budget);
    }

    #[test]
    fn unlimited_category_is_never_over_budget() {
        let misc = category("Misc", TransactionKind::Expense, 0.0);
        let txs = vec![tx(TransactionKind::Expense, 1_000_000.0, &misc, (2024, 3, 1))];
        let status = budget_status(march(), &txs, &[misc]);
        assert_eq!(status[0].percentage, 0.0);
        assert_eq!(status[0].remaining, 0.0);
        assert!(!status[0].over_budget);
    }

    #[test]
    fn income_does_not_count_as_spending() {
        let food = category("Food", TransactionKind::Expense, 100.0);
        let txs = vec![tx(TransactionKind::Income, 40.0, &food, (2024, 3, 1))];
        let status = budget_status(march(), &txs, &[food]);
        assert_eq!(status[0].spent, 0.0);
    }

    #[test]
    fn yearly_totals_are_sums_of_months() {
        let salary = category("Salary", TransactionKind::Income, 0.0);
        let rent = category("Rent", TransactionKind::Expense, 1500.0);
        let txs = vec![
            tx(TransactionKind::Income, 1000.0, &salary, (2024, 1, 31)),
            tx(TransactionKind::Income, 1200.0, &salary, (2024, 12, 31)),
            tx(TransactionKind::Expense, 300.0, &rent, (2024, 6, 15)),
            tx(TransactionKind::Income, 999.0, &salary, (2025, 1, 1)),
        ];

        let summary = yearly_summary(2024, &txs);
        assert_eq!(summary.months.len(), 12);
        assert_eq!(summary.months[0].income, 1000.0);
        assert_eq!(summary.months[11].income, 1200.0);
        assert_eq!(summary.months[5].balance, -300.0);
        assert_eq!(summary.months[2], MonthTotals { month: 3, ..Default::default() });

        let income: f64 = summary.months.iter().map(|m| m.income).sum();
        assert_eq!(summary.total_income, income);
        assert_eq!(summary.total_income, 2200.0);
        assert_eq!(summary.total_expenses, 300.0);
    }
}
