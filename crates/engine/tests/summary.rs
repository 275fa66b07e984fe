use engine::{EngineError, TransactionKind};

mod common;

use common::{date, engine_with_db, expense_category, income_category, record};

#[tokio::test]
async fn salary_and_rent_month() {
    let (engine, _db) = engine_with_db().await;
    let salary = income_category(&engine, "Salary").await;
    let rent = expense_category(&engine, "Rent", 1500.0).await;
    let food = expense_category(&engine, "Food", 500.0).await;

    record(&engine, TransactionKind::Income, 1000.0, &salary, date(2024, 5, 1)).await;
    record(&engine, TransactionKind::Expense, 250.0, &rent, date(2024, 5, 3)).await;
    // Outside the month on both sides.
    record(&engine, TransactionKind::Expense, 80.0, &rent, date(2024, 4, 30)).await;
    record(&engine, TransactionKind::Expense, 90.0, &rent, date(2024, 6, 1)).await;

    let summary = engine.monthly_summary(2024, 5).await.unwrap();
    assert_eq!(summary.total_income, 1000.0);
    assert_eq!(summary.total_expenses, 250.0);
    assert_eq!(summary.balance, 750.0);
    assert_eq!(summary.category_breakdown.len(), 2);
    assert!(
        summary
            .category_breakdown
            .iter()
            .all(|entry| entry.category_id != food.id)
    );
    let rent_entry = summary
        .category_breakdown
        .iter()
        .find(|entry| entry.category_id == rent.id)
        .unwrap();
    assert_eq!(rent_entry.category_name, "Rent");
    assert_eq!(rent_entry.total, 250.0);
    assert_eq!(rent_entry.budget_limit, 1500.0);

    let status = engine.budget_status(2024, 5).await.unwrap();
    let names: Vec<&str> = status.iter().map(|s| s.category_name.as_str()).collect();
    assert_eq!(names, vec!["Food", "Rent"]);

    let food_status = &status[0];
    assert_eq!(food_status.spent, 0.0);
    assert_eq!(food_status.remaining, 500.0);

    let rent_status = &status[1];
    assert_eq!(rent_status.spent, 250.0);
    assert_eq!(rent_status.remaining, 1250.0);
    assert!((rent_status.percentage - 16.67).abs() < 0.01);
    assert!(!rent_status.over_budget);
}

#[tokio::test]
async fn over_budget_is_clamped() {
    let (engine, _db) = engine_with_db().await;
    let fun = expense_category(&engine, "Fun", 100.0).await;
    record(&engine, TransactionKind::Expense, 180.0, &fun, date(2024, 8, 12)).await;

    let status = engine.budget_status(2024, 8).await.unwrap();
    assert_eq!(status[0].percentage, 100.0);
    assert_eq!(status[0].remaining, 0.0);
    assert!(status[0].over_budget);
}

#[tokio::test]
async fn yearly_summary_rolls_up_months() {
    let (engine, _db) = engine_with_db().await;
    let salary = income_category(&engine, "Salary").await;
    let rent = expense_category(&engine, "Rent", 1500.0).await;

    record(&engine, TransactionKind::Income, 2000.0, &salary, date(2024, 1, 15)).await;
    record(&engine, TransactionKind::Income, 2100.0, &salary, date(2024, 12, 31)).await;
    record(&engine, TransactionKind::Expense, 1500.0, &rent, date(2024, 12, 1)).await;
    record(&engine, TransactionKind::Income, 5000.0, &salary, date(2025, 1, 1)).await;
    record(&engine, TransactionKind::Income, 5000.0, &salary, date(2023, 12, 31)).await;

    let summary = engine.yearly_summary(2024).await.unwrap();
    assert_eq!(summary.year, 2024);
    assert_eq!(summary.months.len(), 12);
    assert_eq!(summary.months[0].income, 2000.0);
    assert_eq!(summary.months[11].income, 2100.0);
    assert_eq!(summary.months[11].expenses, 1500.0);
    assert_eq!(summary.months[11].balance, 600.0);

    let monthly_income: f64 = summary.months.iter().map(|m| m.income).sum();
    assert_eq!(summary.total_income, monthly_income);
    assert_eq!(summary.total_income, 4100.0);
    assert_eq!(summary.total_expenses, 1500.0);
}

#[tokio::test]
async fn invalid_month_is_rejected() {
    let (engine, _db) = engine_with_db().await;
    assert!(matches!(
        engine.monthly_summary(2024, 13).await.unwrap_err(),
        EngineError::InvalidPeriod(_)
    ));
    assert!(matches!(
        engine.budget_status(2024, 0).await.unwrap_err(),
        EngineError::InvalidPeriod(_)
    ));
}
