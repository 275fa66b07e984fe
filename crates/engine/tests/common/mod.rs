#![allow(dead_code)]

use chrono::NaiveDate;
use sea_orm::{Database, DatabaseConnection};

use engine::{Category, CreateCategoryCmd, CreateTransactionCmd, Engine, Transaction, TransactionKind};
use migration::MigratorTrait;

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub async fn expense_category(engine: &Engine, name: &str, budget_limit: f64) -> Category {
    engine
        .create_category(
            CreateCategoryCmd::new(name, TransactionKind::Expense).budget_limit(budget_limit),
        )
        .await
        .unwrap()
}

pub async fn income_category(engine: &Engine, name: &str) -> Category {
    engine
        .create_category(CreateCategoryCmd::new(name, TransactionKind::Income))
        .await
        .unwrap()
}

pub async fn record(
    engine: &Engine,
    kind: TransactionKind,
    amount: f64,
    category: &Category,
    on: NaiveDate,
) -> Transaction {
    engine
        .create_transaction(CreateTransactionCmd::new(
            kind,
            amount,
            category.id.to_string(),
            on,
        ))
        .await
        .unwrap()
}
