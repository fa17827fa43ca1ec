use std::sync::Arc;

use budgify_core::{
    budget::{BudgetRepositoryTrait, BudgetService, BudgetServiceTrait},
    expenses::{ExpenseRepositoryTrait, ExpenseService, ExpenseServiceTrait},
    recurring::{RecurringCostRepositoryTrait, RecurringCostService, RecurringCostServiceTrait},
    users::{UserRepositoryTrait, UserService, UserServiceTrait},
};
use budgify_storage_memory::MemoryStore;
use budgify_storage_sqlite::{
    db, BudgetRepository, ExpenseRepository, RecurringCostRepository, UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::{AuthConfig, AuthManager};
use crate::config::{Config, StorageKind};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub recurring_service: Arc<dyn RecurringCostServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("BUDGIFY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// The four repositories a set of services is built from.
struct Repositories {
    users: Arc<dyn UserRepositoryTrait>,
    expenses: Arc<dyn ExpenseRepositoryTrait>,
    recurring: Arc<dyn RecurringCostRepositoryTrait>,
    budget: Arc<dyn BudgetRepositoryTrait>,
}

fn sqlite_repositories(config: &Config) -> anyhow::Result<Repositories> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    Ok(Repositories {
        users: Arc::new(UserRepository::new(pool.clone(), writer.clone())),
        expenses: Arc::new(ExpenseRepository::new(pool.clone(), writer.clone())),
        recurring: Arc::new(RecurringCostRepository::new(pool.clone(), writer.clone())),
        budget: Arc::new(BudgetRepository::new(pool, writer)),
    })
}

fn memory_repositories() -> Repositories {
    tracing::warn!("Using in-memory storage; all data is lost on shutdown");
    let store = Arc::new(MemoryStore::new());
    Repositories {
        users: store.clone(),
        expenses: store.clone(),
        recurring: store.clone(),
        budget: store,
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let repos = match config.storage {
        StorageKind::Sqlite => sqlite_repositories(config)?,
        StorageKind::Memory => memory_repositories(),
    };

    let user_service = Arc::new(UserService::new(repos.users));
    let expense_service = Arc::new(ExpenseService::new(repos.expenses.clone()));
    let recurring_service = Arc::new(RecurringCostService::new(repos.recurring.clone()));
    let budget_service = Arc::new(BudgetService::new(
        repos.budget,
        repos.expenses,
        repos.recurring,
    ));

    let auth_config = AuthConfig::from_secret(config.jwt_secret.as_deref(), config.token_ttl)?;
    let auth = Arc::new(AuthManager::new(&auth_config)?);

    Ok(Arc::new(AppState {
        user_service,
        expense_service,
        recurring_service,
        budget_service,
        auth,
    }))
}
