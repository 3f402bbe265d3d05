use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::OnceCell;

use std::time::Duration;

use crate::common::GeneralError;

static SHARED: OnceCell<Database> = OnceCell::const_new();

#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    /// Returns the process-wide database, opening the pool and running migrations on first use.
    ///
    /// Later calls return the same pool regardless of `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, GeneralError> {
        SHARED
            .get_or_try_init(|| Self::new(database_url))
            .await
            .cloned()
    }

    /// Opens a fresh pool. Connections are established lazily on first query.
    pub async fn new(database_url: &str) -> Result<Self, GeneralError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_lazy(database_url)?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        log::info!("Database migrations applied");

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}
