use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Pool, Postgres, Transaction, postgres::PgPoolOptions};

use crate::{
    conf::settings,
    pkg::internal::store::{memory::MemStore, pg::PgStore, Store},
    prelude::Result,
};

pub fn db_pool(url: &str) -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(url)?;
    Ok(pool)
}

#[async_trait]
pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>>;
}

#[async_trait]
impl GetTxn for PgPool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let store: Arc<dyn Store> = match settings.database_url.as_deref() {
            Some(url) => Arc::new(PgStore::new(Arc::new(db_pool(url)?))),
            None => {
                tracing::warn!("database_url not set, serving from the in-memory store");
                Arc::new(MemStore::new())
            }
        };
        Ok(AppState { store })
    }

    pub fn with_store(store: Arc<dyn Store>) -> AppState {
        AppState { store }
    }
}
