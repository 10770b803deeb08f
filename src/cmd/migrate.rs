use crate::{conf::settings, pkg::server::state::GetTxn, prelude::{Error, Result}};
use sqlx::{migrate::Migrator, postgres::PgPoolOptions};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply() -> Result<()> {
    let url = settings.database_url.as_deref().ok_or_else(|| {
        Error::Configuration("database_url must be set to apply migrations".into())
    })?;
    let pool = PgPoolOptions::new().connect(url).await?;

    tracing::debug!("connected to db");
    let mut tx = pool.begin_txn().await?;
    MIGRATOR.run(&mut *tx).await?;
    tx.commit().await?;

    println!("Migrations applied successfully");
    Ok(())
}
