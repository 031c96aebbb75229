use error_stack::{Result, ResultExt};
use std::sync::Arc;
use thiserror::Error;

use crate::{config, database};

#[derive(Debug, Clone)]
pub struct App {
    pub config: Arc<config::Server>,
    pub db: database::Pool,
}

#[derive(Debug, Error)]
#[error("Failed to initialize App struct")]
pub struct AppError;

impl App {
    #[tracing::instrument]
    pub async fn new(cfg: config::Server) -> Result<Self, AppError> {
        let db = database::Pool::new(&cfg.db).await.change_context(AppError)?;

        Ok(Self {
            config: Arc::new(cfg),
            db,
        })
    }

    #[tracing::instrument(skip_all)]
    pub async fn db_conn(&self) -> Result<database::PoolConnection, database::Error> {
        Ok(self.db.get().await?)
    }
}
