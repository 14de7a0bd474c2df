//! Database service facade bundling the repositories behind one pool

use sqlx::PgPool;

use super::connection::{create_pool, health_check, run_migrations, DatabaseConfig, DatabasePool};
use super::repositories::{EventRepository, RouteRepository};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub events: EventRepository,
    pub routes: RouteRepository,
}

impl DatabaseService {
    /// Connect, migrate, and wire up the repositories
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = create_pool(config).await?;
        run_migrations(&pool).await?;

        Ok(Self::from_pool(pool))
    }

    /// Build from an existing pool, e.g. one shared with test fixtures
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            routes: RouteRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<()> {
        health_check(&self.pool).await
    }
}
