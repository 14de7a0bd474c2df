//! Database layer: connection pool, migrations, and repositories

pub mod connection;
pub mod repositories;
pub mod service;

pub use connection::{create_pool, health_check, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::{EventRepository, RouteRepository};
pub use service::DatabaseService;
