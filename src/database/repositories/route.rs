//! Route repository for catalog queries

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Route;
use crate::utils::errors::{Result, TrailBuddyError};

#[derive(Clone)]
pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the full route catalog, alphabetically by name
    pub async fn list_all(&self) -> Result<Vec<Route>> {
        let routes = sqlx::query_as::<_, Route>(
            r#"
            SELECT id, name, description, distance_km, duration_hours,
                   elevation_gain_m, difficulty, technical_grade,
                   highlights, features, facilities,
                   rating, review_count, region
            FROM routes
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    pub async fn find_by_id(&self, route_id: Uuid) -> Result<Option<Route>> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            SELECT id, name, description, distance_km, duration_hours,
                   elevation_gain_m, difficulty, technical_grade,
                   highlights, features, facilities,
                   rating, review_count, region
            FROM routes
            WHERE id = $1
            "#,
        )
        .bind(route_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(route)
    }

    /// Like `find_by_id` but treats a missing route as an error
    pub async fn get_by_id(&self, route_id: Uuid) -> Result<Route> {
        self.find_by_id(route_id)
            .await?
            .ok_or(TrailBuddyError::RouteNotFound { route_id })
    }

    /// Routes within a region, alphabetically by name
    pub async fn list_by_region(&self, region: &str) -> Result<Vec<Route>> {
        let routes = sqlx::query_as::<_, Route>(
            r#"
            SELECT id, name, description, distance_km, duration_hours,
                   elevation_gain_m, difficulty, technical_grade,
                   highlights, features, facilities,
                   rating, review_count, region
            FROM routes
            WHERE region = $1
            ORDER BY name ASC
            "#,
        )
        .bind(region)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }
}
