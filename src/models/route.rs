//! Route model
//!
//! Routes are immutable reference data describing hiking and outdoor trails,
//! including the difficulty metadata the filter engine operates on.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Overall route difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "difficulty", rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Alpine hiking technical grade, T1 (easiest) through T6 (hardest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "technical_grade")]
pub enum TechnicalGrade {
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
}

impl TechnicalGrade {
    pub fn label(self) -> &'static str {
        match self {
            TechnicalGrade::T1 => "Hiking",
            TechnicalGrade::T2 => "Mountain hiking",
            TechnicalGrade::T3 => "Demanding mountain hiking",
            TechnicalGrade::T4 => "Alpine hiking",
            TechnicalGrade::T5 => "Demanding alpine hiking",
            TechnicalGrade::T6 => "Difficult alpine hiking",
        }
    }
}

/// Scenic highlight tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Highlight {
    Lake,
    River,
    Waterfall,
    Coastline,
    Forest,
    Historical,
    Ruins,
    Viewpoint,
}

impl Highlight {
    pub fn label(self) -> &'static str {
        match self {
            Highlight::Lake => "Lakes",
            Highlight::River => "Rivers",
            Highlight::Waterfall => "Waterfalls",
            Highlight::Coastline => "Coastline",
            Highlight::Forest => "Forests",
            Highlight::Historical => "Historical sites",
            Highlight::Ruins => "Ruins",
            Highlight::Viewpoint => "Viewpoints",
        }
    }
}

/// Terrain and shape feature tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteFeature {
    ViaFerrata,
    Climbing,
    Canyoning,
    Ridge,
    MountainPass,
    Scrambling,
    AvoidsRoads,
    Circular,
    PointToPoint,
}

impl RouteFeature {
    pub fn label(self) -> &'static str {
        match self {
            RouteFeature::ViaFerrata => "Via Ferrata",
            RouteFeature::Climbing => "Climbing sections",
            RouteFeature::Canyoning => "Canyoning",
            RouteFeature::Ridge => "Ridges",
            RouteFeature::MountainPass => "Mountain passes",
            RouteFeature::Scrambling => "Scrambling",
            RouteFeature::AvoidsRoads => "Avoids main roads",
            RouteFeature::Circular => "Circular route",
            RouteFeature::PointToPoint => "Point-to-point",
        }
    }
}

/// On-route facility tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facility {
    Restaurant,
    MountainHut,
    Refuge,
    WaterSource,
    CableCar,
}

impl Facility {
    pub fn label(self) -> &'static str {
        match self {
            Facility::Restaurant => "Restaurants",
            Facility::MountainHut => "Mountain huts",
            Facility::Refuge => "Refuges",
            Facility::WaterSource => "Water sources",
            Facility::CableCar => "Cable car access",
        }
    }
}

/// A named hiking/outdoor trail with fixed descriptive and difficulty metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub distance_km: f64,
    pub duration_hours: f64,
    pub elevation_gain_m: i32,
    pub difficulty: Difficulty,
    pub technical_grade: TechnicalGrade,
    #[sqlx(json)]
    pub highlights: Vec<Highlight>,
    #[sqlx(json)]
    pub features: Vec<RouteFeature>,
    #[sqlx(json)]
    pub facilities: Vec<Facility>,
    pub rating: f32,
    pub review_count: i32,
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_serde_names() {
        assert_eq!(
            serde_json::to_string(&RouteFeature::ViaFerrata).unwrap(),
            "\"via-ferrata\""
        );
        assert_eq!(
            serde_json::to_string(&Facility::MountainHut).unwrap(),
            "\"mountain-hut\""
        );
        assert_eq!(
            serde_json::to_string(&Difficulty::Beginner).unwrap(),
            "\"beginner\""
        );
        assert_eq!(
            serde_json::to_string(&TechnicalGrade::T3).unwrap(),
            "\"T3\""
        );
    }

    #[test]
    fn test_grade_ordering() {
        assert!(TechnicalGrade::T1 < TechnicalGrade::T6);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TechnicalGrade::T2.label(), "Mountain hiking");
        assert_eq!(Highlight::Viewpoint.label(), "Viewpoints");
    }
}
