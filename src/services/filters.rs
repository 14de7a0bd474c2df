//! Route filter and sort engine
//!
//! Pure derivation: given the full catalog, a filter configuration, and a
//! sort option, produce the displayed list. Nothing here touches storage.

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, Facility, Highlight, Route, RouteFeature, TechnicalGrade};

pub const DISTANCE_RANGE_DEFAULT: (f64, f64) = (0.0, 100.0);
pub const DURATION_RANGE_DEFAULT: (f64, f64) = (0.0, 24.0);

/// Filter configuration. Empty selections place no constraint; within a tag
/// category any one match is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteFilters {
    pub difficulties: Vec<Difficulty>,
    pub technical_grades: Vec<TechnicalGrade>,
    pub distance_min: f64,
    pub distance_max: f64,
    pub duration_min: f64,
    pub duration_max: f64,
    pub highlights: Vec<Highlight>,
    pub features: Vec<RouteFeature>,
    pub facilities: Vec<Facility>,
}

impl Default for RouteFilters {
    fn default() -> Self {
        Self {
            difficulties: Vec::new(),
            technical_grades: Vec::new(),
            distance_min: DISTANCE_RANGE_DEFAULT.0,
            distance_max: DISTANCE_RANGE_DEFAULT.1,
            duration_min: DURATION_RANGE_DEFAULT.0,
            duration_max: DURATION_RANGE_DEFAULT.1,
            highlights: Vec::new(),
            features: Vec::new(),
            facilities: Vec::new(),
        }
    }
}

impl RouteFilters {
    /// Whether a single route passes every active constraint
    pub fn matches(&self, route: &Route) -> bool {
        if !self.difficulties.is_empty() && !self.difficulties.contains(&route.difficulty) {
            return false;
        }
        if !self.technical_grades.is_empty()
            && !self.technical_grades.contains(&route.technical_grade)
        {
            return false;
        }
        if route.distance_km < self.distance_min || route.distance_km > self.distance_max {
            return false;
        }
        if route.duration_hours < self.duration_min || route.duration_hours > self.duration_max {
            return false;
        }
        if !self.highlights.is_empty()
            && !route.highlights.iter().any(|h| self.highlights.contains(h))
        {
            return false;
        }
        if !self.features.is_empty() && !route.features.iter().any(|f| self.features.contains(f)) {
            return false;
        }
        if !self.facilities.is_empty()
            && !route.facilities.iter().any(|f| self.facilities.contains(f))
        {
            return false;
        }
        true
    }

    /// Count of non-default selections, shown as a badge next to the filter
    /// controls. Has no effect on matching.
    pub fn active_filter_count(&self) -> usize {
        let mut count = self.difficulties.len()
            + self.technical_grades.len()
            + self.highlights.len()
            + self.features.len()
            + self.facilities.len();
        if (self.distance_min, self.distance_max) != DISTANCE_RANGE_DEFAULT {
            count += 1;
        }
        if (self.duration_min, self.duration_max) != DURATION_RANGE_DEFAULT {
            count += 1;
        }
        count
    }

    /// Back to the defaults. The sort option lives outside the filter
    /// configuration and is untouched by a reset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sort applied after filtering. All sorts are stable: ties keep their
/// relative catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// By review count, descending
    #[default]
    Popular,
    /// By rating, descending
    Rating,
    DistanceAsc,
    DistanceDesc,
    /// By duration, ascending
    DurationAsc,
    /// By elevation gain, descending
    Elevation,
}

/// Routes passing the filter, in catalog order
pub fn filter_routes(routes: &[Route], filters: &RouteFilters) -> Vec<Route> {
    routes
        .iter()
        .filter(|route| filters.matches(route))
        .cloned()
        .collect()
}

/// Reorder in place. `sort_by` is stable, which the tie-order guarantee
/// relies on.
pub fn sort_routes(routes: &mut [Route], sort: SortOption) {
    match sort {
        SortOption::Popular => {
            routes.sort_by(|a, b| b.review_count.cmp(&a.review_count));
        }
        SortOption::Rating => {
            routes.sort_by(|a, b| (b.rating as f64).total_cmp(&(a.rating as f64)));
        }
        SortOption::DistanceAsc => {
            routes.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        }
        SortOption::DistanceDesc => {
            routes.sort_by(|a, b| b.distance_km.total_cmp(&a.distance_km));
        }
        SortOption::DurationAsc => {
            routes.sort_by(|a, b| a.duration_hours.total_cmp(&b.duration_hours));
        }
        SortOption::Elevation => {
            routes.sort_by(|a, b| b.elevation_gain_m.cmp(&a.elevation_gain_m));
        }
    }
}

/// Filter then sort, the whole derivation in one call
pub fn derive_route_list(routes: &[Route], filters: &RouteFilters, sort: SortOption) -> Vec<Route> {
    let mut result = filter_routes(routes, filters);
    sort_routes(&mut result, sort);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn route(
        name: &str,
        distance_km: f64,
        duration_hours: f64,
        elevation_gain_m: i32,
        difficulty: Difficulty,
        rating: f32,
        review_count: i32,
    ) -> Route {
        Route {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            distance_km,
            duration_hours,
            elevation_gain_m,
            difficulty,
            technical_grade: TechnicalGrade::T2,
            highlights: Vec::new(),
            features: Vec::new(),
            facilities: Vec::new(),
            rating,
            review_count,
            region: "Alps".to_string(),
        }
    }

    #[test]
    fn test_difficulty_selection_filters_out_non_matching() {
        let a = route("A", 3.0, 2.0, 100, Difficulty::Beginner, 4.0, 10);
        let b = route("B", 15.0, 6.0, 900, Difficulty::Advanced, 4.5, 30);
        let filters = RouteFilters {
            difficulties: vec![Difficulty::Beginner],
            ..Default::default()
        };

        let filtered = filter_routes(&[a.clone(), b], &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "A");
    }

    #[test]
    fn test_default_filters_pass_everything_and_count_zero() {
        let routes = vec![
            route("A", 3.0, 2.0, 100, Difficulty::Beginner, 4.0, 10),
            route("B", 15.0, 6.0, 900, Difficulty::Advanced, 4.5, 30),
            route("C", 8.0, 4.0, 400, Difficulty::Intermediate, 3.9, 20),
        ];
        let filters = RouteFilters::default();
        assert_eq!(filters.active_filter_count(), 0);

        let derived = derive_route_list(&routes, &filters, SortOption::Popular);
        let names: Vec<&str> = derived.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let a = route("A", 10.0, 4.0, 100, Difficulty::Beginner, 4.0, 10);
        let filters = RouteFilters {
            distance_min: 10.0,
            distance_max: 10.0,
            ..Default::default()
        };
        assert!(filters.matches(&a));
    }

    #[test]
    fn test_tag_category_uses_or_semantics() {
        let mut a = route("A", 3.0, 2.0, 100, Difficulty::Beginner, 4.0, 10);
        a.highlights = vec![Highlight::Waterfall];
        let filters = RouteFilters {
            highlights: vec![Highlight::Waterfall, Highlight::Viewpoint],
            ..Default::default()
        };
        assert!(filters.matches(&a));

        let b = route("B", 3.0, 2.0, 100, Difficulty::Beginner, 4.0, 10);
        assert!(!filters.matches(&b));
    }

    #[test]
    fn test_active_filter_count_includes_ranges() {
        let filters = RouteFilters {
            difficulties: vec![Difficulty::Beginner, Difficulty::Intermediate],
            distance_max: 20.0,
            ..Default::default()
        };
        // two difficulty selections plus the narrowed distance range
        assert_eq!(filters.active_filter_count(), 3);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filters = RouteFilters {
            difficulties: vec![Difficulty::Expert],
            duration_min: 2.0,
            ..Default::default()
        };
        filters.reset();
        assert_eq!(filters, RouteFilters::default());
    }

    #[test]
    fn test_sort_stability_on_ties() {
        let a = route("A", 5.0, 3.0, 200, Difficulty::Beginner, 4.0, 25);
        let b = route("B", 7.0, 3.5, 300, Difficulty::Beginner, 4.2, 25);
        let c = route("C", 2.0, 1.0, 50, Difficulty::Beginner, 3.8, 40);

        let mut routes = vec![a, b, c];
        sort_routes(&mut routes, SortOption::Popular);
        let names: Vec<&str> = routes.iter().map(|r| r.name.as_str()).collect();
        // C wins outright; A and B tie and keep their input order
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let routes = vec![
            route("A", 3.0, 2.0, 100, Difficulty::Beginner, 4.0, 10),
            route("B", 15.0, 6.0, 900, Difficulty::Advanced, 4.5, 30),
        ];
        let filters = RouteFilters {
            distance_max: 10.0,
            ..Default::default()
        };

        let once = filter_routes(&routes, &filters);
        let twice = filter_routes(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_duration_ascending_sort() {
        let mut routes = vec![
            route("A", 3.0, 5.0, 100, Difficulty::Beginner, 4.0, 10),
            route("B", 15.0, 2.0, 900, Difficulty::Advanced, 4.5, 30),
            route("C", 8.0, 3.5, 400, Difficulty::Intermediate, 3.9, 20),
        ];
        sort_routes(&mut routes, SortOption::DurationAsc);
        let names: Vec<&str> = routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }
}
