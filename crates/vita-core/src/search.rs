//! Professional directory search.

use crate::domain::{EntityId, Professional};
use crate::geo::{Coordinates, within_radius};

/// Circle around a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFilter {
    pub center: Coordinates,
    pub radius_km: f64,
}

/// Filters for a directory search. An empty query matches everyone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfessionalQuery {
    pub specialty_id: Option<EntityId>,
    pub location: Option<LocationFilter>,
}

impl ProfessionalQuery {
    /// Apply the filters to `professionals`.
    ///
    /// With a location, professionals lacking coordinates are dropped and the
    /// result is ordered by ascending distance from the center (equal
    /// distances keep input order). Without one, input order is preserved.
    pub fn apply<'a>(
        &self,
        professionals: impl IntoIterator<Item = &'a Professional>,
    ) -> Vec<Professional> {
        let matching = professionals
            .into_iter()
            .filter(|p| self.specialty_id.is_none_or(|id| p.specialty_id == id));

        let Some(location) = self.location else {
            return matching.cloned().collect();
        };

        let mut ranked: Vec<(f64, &Professional)> = matching
            .filter_map(|p| {
                within_radius(location.center, p.coordinates()?, location.radius_km)
                    .map(|distance| (distance, p))
            })
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        ranked.into_iter().map(|(_, p)| p.clone()).collect()
    }
}
