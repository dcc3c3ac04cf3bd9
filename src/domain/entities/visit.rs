//! Visit entity representing one traversal of a redirect.

use chrono::{DateTime, Utc};

use crate::domain::gateways::Location;

/// A recorded redirect traversal, enriched with best-effort geolocation data.
///
/// Visits are append-only: never updated or deleted once stored.
#[derive(Debug, Clone)]
pub struct Visit {
    pub ip_address: String,
    pub country: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Visit {
    /// Creates a new Visit instance.
    pub fn new(
        ip_address: String,
        country: Option<String>,
        region_name: Option<String>,
        city: Option<String>,
        isp: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ip_address,
            country,
            region_name,
            city,
            isp,
            created_at,
        }
    }
}

/// Input data for recording a visit against an existing redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub redirect_id: i64,
    pub ip_address: String,
    pub country: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
}

impl NewVisit {
    /// Builds a visit from a geolocation result.
    pub fn from_location(redirect_id: i64, ip_address: String, location: Location) -> Self {
        Self {
            redirect_id,
            ip_address,
            country: location.country,
            region_name: location.region_name,
            city: location.city,
            isp: location.isp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_visit_from_location() {
        let location = Location {
            country: Some("Canada".to_string()),
            region_name: Some("Ontario".to_string()),
            city: Some("Toronto".to_string()),
            isp: Some("Rogers".to_string()),
        };

        let visit = NewVisit::from_location(7, "1.2.3.4".to_string(), location);

        assert_eq!(visit.redirect_id, 7);
        assert_eq!(visit.ip_address, "1.2.3.4");
        assert_eq!(visit.country.as_deref(), Some("Canada"));
        assert_eq!(visit.region_name.as_deref(), Some("Ontario"));
        assert_eq!(visit.city.as_deref(), Some("Toronto"));
        assert_eq!(visit.isp.as_deref(), Some("Rogers"));
    }

    #[test]
    fn test_new_visit_from_empty_location() {
        let visit = NewVisit::from_location(1, "::1".to_string(), Location::default());

        assert!(visit.country.is_none());
        assert!(visit.region_name.is_none());
        assert!(visit.city.is_none());
        assert!(visit.isp.is_none());
    }
}
