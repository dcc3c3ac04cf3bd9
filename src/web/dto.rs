//! Form input and JSON output shapes for the web layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::IdentifiedVisitor;

/// Fields submitted by the creation form. Missing fields are treated as empty.
#[derive(Debug, Deserialize)]
pub struct CreateRedirectForm {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub url: String,
}

/// Visit-shaped JSON returned by `/identify`.
///
/// Keys follow the stored visit record: `IPAddress` and `CreatedAt` keep their
/// capitalised names, location keys are camelCase. Missing location fields are
/// rendered as empty strings.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyResponse {
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
    pub country: String,
    pub region_name: String,
    pub city: String,
    pub isp: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

impl IdentifyResponse {
    pub fn new(visitor: IdentifiedVisitor, created_at: DateTime<Utc>) -> Self {
        let location = visitor.location;
        Self {
            ip_address: visitor.ip_address,
            country: location.country.unwrap_or_default(),
            region_name: location.region_name.unwrap_or_default(),
            city: location.city.unwrap_or_default(),
            isp: location.isp.unwrap_or_default(),
            created_at,
        }
    }
}
