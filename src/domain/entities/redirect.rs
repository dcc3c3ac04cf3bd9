//! Redirect entity representing a stored link-to-URL mapping.

use chrono::{DateTime, Utc};

use super::visit::Visit;

/// A user-created redirect.
///
/// `link` is the public short path, `access_code` is the handle used to view
/// or delete the redirect. `visits` is only populated when the redirect is
/// loaded by access code.
#[derive(Debug, Clone)]
pub struct Redirect {
    pub id: i64,
    pub link: String,
    pub url: String,
    pub access_code: String,
    pub created_at: DateTime<Utc>,
    pub visits: Vec<Visit>,
}

impl Redirect {
    /// Creates a new Redirect instance without visits.
    pub fn new(
        id: i64,
        link: String,
        url: String,
        access_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            link,
            url,
            access_code,
            created_at,
            visits: Vec::new(),
        }
    }

    /// Attaches visit history to the redirect.
    pub fn with_visits(mut self, visits: Vec<Visit>) -> Self {
        self.visits = visits;
        self
    }

    /// Number of recorded visits.
    pub fn visit_count(&self) -> usize {
        self.visits.len()
    }

    /// Absolute public URL of the short link, e.g. `https://s.example.com/abc`.
    pub fn full_link(&self, host: &str) -> String {
        format!("{}/{}", host.trim_end_matches('/'), self.link)
    }

    /// Absolute URL of the management page for this redirect.
    pub fn management_url(&self, host: &str) -> String {
        format!(
            "{}/redirects/{}",
            host.trim_end_matches('/'),
            self.access_code
        )
    }
}

/// Input data for creating a new redirect.
///
/// The access code and timestamps are assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRedirect {
    pub link: String,
    pub url: String,
}
