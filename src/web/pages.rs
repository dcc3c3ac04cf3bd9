//! Template view-models.
//!
//! Each struct renders one file under `templates/`. Values are plain strings
//! so templates stay free of formatting logic.

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::entities::{Redirect, Visit};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Creation form, optionally with an error banner and the rejected values.
#[derive(Template, WebTemplate)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub error: Option<&'static str>,
    pub link: String,
    pub url: String,
}

impl CreateTemplate {
    /// Empty form.
    pub fn blank() -> Self {
        Self {
            error: None,
            link: String::new(),
            url: String::new(),
        }
    }

    /// Form re-rendered after the link was refused.
    pub fn invalid_link(link: String, url: String) -> Self {
        Self {
            error: Some("That link is invalid or already taken. Links need at least 3 characters of a-z, 0-9 or '-'."),
            link,
            url,
        }
    }

    /// Form re-rendered after the URL was refused.
    pub fn invalid_url(link: String, url: String) -> Self {
        Self {
            error: Some("That URL is invalid or did not respond. Use a full http(s) address."),
            link,
            url,
        }
    }
}

/// One visit as shown in the history table.
pub struct VisitRow {
    pub ip_address: String,
    pub country: String,
    pub region_name: String,
    pub city: String,
    pub isp: String,
    pub created_at: String,
}

impl From<&Visit> for VisitRow {
    fn from(visit: &Visit) -> Self {
        Self {
            ip_address: visit.ip_address.clone(),
            country: visit.country.clone().unwrap_or_default(),
            region_name: visit.region_name.clone().unwrap_or_default(),
            city: visit.city.clone().unwrap_or_default(),
            isp: visit.isp.clone().unwrap_or_default(),
            created_at: visit.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Management page for one redirect with its visit history.
#[derive(Template, WebTemplate)]
#[template(path = "view_redirect.html")]
pub struct ViewRedirectTemplate {
    pub link: String,
    pub url: String,
    pub access_code: String,
    pub current_url: String,
    pub link_url: String,
    pub created_at: String,
    pub visit_count: usize,
    pub visits: Vec<VisitRow>,
}

impl ViewRedirectTemplate {
    /// Builds the view-model; absolute URLs are derived from `host`.
    pub fn new(redirect: &Redirect, host: &str) -> Self {
        Self {
            link: redirect.link.clone(),
            url: redirect.url.clone(),
            access_code: redirect.access_code.clone(),
            current_url: redirect.management_url(host),
            link_url: redirect.full_link(host),
            created_at: redirect.created_at.format(DATE_FORMAT).to_string(),
            visit_count: redirect.visit_count(),
            visits: redirect.visits.iter().map(VisitRow::from).collect(),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "deleted.html")]
pub struct DeletedTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "failure.html")]
pub struct FailureTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}
