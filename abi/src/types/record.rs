use serde::{Deserialize, Serialize};

/// Vehicle record as served by the marketplace API.
///
/// `booked_dates` is advisory at fetch time; the set is not refreshed during
/// the guest's selection session. The server re-validates on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Per-day rate. A missing rate quotes to zero rather than failing.
    #[serde(default)]
    pub price: Option<f64>,
    pub host: Host,
    #[serde(default)]
    pub booked_dates: Vec<String>,
    #[serde(default)]
    pub sold_out: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Authenticated guest identity from the session provider. Absent entirely
/// when the visitor is not logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
