//! IMDb API response types.
//!
//! Detail endpoints wrap their payload in `{"@meta": ..., "data": {...}}`;
//! [`WrapperResponse`] and [`ResponseDetail`] model that envelope. Error
//! responses use the `{"@type": ..., "status": {"message": ...}}` shape
//! modeled by [`ErrorEnvelope`].

use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

// --- Envelopes ---

/// Request metadata echoed back by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMeta {
    /// Operation name, e.g. `"MainDetails"`.
    #[serde(default)]
    pub operation: Option<String>,
    /// Server-assigned request identifier.
    #[serde(rename = "requestId", default)]
    pub request_id: Option<String>,
    /// Upstream processing time in milliseconds.
    #[serde(rename = "serviceTimeMs", default)]
    pub service_time_ms: Option<f64>,
}

/// Top-level envelope for all detail endpoints: `{"@meta": ..., "data": {...}}`.
///
/// `data` is required; a body without it is a schema mismatch, never an
/// empty default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrapperResponse {
    /// Request metadata.
    #[serde(rename = "@meta", default)]
    pub meta: Option<ApiMeta>,
    /// The per-endpoint payload sections.
    pub data: ResponseDetail,
}

/// Aggregate of the payload sections the detail endpoints populate.
///
/// Each endpoint fills exactly one section; the rest stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDetail {
    /// Title main details (`title/maindetails`).
    #[serde(default)]
    pub details: Option<ImdbMovieDetails>,
    /// Synopsis body (`title/synopsis`).
    #[serde(default)]
    pub text: Option<String>,
    /// Plot outline and summary (`title/plot`).
    #[serde(default)]
    pub plot: Option<ImdbPlot>,
    /// Memorable quotes (`title/quotes`).
    #[serde(default)]
    pub quotes: Option<Vec<ImdbQuote>>,
    /// Trivia entries (`title/trivia`).
    #[serde(default)]
    pub trivia: Option<ImdbTrivia>,
    /// Credit groups (`title/fullcredits`).
    #[serde(default)]
    pub credits: Option<Vec<ImdbCredit>>,
    /// Parental guide sections (`title/parentalguide`).
    #[serde(default)]
    pub parental_guide: Option<Vec<ImdbParentalGuide>>,
    /// Person details (`name/maindetails`).
    #[serde(default)]
    pub name: Option<ImdbPerson>,
    /// Filmography entries (`name/filmography`).
    #[serde(default)]
    pub filmography: Option<Vec<SearchResult>>,
    /// Chart and coming-soon lists (`chart/top`, `feature/comingsoon`).
    #[serde(default)]
    pub list: Option<ImdbList>,
}

/// Error envelope returned on non-success HTTP statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Type tag, e.g. `"error"`.
    #[serde(rename = "@type")]
    pub error_type: String,
    /// Human-readable status.
    pub status: ErrorStatus,
}

/// Status message carried inside an [`ErrorEnvelope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorStatus {
    /// Human-readable failure description.
    pub message: String,
}

// --- Models ---

/// An image reference with optional dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdbImage {
    /// Image URL.
    pub url: String,
    /// Width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
}

/// Main details of a title. Doubles as the `tconst`-discriminated search
/// result variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdbMovieDetails {
    /// Title identifier, e.g. `"tt0133093"`.
    pub tconst: String,
    /// Display title.
    pub title: String,
    /// Title type, e.g. `"feature"` or `"tv_series"`.
    #[serde(rename = "type", default)]
    pub title_type: Option<String>,
    /// Release year.
    #[serde(default)]
    pub year: Option<u16>,
    /// Release date (`YYYY-MM-DD`).
    #[serde(default)]
    pub release_date: Option<String>,
    /// User rating on the 1-10 scale.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of rating votes.
    #[serde(default)]
    pub num_votes: Option<u64>,
    /// Poster image.
    #[serde(default)]
    pub image: Option<ImdbImage>,
}

/// A person. Doubles as the `nconst`-discriminated search result variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdbPerson {
    /// Name identifier, e.g. `"nm0000206"`.
    pub nconst: String,
    /// Display name.
    pub name: String,
    /// Character played, present in credit lists.
    #[serde(rename = "char", default)]
    pub character: Option<String>,
    /// Biography text, present in `name/maindetails`.
    #[serde(default)]
    pub bio: Option<String>,
    /// Headshot image.
    #[serde(default)]
    pub image: Option<ImdbImage>,
}

/// Plot information for a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdbPlot {
    /// Short outline.
    #[serde(default)]
    pub outline: Option<String>,
    /// Longer summary.
    #[serde(default)]
    pub text: Option<String>,
}

/// A single quote, one line per speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdbQuote {
    /// Quote lines in order.
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Trivia entries, split by spoiler status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdbTrivia {
    /// Spoiler-free entries.
    #[serde(default)]
    pub unspoilt: Vec<String>,
    /// Entries containing spoilers.
    #[serde(default)]
    pub spoilt: Vec<String>,
}

/// A credit group, e.g. cast or directors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdbCredit {
    /// Machine token, e.g. `"cast"`.
    #[serde(default)]
    pub token: Option<String>,
    /// Display label, e.g. `"Cast"`.
    #[serde(default)]
    pub label: Option<String>,
    /// People in this group.
    #[serde(default)]
    pub list: Vec<ImdbPerson>,
}

/// One parental guide section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdbParentalGuide {
    /// Section label, e.g. `"Violence & Gore"`.
    pub label: String,
    /// Section body.
    #[serde(default)]
    pub text: Option<String>,
}

/// A labelled list of heterogeneous title/person entries, as returned by
/// the chart and coming-soon endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdbList {
    /// Display label for the list.
    #[serde(default)]
    pub label: Option<String>,
    /// List entries, decoded through the polymorphic dispatch.
    #[serde(default)]
    pub list: Vec<SearchResult>,
}
