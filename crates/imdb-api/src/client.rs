//! `ImdbClient` - IMDb mobile application API client implementation.

use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::api::LocalImdbApi;
use crate::error::ImdbError;
use crate::search::{self, SearchResult};
use crate::types::{
    ErrorEnvelope, ImdbCredit, ImdbList, ImdbMovieDetails, ImdbParentalGuide, ImdbPerson,
    ImdbPlot, ImdbQuote, ImdbTrivia, ResponseDetail, WrapperResponse,
};
use crate::user_agent;

/// Default base URL for the IMDb mobile application API.
const DEFAULT_BASE_URL: &str = "https://app.imdb.com/";

/// API version sent with every request.
const API_VERSION: &str = "v1";

/// Application identifier sent with every request.
const APP_ID: &str = "iphone1";

/// Fixed signature token, appended last so the query string stays valid
/// for the upstream signature check.
const SIG: &str = "app1";

/// IMDb API client.
///
/// Holds the injected HTTP client, the base URL and the active locale.
/// Construct once via [`ImdbClient::builder`] and share by reference;
/// nothing in here is mutated after construction.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ImdbClient {
    /// Injected HTTP client. Requests fail with
    /// [`ImdbError::UninitializedClient`] while this is `None`.
    http_client: Option<Client>,
    /// Base URL for API requests.
    base_url: Url,
    /// Locale sent with every request.
    locale: String,
}

/// Builder for `ImdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ImdbClientBuilder {
    http_client: Option<Client>,
    base_url: Option<String>,
    locale: Option<String>,
}

impl ImdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            http_client: None,
            base_url: None,
            locale: None,
        }
    }

    /// Injects the HTTP client used for every request.
    ///
    /// Required before any call is made; a client built without one fails
    /// each request with [`ImdbError::UninitializedClient`] before any
    /// network attempt. Timeouts and TLS settings belong to the injected
    /// client.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the locale (default: the system locale from the environment).
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ImdbError::MalformedUrl`] if the base URL does not parse.
    pub fn build(self) -> Result<ImdbClient, ImdbError> {
        let raw = self
            .base_url
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        // Normalise to exactly one trailing slash so function paths append
        // without clobbering the last path segment.
        let normalised = format!("{}/", raw.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|source| ImdbError::MalformedUrl {
            url: normalised,
            source,
        })?;

        let locale = self.locale.unwrap_or_else(default_locale);

        Ok(ImdbClient {
            http_client: self.http_client,
            base_url,
            locale,
        })
    }
}

impl ImdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> ImdbClientBuilder {
        ImdbClientBuilder::new()
    }

    /// Assembles the signed request URL for `function`.
    ///
    /// Appends, in fixed order: API version, application identifier,
    /// locale, epoch-seconds timestamp, each caller parameter in slice
    /// order, then the signature token. Parameter values are appended
    /// verbatim; callers must pre-encode characters that are unsafe in a
    /// URL query.
    ///
    /// # Errors
    ///
    /// Returns [`ImdbError::MalformedUrl`] if the assembled string is not
    /// a syntactically valid URL.
    pub fn build_url(&self, function: &str, params: &[(&str, String)]) -> Result<Url, ImdbError> {
        let mut raw = format!(
            "{}{}?api={}&appid={}&locale={}&timestamp={}",
            self.base_url,
            function,
            API_VERSION,
            APP_ID,
            self.locale,
            Utc::now().timestamp(),
        );
        for (key, value) in params {
            raw.push_str(&format!("&{key}={value}"));
        }
        raw.push_str(&format!("&sig={SIG}"));

        tracing::trace!(url = %raw, "assembled request URL");
        Url::parse(&raw).map_err(|source| ImdbError::MalformedUrl { url: raw, source })
    }

    /// Performs one GET round trip and classifies the response status.
    ///
    /// Statuses below 300 return the body text. For 300-499 and >= 500 the
    /// body is decoded as an [`ErrorEnvelope`] and mapped to
    /// [`ImdbError::Client`] / [`ImdbError::Server`]; if the envelope
    /// itself does not decode, the failure surfaces as
    /// [`ImdbError::Decode`] with the original HTTP status in its context.
    async fn request(&self, url: &Url) -> Result<String, ImdbError> {
        let http_client = self
            .http_client
            .as_ref()
            .ok_or(ImdbError::UninitializedClient)?;

        let request = http_client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, user_agent::random())
            .build()
            .map_err(|source| ImdbError::InvalidUrl {
                url: String::from(url.as_str()),
                source,
            })?;

        tracing::debug!(url = %request.url(), "IMDb API request");

        let response = http_client
            .execute(request)
            .await
            .map_err(|source| ImdbError::Connection { source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ImdbError::Connection { source })?;

        tracing::trace!(%status, body_len = body.len(), "IMDb API response");

        if status.as_u16() >= 300 {
            let envelope: ErrorEnvelope =
                serde_json::from_str(&body).map_err(|source| ImdbError::Decode {
                    context: format!("error envelope (HTTP {status})"),
                    source: Some(source),
                })?;
            return Err(ImdbError::from_status(status, envelope.status.message));
        }

        Ok(body)
    }

    /// Fetches `function` and decodes the full response body as `T`.
    ///
    /// # Errors
    ///
    /// - [`ImdbError::MalformedUrl`] if the request URL does not assemble.
    /// - [`ImdbError::UninitializedClient`] if no HTTP client was injected.
    /// - [`ImdbError::Connection`] / [`ImdbError::InvalidUrl`] on transport
    ///   failure.
    /// - [`ImdbError::Client`] / [`ImdbError::Server`] on non-success
    ///   statuses.
    /// - [`ImdbError::Decode`] if the body does not match `T`.
    pub async fn get_wrapper<T: DeserializeOwned>(
        &self,
        function: &str,
        params: &[(&str, String)],
    ) -> Result<T, ImdbError> {
        let url = self.build_url(function, params)?;
        let body = self.request(&url).await?;
        serde_json::from_str(&body).map_err(|source| ImdbError::Decode {
            context: String::from(function),
            source: Some(source),
        })
    }

    /// Fetches `function` and returns the generic [`ResponseDetail`].
    ///
    /// # Errors
    ///
    /// Same as [`ImdbClient::get_wrapper`]; a body without a `data` field
    /// is a decode failure.
    pub async fn get_response(
        &self,
        function: &str,
        params: &[(&str, String)],
    ) -> Result<ResponseDetail, ImdbError> {
        let wrapper: WrapperResponse = self.get_wrapper(function, params).await?;
        Ok(wrapper.data)
    }

    /// Fetches `function` and decodes every search object in the response
    /// through the polymorphic dispatch.
    ///
    /// # Errors
    ///
    /// Same as [`ImdbClient::get_wrapper`], plus
    /// [`ImdbError::UnrecognizedVariant`] when a result payload carries no
    /// known discriminator key.
    pub async fn get_search(
        &self,
        function: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<SearchResult>, ImdbError> {
        let url = self.build_url(function, params)?;
        let body = self.request(&url).await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|source| ImdbError::Decode {
                context: String::from(function),
                source: Some(source),
            })?;
        search::collect_results(&value)
    }
}

impl LocalImdbApi for ImdbClient {
    #[instrument(skip_all)]
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ImdbError> {
        self.get_search("find", &[("q", String::from(query))]).await
    }

    #[instrument(skip_all)]
    async fn title_details(&self, imdb_id: &str) -> Result<ImdbMovieDetails, ImdbError> {
        let response = self
            .get_response("title/maindetails", &[("tconst", String::from(imdb_id))])
            .await?;
        response
            .details
            .ok_or_else(|| ImdbError::missing_section("title/maindetails", "details"))
    }

    #[instrument(skip_all)]
    async fn synopsis(&self, imdb_id: &str) -> Result<String, ImdbError> {
        let response = self
            .get_response("title/synopsis", &[("tconst", String::from(imdb_id))])
            .await?;
        response
            .text
            .ok_or_else(|| ImdbError::missing_section("title/synopsis", "text"))
    }

    #[instrument(skip_all)]
    async fn plot(&self, imdb_id: &str) -> Result<ImdbPlot, ImdbError> {
        let response = self
            .get_response("title/plot", &[("tconst", String::from(imdb_id))])
            .await?;
        response
            .plot
            .ok_or_else(|| ImdbError::missing_section("title/plot", "plot"))
    }

    #[instrument(skip_all)]
    async fn quotes(&self, imdb_id: &str) -> Result<Vec<ImdbQuote>, ImdbError> {
        let response = self
            .get_response("title/quotes", &[("tconst", String::from(imdb_id))])
            .await?;
        response
            .quotes
            .ok_or_else(|| ImdbError::missing_section("title/quotes", "quotes"))
    }

    #[instrument(skip_all)]
    async fn trivia(&self, imdb_id: &str) -> Result<ImdbTrivia, ImdbError> {
        let response = self
            .get_response("title/trivia", &[("tconst", String::from(imdb_id))])
            .await?;
        response
            .trivia
            .ok_or_else(|| ImdbError::missing_section("title/trivia", "trivia"))
    }

    #[instrument(skip_all)]
    async fn full_credits(&self, imdb_id: &str) -> Result<Vec<ImdbCredit>, ImdbError> {
        let response = self
            .get_response("title/fullcredits", &[("tconst", String::from(imdb_id))])
            .await?;
        response
            .credits
            .ok_or_else(|| ImdbError::missing_section("title/fullcredits", "credits"))
    }

    #[instrument(skip_all)]
    async fn parental_guide(&self, imdb_id: &str) -> Result<Vec<ImdbParentalGuide>, ImdbError> {
        let response = self
            .get_response("title/parentalguide", &[("tconst", String::from(imdb_id))])
            .await?;
        response
            .parental_guide
            .ok_or_else(|| ImdbError::missing_section("title/parentalguide", "parental_guide"))
    }

    #[instrument(skip_all)]
    async fn actor_biography(&self, name_id: &str) -> Result<ImdbPerson, ImdbError> {
        let response = self
            .get_response("name/maindetails", &[("nconst", String::from(name_id))])
            .await?;
        response
            .name
            .ok_or_else(|| ImdbError::missing_section("name/maindetails", "name"))
    }

    #[instrument(skip_all)]
    async fn actor_filmography(&self, name_id: &str) -> Result<Vec<SearchResult>, ImdbError> {
        let response = self
            .get_response("name/filmography", &[("nconst", String::from(name_id))])
            .await?;
        response
            .filmography
            .ok_or_else(|| ImdbError::missing_section("name/filmography", "filmography"))
    }

    #[instrument(skip_all)]
    async fn coming_soon(&self) -> Result<ImdbList, ImdbError> {
        let response = self.get_response("feature/comingsoon", &[]).await?;
        response
            .list
            .ok_or_else(|| ImdbError::missing_section("feature/comingsoon", "list"))
    }

    #[instrument(skip_all)]
    async fn top250(&self) -> Result<ImdbList, ImdbError> {
        let response = self.get_response("chart/top", &[]).await?;
        response
            .list
            .ok_or_else(|| ImdbError::missing_section("chart/top", "list"))
    }
}

/// Resolves the default locale from the process environment.
///
/// Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in order, strips the encoding
/// suffix, and falls back to `en_US` when nothing usable is set (or when
/// the POSIX locales `C`/`POSIX` are active).
fn default_locale() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .find_map(|key| {
            let value = std::env::var(key).ok()?;
            let tag = value.split('.').next().unwrap_or_default().trim().to_owned();
            (!tag.is_empty() && tag != "C" && tag != "POSIX").then_some(tag)
        })
        .unwrap_or_else(|| String::from("en_US"))
}
