//! `ImdbApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::ImdbError;
use crate::search::SearchResult;
use crate::types::{
    ImdbCredit, ImdbList, ImdbMovieDetails, ImdbParentalGuide, ImdbPerson, ImdbPlot, ImdbQuote,
    ImdbTrivia,
};

/// IMDb API trait.
///
/// Abstracts the endpoint catalogue for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(ImdbApi: Send)]
pub trait LocalImdbApi {
    /// Searches titles and people by free text (`find`).
    ///
    /// The query is appended verbatim; callers must pre-encode characters
    /// that are unsafe in a URL query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a
    /// non-success status, or a result payload carries an unknown
    /// discriminator key.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ImdbError>;

    /// Fetches the main details of a title (`title/maindetails`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `details` section.
    async fn title_details(&self, imdb_id: &str) -> Result<ImdbMovieDetails, ImdbError>;

    /// Fetches the synopsis text of a title (`title/synopsis`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `text` section.
    async fn synopsis(&self, imdb_id: &str) -> Result<String, ImdbError>;

    /// Fetches the plot of a title (`title/plot`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `plot` section.
    async fn plot(&self, imdb_id: &str) -> Result<ImdbPlot, ImdbError>;

    /// Fetches memorable quotes of a title (`title/quotes`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `quotes` section.
    async fn quotes(&self, imdb_id: &str) -> Result<Vec<ImdbQuote>, ImdbError>;

    /// Fetches trivia of a title (`title/trivia`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `trivia` section.
    async fn trivia(&self, imdb_id: &str) -> Result<ImdbTrivia, ImdbError>;

    /// Fetches the full credit groups of a title (`title/fullcredits`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `credits` section.
    async fn full_credits(&self, imdb_id: &str) -> Result<Vec<ImdbCredit>, ImdbError>;

    /// Fetches the parental guide of a title (`title/parentalguide`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `parental_guide` section.
    async fn parental_guide(&self, imdb_id: &str) -> Result<Vec<ImdbParentalGuide>, ImdbError>;

    /// Fetches a person's biography (`name/maindetails`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `name` section.
    async fn actor_biography(&self, name_id: &str) -> Result<ImdbPerson, ImdbError>;

    /// Fetches a person's filmography (`name/filmography`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response lacks the
    /// `filmography` section, or an entry carries an unknown discriminator
    /// key.
    async fn actor_filmography(&self, name_id: &str) -> Result<Vec<SearchResult>, ImdbError>;

    /// Fetches the coming-soon feature list (`feature/comingsoon`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `list` section.
    async fn coming_soon(&self) -> Result<ImdbList, ImdbError>;

    /// Fetches the top-250 chart (`chart/top`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response lacks the
    /// `list` section.
    async fn top250(&self) -> Result<ImdbList, ImdbError>;
}
