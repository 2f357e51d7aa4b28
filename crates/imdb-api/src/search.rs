//! Polymorphic decoding of heterogeneous search results.
//!
//! The `find` and chart endpoints return titles and people mixed in one
//! array with no explicit type tag; the concrete shape is inferred from
//! which discriminator key is present (`tconst` for titles, `nconst` for
//! people). Payloads carrying neither key fail decoding explicitly —
//! nothing ever falls back to an untyped shape.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ImdbError;
use crate::types::{ImdbMovieDetails, ImdbPerson};

/// One entry of a heterogeneous search result list.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub enum SearchResult {
    /// A title, discriminated by the `tconst` key.
    Title(ImdbMovieDetails),
    /// A person, discriminated by the `nconst` key.
    Name(ImdbPerson),
}

impl SearchResult {
    /// Decodes one search object by inspecting its discriminator key.
    ///
    /// `tconst` is checked before `nconst`, matching the upstream
    /// registration order; a payload carrying both decodes as a title.
    ///
    /// # Errors
    ///
    /// - [`ImdbError::UnrecognizedVariant`] if the payload is not an object
    ///   or carries none of the known discriminator keys.
    /// - [`ImdbError::Decode`] if the matched variant's fields do not
    ///   deserialize.
    pub fn decode(value: &Value) -> Result<Self, ImdbError> {
        let Some(object) = value.as_object() else {
            return Err(ImdbError::UnrecognizedVariant {
                payload: value.to_string(),
            });
        };

        if object.contains_key("tconst") {
            return serde_json::from_value(value.clone())
                .map(Self::Title)
                .map_err(|source| ImdbError::Decode {
                    context: String::from("title search object"),
                    source: Some(source),
                });
        }

        if object.contains_key("nconst") {
            return serde_json::from_value(value.clone())
                .map(Self::Name)
                .map_err(|source| ImdbError::Decode {
                    context: String::from("person search object"),
                    source: Some(source),
                });
        }

        Err(ImdbError::UnrecognizedVariant {
            payload: value.to_string(),
        })
    }

    /// Returns the entry's identifier (`tconst` or `nconst`).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Title(title) => &title.tconst,
            Self::Name(person) => &person.nconst,
        }
    }

    /// Returns the title details if this entry is a title.
    #[must_use]
    pub const fn as_title(&self) -> Option<&ImdbMovieDetails> {
        match self {
            Self::Title(title) => Some(title),
            Self::Name(_) => None,
        }
    }

    /// Returns the person if this entry is a person.
    #[must_use]
    pub const fn as_name(&self) -> Option<&ImdbPerson> {
        match self {
            Self::Title(_) => None,
            Self::Name(person) => Some(person),
        }
    }
}

impl<'de> Deserialize<'de> for SearchResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(D::Error::custom)
    }
}

impl Serialize for SearchResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Title(title) => title.serialize(serializer),
            Self::Name(person) => person.serialize(serializer),
        }
    }
}

/// Collects every search object from a `find`-style response body.
///
/// The endpoint nests its result arrays either at the top level
/// (`{"title_results": [...]}`) or under `data`; every array value of the
/// selected object is decoded entry by entry, in order.
pub(crate) fn collect_results(body: &Value) -> Result<Vec<SearchResult>, ImdbError> {
    let root = body.get("data").unwrap_or(body);
    let object = root.as_object().ok_or_else(|| ImdbError::Decode {
        context: String::from("search response: body is not a JSON object"),
        source: None,
    })?;

    let mut results = Vec::new();
    for value in object.values() {
        if let Some(items) = value.as_array() {
            for item in items {
                results.push(SearchResult::decode(item)?);
            }
        }
    }
    Ok(results)
}
