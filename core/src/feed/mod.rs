//! Card Feed
//!
//! Everything between the remote endpoint and the deck: the fetch seam
//! ([`FeedSource`]), the HTTP implementation ([`HttpFeed`]), user-key
//! selection with the first-key fallback ([`select_cards`]), and the
//! non-blocking refresh worker ([`FeedWorker`]).

mod http;
mod source;
mod worker;

use thiserror::Error;

use crate::card::Card;
use crate::sanitize::sanitize_field;

pub use http::HttpFeed;
pub use source::FeedSource;
pub use worker::FeedWorker;

/// A decoded feed response: user name -> raw card data, in wire order.
///
/// Key order matters — with no configured user the display falls back
/// to the FIRST key of the response, so the map must preserve insertion
/// order (`serde_json/preserve_order`).
pub type Feed = serde_json::Map<String, serde_json::Value>;

/// Errors from one refresh attempt.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The HTTP request itself failed (connect, timeout, bad status).
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not a JSON object.
    #[error("feed response is not a JSON object")]
    MalformedFeed,

    /// The configured user has no entry in the response.
    #[error("no cards for user {0:?} in feed")]
    UserMissing(String),

    /// No configured user and the response mapping is empty.
    #[error("feed contains no users")]
    EmptyFeed,

    /// The user's card data did not decode as arrays of strings.
    #[error("card list for {user:?} is malformed: {source}")]
    MalformedCards {
        /// The user whose entry failed to decode.
        user: String,
        /// The underlying decode error.
        source: serde_json::Error,
    },
}

/// Pick the configured user's cards out of a feed response and sanitize
/// them for display.
///
/// With no configured name, falls back to the first key in response
/// order. Cards for every other user are ignored.
///
/// # Errors
///
/// [`FeedError::UserMissing`] when the named user is absent,
/// [`FeedError::EmptyFeed`] when there is no name and nothing to fall
/// back to, [`FeedError::MalformedCards`] when the entry is not an
/// array of arrays of strings.
pub fn select_cards(
    feed: &Feed,
    user_name: Option<&str>,
    raw_markup: bool,
) -> Result<Vec<Card>, FeedError> {
    let (user, value) = match user_name {
        Some(name) => {
            let value = feed
                .get(name)
                .ok_or_else(|| FeedError::UserMissing(name.to_string()))?;
            (name.to_string(), value)
        }
        None => {
            let (name, value) = feed.iter().next().ok_or(FeedError::EmptyFeed)?;
            (name.clone(), value)
        }
    };

    let raw: Vec<Vec<String>> =
        serde_json::from_value(value.clone()).map_err(|source| FeedError::MalformedCards {
            user: user.clone(),
            source,
        })?;

    Ok(raw
        .into_iter()
        .map(|fields| {
            Card::new(
                fields
                    .iter()
                    .map(|field| sanitize_field(field, raw_markup))
                    .collect(),
            )
        })
        .collect())
}
