//! Shareable links and loading a puzzle from one.
//!
//! The token is the whole persistence layer: a play link carries it in the
//! `puzzle` query parameter, an edit link in the `edit` parameter.

use percent_encoding::{percent_decode_str, utf8_percent_encode};
use tracing::{debug, warn};

use super::error::DecodingError;
use super::token::{decode, URI_COMPONENT};
use crate::puzzle::Puzzle;

/// Query parameter of the play surface.
pub const PLAY_PARAM: &str = "puzzle";

/// Query parameter of the authoring surface.
pub const EDIT_PARAM: &str = "edit";

/// Path of the authoring surface.
pub const CREATE_PATH: &str = "/create";

/// Build the play link for a token.
///
/// ```
/// use red_herring::codec::link::play_url;
///
/// assert_eq!(play_url("https://example.com/", "ab+c="), "https://example.com?puzzle=ab%2Bc%3D");
/// ```
#[must_use]
pub fn play_url(origin: &str, token: &str) -> String {
    format!(
        "{}?{}={}",
        origin.trim_end_matches('/'),
        PLAY_PARAM,
        utf8_percent_encode(token, URI_COMPONENT)
    )
}

/// Build the link that opens a token in the authoring surface.
#[must_use]
pub fn edit_url(origin: &str, token: &str) -> String {
    format!(
        "{}{}?{}={}",
        origin.trim_end_matches('/'),
        CREATE_PATH,
        EDIT_PARAM,
        utf8_percent_encode(token, URI_COMPONENT)
    )
}

/// Extract a query parameter value, decoded the way browsers decode
/// `URLSearchParams` (`+` becomes a space).
///
/// Accepts a bare query (`a=1&b=2`), one with a leading `?`, or a full URL.
/// Returns the first occurrence of `key`.
#[must_use]
pub fn token_from_query(query: &str, key: &str) -> Option<String> {
    let query = match query.split_once('?') {
        Some((_, rest)) => rest,
        None => query,
    };
    let query = query.split('#').next().unwrap_or_default();

    query.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if name != key {
            return None;
        }
        let value = value.replace('+', " ");
        Some(percent_decode_str(&value).decode_utf8_lossy().into_owned())
    })
}

/// Outcome of loading the puzzle for a play session.
#[derive(Debug)]
pub struct LoadedPuzzle {
    /// The puzzle to play.
    pub puzzle: Puzzle,

    /// Set when a token was present but unusable and the default puzzle was
    /// substituted. The host should tell the player.
    pub fallback: Option<DecodingError>,
}

impl LoadedPuzzle {
    /// Check if the default puzzle was substituted for a bad token.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Load the puzzle for a token, falling back to the default puzzle.
///
/// No token (or an empty one) means the default puzzle without a fallback
/// notice.
///
/// ```
/// use red_herring::codec::link::load_puzzle;
/// use red_herring::puzzle::Puzzle;
///
/// let loaded = load_puzzle(Some("%%%"));
/// assert!(loaded.is_fallback());
/// assert_eq!(loaded.puzzle, Puzzle::default());
/// ```
#[must_use]
pub fn load_puzzle(token: Option<&str>) -> LoadedPuzzle {
    let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
        debug!("no puzzle token, using default puzzle");
        return LoadedPuzzle {
            puzzle: Puzzle::default(),
            fallback: None,
        };
    };

    match decode(token) {
        Ok(puzzle) => LoadedPuzzle {
            puzzle,
            fallback: None,
        },
        Err(error) => {
            warn!(%error, "invalid puzzle token, using default puzzle");
            LoadedPuzzle {
                puzzle: Puzzle::default(),
                fallback: Some(error),
            }
        }
    }
}

/// Load the puzzle named by the `puzzle` parameter of a URL or query string.
#[must_use]
pub fn load_from_query(query: &str) -> LoadedPuzzle {
    load_puzzle(token_from_query(query, PLAY_PARAM).as_deref())
}
