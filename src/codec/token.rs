//! Token encoding: compact JSON, percent-escaped, then base64.
//!
//! ```text
//! Puzzle -> CompactPuzzle -> JSON -> encodeURIComponent -> base64 (standard, padded)
//! ```
//!
//! Percent-escaping first keeps the base64 input ASCII, so titles and words
//! in any script survive. Decoding reverses every step and is lenient about
//! damage a token picks up while travelling through a URL.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, instrument};

use super::compact::CompactPuzzle;
use super::error::{AuthoringError, DecodingError, EncodingError};
use crate::puzzle::Puzzle;

/// Bytes left unescaped, matching JavaScript's `encodeURIComponent`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard alphabet; writes padding, accepts tokens with or without it.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode a puzzle into a URL-embeddable token.
///
/// ```
/// use red_herring::codec::{decode, encode};
/// use red_herring::puzzle::Puzzle;
///
/// let puzzle = Puzzle::default().with_hidden_message("Héllo 👋");
/// let token = encode(&puzzle).unwrap();
///
/// assert!(token.is_ascii());
/// assert_eq!(decode(&token).unwrap(), puzzle);
/// ```
#[instrument(level = "debug", skip_all, err)]
pub fn encode(puzzle: &Puzzle) -> Result<String, EncodingError> {
    let json = serde_json::to_string(&CompactPuzzle::from(puzzle))?;
    let escaped = utf8_percent_encode(&json, URI_COMPONENT).to_string();
    let token = TOKEN_ENGINE.encode(escaped);
    debug!(json_len = json.len(), token_len = token.len(), "encoded puzzle");
    Ok(token)
}

/// Decode a token back into a puzzle.
///
/// Accepts, in addition to tokens produced by [`encode`]:
/// - surrounding line breaks and tabs,
/// - spaces where `+` was turned into a space by query-string decoding.
///   Plain spaces are never trimmed, even at the ends: every space is read
///   as `+`, so a stray leading space makes the token invalid,
/// - missing base64 padding,
/// - a token that was itself percent-escaped,
/// - a payload holding raw JSON that was never percent-escaped,
/// - records without title or hidden message.
#[instrument(level = "debug", skip_all, fields(token_len = token.len()), err)]
pub fn decode(token: &str) -> Result<Puzzle, DecodingError> {
    if token.trim().is_empty() {
        return Err(DecodingError::EmptyToken);
    }
    // Spaces are kept: they stand for `+`, which may end a token.
    let token = token.trim_matches(|c: char| c.is_whitespace() && c != ' ');

    let token = if token.contains('%') {
        unescape(token)?
    } else {
        token.to_string()
    };
    let token = token.replace(' ', "+");

    let bytes = TOKEN_ENGINE
        .decode(token.as_bytes())
        .map_err(|source| DecodingError::InvalidBase64 { source })?;
    let escaped = String::from_utf8(bytes).map_err(|_| DecodingError::InvalidUtf8)?;
    let json = unescape(&escaped)?;

    let compact: CompactPuzzle = serde_json::from_str(&json)
        .map_err(|source| DecodingError::MalformedJson { source })?;
    let puzzle = Puzzle::try_from(compact)?;

    debug!(
        has_title = puzzle.title.is_some(),
        has_hidden_message = puzzle.hidden_message.is_some(),
        "decoded puzzle"
    );
    Ok(puzzle)
}

/// Validate an authored puzzle, then encode it.
///
/// ```
/// use red_herring::codec::{encode_validated, AuthoringError};
/// use red_herring::puzzle::Puzzle;
///
/// let mut puzzle = Puzzle::default();
/// assert!(encode_validated(&puzzle).is_ok());
///
/// puzzle.categories[0].name.clear();
/// assert!(matches!(encode_validated(&puzzle), Err(AuthoringError::Invalid { .. })));
/// ```
pub fn encode_validated(puzzle: &Puzzle) -> Result<String, AuthoringError> {
    puzzle.validate()?;
    Ok(encode(puzzle)?)
}

/// Reverse `encodeURIComponent`, rejecting malformed escapes like
/// `decodeURIComponent` does.
pub(crate) fn unescape(text: &str) -> Result<String, DecodingError> {
    let bytes = text.as_bytes();
    for (position, _) in text.match_indices('%') {
        let valid = bytes
            .get(position + 1..position + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(DecodingError::InvalidEscape { position });
        }
    }

    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodingError::InvalidUtf8)
}
