//! Profile share codes
//!
//! A share code is the profile's name, date of birth, gender and raw scores
//! as compact JSON, base64-encoded with the URL-safe alphabet and no
//! padding, so it can travel in a link. Analysis results are never encoded;
//! the receiver recomputes them from the scores.

use crate::error::{Error, Result};
use crate::types::{RawScoreMap, UserProfile};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Wire form with one-letter keys to keep links short.
#[derive(Debug, Serialize, Deserialize)]
struct SharedProfile {
    #[serde(rename = "n")]
    name: String,
    #[serde(rename = "d")]
    date_of_birth: String,
    #[serde(rename = "g")]
    gender: String,
    #[serde(rename = "s", default)]
    scores: RawScoreMap,
}

/// Encode a profile as a URL-safe share code.
pub fn encode(profile: &UserProfile) -> Result<String> {
    let shared = SharedProfile {
        name: profile.name.clone(),
        date_of_birth: profile.date_of_birth.clone(),
        gender: profile.gender.clone(),
        scores: profile.scores.clone(),
    };
    let json = serde_json::to_vec(&shared)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a share code back into a profile (without an id).
///
/// Accepts codes with or without trailing `=` padding, in either the
/// URL-safe or the standard base64 alphabet.
pub fn decode(code: &str) -> Result<UserProfile> {
    let normalized: String = code
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD
        .decode(normalized)
        .map_err(|e| Error::ShareCode(e.to_string()))?;

    let shared: SharedProfile =
        serde_json::from_slice(&bytes).map_err(|e| Error::ShareCode(e.to_string()))?;

    Ok(UserProfile {
        id: None,
        name: shared.name,
        date_of_birth: shared.date_of_birth,
        gender: shared.gender,
        scores: shared.scores,
    })
}
