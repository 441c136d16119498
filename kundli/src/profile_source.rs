//! Resolve a profile argument that is either a JSON file or a share code.

use anyhow::{Context, Result};
use kundli_core::{share, UserProfile};
use std::path::Path;

/// Load a profile from a file path, falling back to decoding a share code.
pub fn load_profile(arg: &str) -> Result<UserProfile> {
    let path = Path::new(arg);
    if path.is_file() {
        return UserProfile::load_from(path)
            .with_context(|| format!("failed to load profile from {}", path.display()));
    }

    share::decode(arg)
        .with_context(|| format!("'{}' is neither a profile file nor a share code", arg))
}
