//! Pattern expansion - turns one glob pattern into a list of matching paths
//!
//! Expansion runs relative to the current working directory. Matches come back
//! in the order the `glob` crate yields them, with every backslash rewritten to
//! a forward slash so build generators get the same separator on every platform.
//!
//! # Examples
//!
//! ```no_run
//! use globfiles::expand::expand;
//!
//! let files = expand("src/*.cpp").unwrap();
//! for f in files {
//!     println!("{f}");
//! }
//! ```

use glob::{MatchOptions, glob_with};
use thiserror::Error;

/// Errors that can occur while expanding a pattern
#[derive(Debug, Error)]
pub enum ExpandError {
    /// The pattern could not be compiled
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Underlying compile error
        #[source]
        source: glob::PatternError,
    },

    /// A directory could not be read during the walk
    #[error("failed to read {}: {}", .0.path().display(), .0.error())]
    Walk(#[from] glob::GlobError),
}

/// Matching rules used for every expansion.
///
/// Wildcards never cross a path separator, and hidden entries only match when
/// the pattern segment itself starts with a dot. Case folds on Windows only,
/// following the host filesystem.
#[must_use]
pub const fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// Expand `pattern` against the filesystem.
///
/// Returns the normalized matches in iteration order. A pattern matching
/// nothing is not an error.
pub fn expand(pattern: &str) -> Result<Vec<String>, ExpandError> {
    log::debug!("expanding pattern: {pattern}");

    let paths = glob_with(pattern, match_options()).map_err(|source| {
        ExpandError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.inspect_err(|e| {
            log::warn!("unreadable entry {}: {}", e.path().display(), e.error());
        })?;
        matches.push(to_forward_slashes(&path.to_string_lossy()));
    }

    log::debug!("{} match(es) for {pattern}", matches.len());
    Ok(matches)
}

/// Replace every backslash with a forward slash.
///
/// Purely textual: separators are not collapsed and `.`/`..` are kept.
#[must_use]
pub fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}
