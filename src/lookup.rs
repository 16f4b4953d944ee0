//! The dictionary seam.
//!
//! Term matching (deinflection, dictionary formats, ranking) lives outside
//! this crate. The scanner only needs one question answered: given a lookup
//! window, which definitions match and how much of the window did the best
//! one consume?

use serde::Serialize;

/// What a [`Lookup`] found for a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<D> {
    /// Candidate definitions, best first.
    pub definitions: Vec<D>,
    /// Window codepoints consumed by the match; 0 means no match.
    pub matched_len: usize,
}

impl<D> MatchResult<D> {
    /// A result with no definitions and nothing consumed.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            definitions: Vec::new(),
            matched_len: 0,
        }
    }

    /// Whether anything matched.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.matched_len > 0
    }
}

impl<D> Default for MatchResult<D> {
    fn default() -> Self {
        Self::none()
    }
}

/// A dictionary that can be queried with lookup windows.
///
/// ```rust
/// use yomiscan::{Lookup, MatchResult};
///
/// struct Echo;
///
/// impl Lookup for Echo {
///     type Definition = String;
///
///     fn find_term(&self, window: &str, _exact: bool) -> MatchResult<String> {
///         let word: String = window.chars().take(2).collect();
///         MatchResult { matched_len: word.chars().count(), definitions: vec![word] }
///     }
/// }
///
/// assert_eq!(Echo.find_term("日本語", false).matched_len, 2);
/// ```
pub trait Lookup: Send + Sync {
    /// The definition records returned by this dictionary.
    type Definition;

    /// Look up `window`.
    ///
    /// With `exact == false` the matcher scans from the window start for the
    /// longest matching term (pointer-driven lookup). With `exact == true`
    /// the whole window is the query (search box).
    fn find_term(&self, window: &str, exact: bool) -> MatchResult<Self::Definition>;
}
