use std::fmt;

use serde::Serialize;

use crate::index::PrefixIndex;

/// An ordered chain of words from an origin to a target.
///
/// Consecutive words differ by exactly one edit and every word after the
/// origin is a dictionary member; [`Route::validate`] checks both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route(Vec<String>);

impl Route {
    pub(crate) fn from_words(words: Vec<String>) -> Self {
        debug_assert!(!words.is_empty());
        Self(words)
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Number of words, origin included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn origin(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// True when every step is a single edit and every word past the origin
    /// exists in `index`.
    pub fn validate(&self, index: &PrefixIndex) -> bool {
        !self.0.is_empty()
            && self.0[1..].iter().all(|w| index.exists(w))
            && self.0.windows(2).all(|pair| is_one_edit(&pair[0], &pair[1]))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" -> "))
    }
}

impl PartialEq<[&str]> for Route {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

/// Whether `a` becomes `b` through exactly one substitution, insertion or
/// deletion of a single character.
pub fn is_one_edit(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    match long.len() - short.len() {
        0 => short.iter().zip(long.iter()).filter(|(x, y)| x != y).count() == 1,
        1 => {
            let prefix = short
                .iter()
                .zip(long.iter())
                .take_while(|(x, y)| x == y)
                .count();
            short[prefix..] == long[prefix + 1..]
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_one_edit() {
        assert!(is_one_edit("cat", "cot"));
        assert!(is_one_edit("cat", "catt"));
        assert!(is_one_edit("catt", "cat"));
        assert!(is_one_edit("cat", "at"));
        assert!(is_one_edit("a", ""));
        assert!(!is_one_edit("cat", "cat"));
        assert!(!is_one_edit("cat", "dog"));
        assert!(!is_one_edit("cat", "cattle"));
        assert!(!is_one_edit("abc", "bca"));
    }

    #[test]
    fn test_validate() {
        let index = PrefixIndex::from_words(["ruby", "rudy", "rudd"]);
        let route = Route::from_words(vec!["ruby".into(), "rudy".into(), "rudd".into()]);
        assert!(route.validate(&index));

        let skip = Route::from_words(vec!["ruby".into(), "rudd".into()]);
        assert!(!skip.validate(&index));

        let missing = Route::from_words(vec!["ruby".into(), "rubb".into()]);
        assert!(!missing.validate(&index));
    }

    #[test]
    fn test_display_and_accessors() {
        let route = Route::from_words(vec!["cat".into(), "cot".into(), "cog".into()]);
        assert_eq!(route.to_string(), "cat -> cot -> cog");
        assert_eq!(route.origin(), Some("cat"));
        assert_eq!(route.target(), Some("cog"));
        assert_eq!(route.len(), 3);
        assert!(route == ["cat", "cot", "cog"][..]);
    }
}
