//! Coverage diagnostics: which requested keys got a color and which did not.
//!
//! Purely observational: a [`Coverage`] is computed after the mapping is
//! final and never feeds back into it. The tallies help spot which parts
//! of the key vocabulary the generator does not handle well yet.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::keys::split;

/// One word of a camelCase key segment: an optional capital followed by
/// lowercase/digits, or a lone capital.
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Lu}?[^\p{Lu}.]+|\p{Lu}").expect("word pattern is valid")
});

/// How much of a request was filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Distinct keys requested.
    pub total: usize,
    /// Keys that received a color.
    pub filled: usize,
    /// Keys left unset, in request order.
    pub omitted: Vec<String>,
}

impl Coverage {
    /// Filled share of the request, rounded down. An empty request is
    /// fully covered.
    #[must_use]
    pub const fn percent(&self) -> usize {
        if self.total == 0 {
            100
        } else {
            self.filled * 100 / self.total
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.omitted.is_empty()
    }

    /// Omitted keys tallied by category (`""` for ungrouped keys).
    #[must_use]
    pub fn by_category(&self) -> BTreeMap<&str, usize> {
        tally(self.omitted.iter().map(|key| split(key).0))
    }

    /// Omitted keys tallied by their last `.` segment.
    #[must_use]
    pub fn by_suffix(&self) -> BTreeMap<&str, usize> {
        tally(
            self.omitted
                .iter()
                .map(|key| key.rsplit('.').next().unwrap_or(key)),
        )
    }

    /// Omitted keys broken into lowercase words and tallied.
    #[must_use]
    pub fn word_cloud(&self) -> BTreeMap<String, usize> {
        tally(self.omitted.iter().flat_map(|key| words(key)))
    }

    /// Log the summary and the top omitted categories, suffixes and words
    /// at `info` level.
    pub fn log(&self) {
        info!(
            filled = self.filled,
            total = self.total,
            "Colors generated for {}/{}, or {}%",
            self.filled,
            self.total,
            self.percent()
        );
        if self.is_complete() {
            return;
        }

        info!("{}", describe_top("not-done prefixes", &self.by_category()));
        info!("{}", describe_top("not-done suffixes", &self.by_suffix()));
        info!("{}", describe_top("not-done word cloud words", &self.word_cloud()));
    }
}

/// Split a key into lowercase words at `.` and at capital letters.
///
/// ```
/// use theminator_theme::coverage::words;
///
/// assert_eq!(words("ape.bearCow"), ["ape", "bear", "cow"]);
/// ```
#[must_use]
pub fn words(key: &str) -> Vec<String> {
    WORD.find_iter(key)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

fn tally<K: Ord>(items: impl IntoIterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// The `n` largest counts, largest first; ties in name order.
#[must_use]
pub fn top_counts<K: AsRef<str>>(counts: &BTreeMap<K, usize>, n: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(k, &v)| (k.as_ref(), v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);
    ranked
}

/// A sentence like `The top suffix counts are "a" (14), "b" (9) and "c" (2)`
/// covering the three largest counts.
#[must_use]
pub fn describe_top<K: AsRef<str>>(what: &str, counts: &BTreeMap<K, usize>) -> String {
    let items: Vec<String> = top_counts(counts, 3)
        .into_iter()
        .map(|(key, count)| format!("\"{key}\" ({count})"))
        .collect();

    match items.as_slice() {
        [] => format!("There are no {what}"),
        [only] => format!("The top {what} counts are {only}"),
        [init @ .., last] => format!("The top {what} counts are {} and {last}", init.join(", ")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn coverage(omitted: &[&str], total: usize) -> Coverage {
        Coverage {
            total,
            filled: total - omitted.len(),
            omitted: omitted.iter().map(ToString::to_string).collect(),
        }
    }

    // ── percent ─────────────────────────────────────────────────────

    #[test]
    fn percent_rounds_down() {
        assert_eq!(coverage(&["a.b"], 3).percent(), 66);
        assert_eq!(coverage(&[], 7).percent(), 100);
    }

    #[test]
    fn empty_request_is_complete() {
        let c = Coverage::default();
        assert_eq!(c.percent(), 100);
        assert!(c.is_complete());
    }

    // ── tallies ─────────────────────────────────────────────────────

    #[test]
    fn tallies_by_category_and_suffix() {
        let c = coverage(
            &["list.hoverForeground", "list.focusForeground", "badge.foreground", "focusBorder"],
            10,
        );
        let by_category: Vec<_> = c.by_category().into_iter().collect();
        assert_eq!(by_category, [("", 1), ("badge", 1), ("list", 2)]);

        let by_suffix: Vec<_> = c.by_suffix().into_iter().collect();
        assert_eq!(
            by_suffix,
            [
                ("focusBorder", 1),
                ("focusForeground", 1),
                ("foreground", 1),
                ("hoverForeground", 1)
            ]
        );
    }

    #[test]
    fn word_cloud_counts_words() {
        let c = coverage(&["list.hoverForeground", "badge.foreground"], 2);
        let cloud = c.word_cloud();
        assert_eq!(cloud["foreground"], 2);
        assert_eq!(cloud["hover"], 1);
        assert_eq!(cloud["list"], 1);
    }

    // ── words ───────────────────────────────────────────────────────

    #[test]
    fn words_split_on_dots_and_capitals() {
        assert_eq!(words("ape.bearCow"), ["ape", "bear", "cow"]);
        assert_eq!(
            words("editorGroupHeader.tabsBorder"),
            ["editor", "group", "header", "tabs", "border"]
        );
    }

    #[test]
    fn words_edge_cases() {
        assert_eq!(words("ABC"), ["a", "b", "c"]);
        assert_eq!(words("..x.."), ["x"]);
        assert!(words("").is_empty());
        assert_eq!(words("terminal.ansiBrightRed2"), ["terminal", "ansi", "bright", "red2"]);
    }

    // ── describe_top ────────────────────────────────────────────────

    #[test]
    fn describe_top_three() {
        let counts = BTreeMap::from([("x", 14), ("y", 9), ("z", 2), ("w", 1)]);
        assert_eq!(
            describe_top("foo", &counts),
            "The top foo counts are \"x\" (14), \"y\" (9) and \"z\" (2)"
        );
    }

    #[test]
    fn describe_top_short_lists() {
        let one = BTreeMap::from([("x", 1)]);
        assert_eq!(describe_top("foo", &one), "The top foo counts are \"x\" (1)");

        let two = BTreeMap::from([("x", 1), ("y", 5)]);
        assert_eq!(
            describe_top("foo", &two),
            "The top foo counts are \"y\" (5) and \"x\" (1)"
        );

        let none: BTreeMap<&str, usize> = BTreeMap::new();
        assert_eq!(describe_top("foo", &none), "There are no foo");
    }

    #[test]
    fn top_counts_breaks_ties_by_name() {
        let counts = BTreeMap::from([("b".to_string(), 2), ("a".to_string(), 2), ("c".to_string(), 3)]);
        assert_eq!(top_counts(&counts, 2), [("c", 3), ("a", 2)]);
    }
}
