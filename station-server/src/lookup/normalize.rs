//! Text normalization for station names and queries.
//!
//! Every name variant in the catalog and every incoming query goes through
//! [`normalize`], and matching only ever compares the resulting
//! [`CanonicalForm`]s. The pipeline:
//!
//! 1. drop parenthesized text (`Brussel Nat (be)` → `Brussel Nat`)
//! 2. lower-case, decompose (NFKD), drop combining marks, expand ligatures
//! 3. treat every non-alphanumeric character as a separator; `/` splits the
//!    text into alias segments
//! 4. split into tokens
//! 5. apply the abbreviation/synonym rules in [`super::synonyms`]
//!
//! Normalization never fails: input with nothing usable in it yields an
//! empty form.

use std::collections::BTreeSet;
use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::synonyms;

/// Separates alias segments within one name.
const SEGMENT_SEPARATOR: char = '/';

/// Letters that compatibility decomposition leaves intact.
const LIGATURES: &[(char, &str)] = &[
    ('œ', "oe"),
    ('æ', "ae"),
    ('ß', "ss"),
    ('ø', "o"),
    ('ł', "l"),
    ('đ', "d"),
    ('þ', "th"),
];

/// The normalized representation of a name or query.
///
/// Holds the ordered tokens, their space-joined rendering, and the
/// unordered token set. Normalizing [`CanonicalForm::as_str`] again yields
/// an equal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CanonicalForm {
    tokens: Vec<String>,
    rendered: String,
    token_set: BTreeSet<String>,
}

impl CanonicalForm {
    fn from_tokens(tokens: Vec<String>) -> Self {
        let rendered = tokens.join(" ");
        let token_set = tokens.iter().cloned().collect();
        Self {
            tokens,
            rendered,
            token_set,
        }
    }

    /// Tokens in order of appearance.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens without order or repetition.
    pub fn token_set(&self) -> &BTreeSet<String> {
        &self.token_set
    }

    /// Tokens joined by single spaces.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Key identifying the token set, independent of token order.
    pub fn set_key(&self) -> String {
        self.token_set
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Normalize `text` into its canonical form.
///
/// Slash-separated segments all contribute, in order, to one form, and
/// the synonym rules see them as one token sequence: `am/main` becomes
/// `main` here, while [`normalize_segments`] keeps `am` and `main` apart.
///
/// # Examples
///
/// ```
/// use station_server::lookup::normalize;
///
/// assert_eq!(normalize("St.-Pancras").as_str(), "saint pancras");
/// assert_eq!(normalize("Ville-Pommerœul"), normalize("ville pommeroeul"));
/// assert_eq!(normalize("Brussel Nat (be)").as_str(), "brussel nat");
/// assert!(normalize("(?)").is_empty());
/// ```
pub fn normalize(text: &str) -> CanonicalForm {
    let folded = fold(&strip_parenthesized(text));
    let tokens = folded
        .split(SEGMENT_SEPARATOR)
        .flat_map(tokenize)
        .collect();
    CanonicalForm::from_tokens(synonyms::apply(tokens))
}

/// Normalize each slash-separated segment of `text` on its own.
///
/// Segments that normalize to nothing are skipped. A name without a slash
/// yields a single form equal to [`normalize`]'s.
pub fn normalize_segments(text: &str) -> Vec<CanonicalForm> {
    let folded = fold(&strip_parenthesized(text));
    folded
        .split(SEGMENT_SEPARATOR)
        .map(|segment| CanonicalForm::from_tokens(synonyms::apply(tokenize(segment))))
        .filter(|form| !form.is_empty())
        .collect()
}

/// Remove parenthesized text, parentheses included.
///
/// Nesting is honoured. An unclosed `(` swallows the rest of the input and
/// a stray `)` is dropped.
fn strip_parenthesized(text: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                // Keep "a(b)c" as two words.
                out.push(' ');
            }
            ')' => {
                depth = depth.saturating_sub(1);
                out.push(' ');
            }
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }

    out
}

/// Case-fold and strip diacritics. Characters other than letters, digits
/// and `/` become spaces.
fn fold(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for c in lowered.nfkd().filter(|c| !is_combining_mark(*c)) {
        for c in c.to_lowercase() {
            if let Some((_, expansion)) = LIGATURES.iter().find(|(from, _)| *from == c) {
                out.push_str(expansion);
            } else if c.is_alphanumeric() || c == SEGMENT_SEPARATOR {
                out.push(c);
            } else {
                out.push(' ');
            }
        }
    }

    out
}

fn tokenize(segment: &str) -> Vec<String> {
    segment.split_whitespace().map(str::to_string).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Station-name-like text: Latin letters with accents, punctuation,
    /// brackets and slashes.
    fn name_like() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[a-zA-Z0-9àâçéèêëïîôöûüÿœŒæÉÈ' ’./()-]{0,40}")
            .unwrap()
    }

    /// Words outside the phrase-rule vocabulary, whose rewrites may span
    /// a slash.
    fn words() -> impl Strategy<Value = Vec<String>> {
        let word = "[a-z]{1,8}".prop_filter("phrase-rule token", |w| {
            !matches!(w.as_str(), "am" | "main" | "flughafen" | "frankfurt")
        });
        prop::collection::vec(word, 1..5)
    }

    proptest! {
        /// Normalizing a rendered form changes nothing.
        #[test]
        fn idempotent(s in name_like()) {
            let once = normalize(&s);
            let twice = normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        /// Idempotence holds for arbitrary text too.
        #[test]
        fn idempotent_any_text(s in "\\PC{0,30}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(once.as_str()), once);
        }

        /// Rendered forms contain only lower-case tokens separated by single spaces.
        #[test]
        fn rendering_is_clean(s in name_like()) {
            let form = normalize(&s);
            let rendered = form.as_str();
            prop_assert!(!rendered.starts_with(' '));
            prop_assert!(!rendered.ends_with(' '));
            prop_assert!(!rendered.contains("  "));
            prop_assert!(!rendered.contains('/'));
            prop_assert_eq!(rendered.to_lowercase(), rendered);
        }

        /// Swapping slash segments keeps the token set.
        #[test]
        fn segment_order_irrelevant_for_set(a in words(), b in words()) {
            let left = format!("{} / {}", a.join(" "), b.join(" "));
            let right = format!("{}/{}", b.join(" "), a.join(" "));
            prop_assert_eq!(
                normalize(&left).set_key(),
                normalize(&right).set_key()
            );
        }
    }
}
