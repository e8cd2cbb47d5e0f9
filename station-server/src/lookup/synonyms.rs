//! Abbreviation and synonym rules applied to normalized tokens.
//!
//! Rules live in two static tables so they can be audited in one place:
//! single-token substitutions, and phrase rules that rewrite a short token
//! sequence in a given left context. Every phrase rule must shorten the
//! sequence it rewrites; that is what lets [`apply`] run them to a fixpoint.

/// Context-free token replacements.
///
/// `st.` and `st-` never reach this table as such: punctuation is already a
/// separator by then, so both arrive as `st`.
const TOKEN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("st", "saint"),
    ("sint", "saint"),
    ("ste", "sainte"),
];

/// Rewrite `pattern` as `replacement`, optionally only when the token
/// immediately before the pattern is `after`.
struct PhraseRule {
    after: Option<&'static str>,
    pattern: &'static [&'static str],
    replacement: &'static [&'static str],
}

/// Phrase rules.
///
/// `am main` is the river Main (Frankfurt am Main, Offenbach am Main);
/// the `am` is optional in every station name that carries it. The second
/// rule drops `main` before `flughafen` but only for Frankfurt, whose
/// airport station is listed without the river. A bare `main` anywhere
/// else is left alone.
const PHRASE_RULES: &[PhraseRule] = &[
    PhraseRule {
        after: None,
        pattern: &["am", "main"],
        replacement: &["main"],
    },
    PhraseRule {
        after: Some("frankfurt"),
        pattern: &["main", "flughafen"],
        replacement: &["flughafen"],
    },
];

/// Apply every rule to `tokens`.
///
/// The result is a fixpoint: applying the rules again changes nothing.
pub(crate) fn apply(tokens: Vec<String>) -> Vec<String> {
    let mut tokens: Vec<String> = tokens.into_iter().map(substitute).collect();

    loop {
        let (rewritten, changed) = rewrite_phrases(&tokens);
        if !changed {
            return tokens;
        }
        tokens = rewritten;
    }
}

fn substitute(token: String) -> String {
    TOKEN_SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == token)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(token)
}

/// One left-to-right pass over `tokens`, earliest rule in the table first.
fn rewrite_phrases(tokens: &[String]) -> (Vec<String>, bool) {
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut changed = false;
    let mut i = 0;

    while i < tokens.len() {
        let rule = PHRASE_RULES.iter().find(|rule| {
            let rest = &tokens[i..];
            rest.len() >= rule.pattern.len()
                && rule
                    .pattern
                    .iter()
                    .zip(rest)
                    .all(|(expected, actual)| *expected == actual)
                && rule
                    .after
                    .is_none_or(|after| out.last().is_some_and(|prev| prev == after))
        });

        match rule {
            Some(rule) => {
                out.extend(rule.replacement.iter().map(|t| (*t).to_string()));
                i += rule.pattern.len();
                changed = true;
            }
            None => {
                out.push(tokens[i].clone());
                i += 1;
            }
        }
    }

    (out, changed)
}
