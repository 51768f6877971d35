//! Field name casing
//!
//! Keys in the canonical form are lower camel case. Declared names may be
//! `snake_case` (Rust fields), `PascalCase` or already `camelCase`; all of
//! them map to the same key, and a key that is already lower camel case is
//! returned unchanged.
//!
//! Only identifier-shaped keys are rewritten. Map keys holding data
//! (`"Q1 sales"`, `"north-east"`) and reserved keys starting with `_`
//! (`__hostRef`) pass through as they are.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How declared field names are rewritten into canonical keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingStrategy {
    /// `on_click` / `OnClick` become `onClick`
    #[default]
    LowerCamel,
    /// Names are sent exactly as declared
    Preserve,
}

impl NamingStrategy {
    /// Rewrite a declared name into its canonical key
    pub fn apply<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            NamingStrategy::Preserve => Cow::Borrowed(name),
            NamingStrategy::LowerCamel if !is_identifier(name) || is_lower_camel(name) => {
                Cow::Borrowed(name)
            }
            NamingStrategy::LowerCamel => Cow::Owned(to_lower_camel(name)),
        }
    }
}

/// Letters, digits and inner underscores only
fn is_identifier(name: &str) -> bool {
    !name.starts_with('_') && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

fn is_lower_camel(name: &str) -> bool {
    !name.starts_with(|c: char| c.is_uppercase()) && !name.contains('_')
}

/// Convert a declared identifier to lower camel case.
///
/// Underscores split words; every word after the first gets an uppercase
/// initial. The leading uppercase run of the first word is
/// lowercased, keeping the last capital of an acronym when it starts the
/// next word (`URLValue` becomes `urlValue`, `ID` becomes `id`). Inner
/// capitals are kept as declared.
pub fn to_lower_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for word in name.split('_').filter(|w| !w.is_empty()) {
        if out.is_empty() {
            lower_leading_run(word, &mut out);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }

    out
}

fn lower_leading_run(word: &str, out: &mut String) {
    if !word.starts_with(|c: char| c.is_uppercase()) {
        out.push_str(word);
        return;
    }

    let chars: Vec<char> = word.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if i == 1 && !chars[i].is_uppercase() {
            break;
        }
        if i > 0 && chars.get(i + 1).is_some_and(|next| !next.is_uppercase()) {
            break;
        }
        out.extend(chars[i].to_lowercase());
        i += 1;
    }

    out.extend(&chars[i..]);
}
