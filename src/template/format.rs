//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Vex.
//! The Vex project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Tag syntax and string-safe formatting for the template engine.
//!
//! A placeholder tag is written `{name}` with an optional option prefix:
//! `{a:name}` requests an indefinite article agreeing with the filled value,
//! `{t5:mask}` caps mask candidates at the top five. Numbered tags
//! (`{person1}`, `{person2}`) are distinct tags that share the fill-in list
//! of their base name. Text outside well-formed tags is left untouched.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{Result, VexError};

/// One parsed placeholder tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VexTag {
    /// Full tag text including braces, e.g. `{a:person1}`.
    pub raw: String,
    /// Option prefix, empty when absent.
    pub options: String,
    /// Tag name, e.g. `person1`.
    pub name: String,
    /// Name with any trailing digits stripped, e.g. `person`.
    pub base: String,
}

impl VexTag {
    /// True when the tag requests an indefinite article.
    pub fn wants_article(&self) -> bool {
        self.options.contains('a')
    }

    /// Top-candidate cap parsed from a `t<N>` option, if present.
    pub fn top_count(&self) -> Option<usize> {
        let pattern = top_count_pattern();
        pattern
            .captures(&self.options)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
    }

    /// True when the tag is a masked-infill tag.
    pub fn is_mask(&self) -> bool {
        self.base == "mask"
    }
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{(?:([A-Za-z0-9_]+):)?([A-Za-z_][A-Za-z0-9_]*)\}")
            .expect("tag pattern is valid")
    })
}

fn top_count_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"t(\d+)").expect("top-count pattern is valid"))
}

/// Strips trailing digits from a tag name.
pub fn strip_number(name: &str) -> &str {
    let stripped = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if stripped.is_empty() {
        name
    } else {
        stripped
    }
}

/// Finds all well-formed tags in a template, in order of appearance.
pub fn find_tags(template: &str) -> Vec<VexTag> {
    tag_pattern()
        .captures_iter(template)
        .map(|caps| {
            let raw = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            let options = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let name = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            VexTag {
                raw: raw.to_string(),
                options: options.to_string(),
                name: name.to_string(),
                base: strip_number(name).to_string(),
            }
        })
        .collect()
}

/// Chooses the indefinite article for a word.
///
/// Initial-letter heuristic; good enough for lexicon vocabulary.
pub fn add_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a') | Some('e') | Some('i') | Some('o') | Some('u') => "an",
        _ => "a",
    }
}

/// Formats a template against a fill-in mapping.
///
/// Tags missing from the mapping keep their literal form when
/// `ignore_missing` is set; otherwise they are a template error. Article
/// tags prepend "a"/"an" agreeing with the filled value.
pub fn format_template(
    template: &str,
    mapping: &BTreeMap<String, String>,
    ignore_missing: bool,
) -> Result<String> {
    let pattern = tag_pattern();
    let mut output = String::with_capacity(template.len());
    let mut cursor = 0usize;
    for caps in pattern.captures_iter(template) {
        let whole = caps.get(0).expect("capture 0 always present");
        let options = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let name = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        output.push_str(&template[cursor..whole.start()]);
        cursor = whole.end();

        match mapping.get(name) {
            Some(value) => {
                if options.contains('a') {
                    output.push_str(add_article(value));
                    output.push(' ');
                }
                output.push_str(value);
            }
            None if ignore_missing => output.push_str(whole.as_str()),
            None => {
                return Err(VexError::template(format!(
                    "no fill-in value for tag '{}'",
                    name
                )))
            }
        }
    }
    output.push_str(&template[cursor..]);
    Ok(output)
}
