//! Variable Expansion
//!
//! Replaces `$NAME` and `${NAME}` references in raw command text before the
//! text reaches the interpreter. Unknown names are left untouched.

use std::collections::HashMap;

use regex::{Captures, Regex};

lazy_static::lazy_static! {
    static ref VAR_REF: Regex = Regex::new(r"\$(\w+)|\$\{(\w+)\}").unwrap();
}

/// Expand environment references in `text` using `env`.
pub fn expand_env_vars(text: &str, env: &HashMap<String, String>) -> String {
    VAR_REF
        .replace_all(text, |caps: &Captures| {
            let whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            env.get(name).cloned().unwrap_or_else(|| whole.to_string())
        })
        .into_owned()
}

/// Snapshot the process environment for expansion.
///
/// When `HOME` is unset but `USERPROFILE` is present, `HOME` takes its value.
pub fn process_env() -> HashMap<String, String> {
    let mut env: HashMap<String, String> = std::env::vars().collect();
    with_home_fallback(&mut env);
    env
}

fn with_home_fallback(env: &mut HashMap<String, String>) {
    if !env.contains_key("HOME") {
        if let Some(profile) = env.get("USERPROFILE").cloned() {
            env.insert("HOME".to_string(), profile);
        }
    }
}
