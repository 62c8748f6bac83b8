use std::collections::HashMap;

use serde::Deserialize;

use crate::foundation::error::{ThemeResult, ThemeverterError};

/// `scope` of a token-color rule: one selector string or a list of them.
///
/// A single string may itself hold a comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ScopeSelector {
    One(String),
    Many(Vec<String>),
}

impl ScopeSelector {
    /// Individual scope strings, trimmed, in source order.
    pub(crate) fn scopes(&self) -> Vec<&str> {
        let parts: Vec<&str> = match self {
            Self::One(s) => s.split(',').collect(),
            Self::Many(v) => v.iter().flat_map(|s| s.split(',')).collect(),
        };
        parts
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// All scopes joined the way the rule groups them (`"a, b"`).
    pub(crate) fn joined(&self) -> String {
        self.scopes().join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct TokenSettings {
    #[serde(default)]
    pub(crate) foreground: Option<String>,
    #[serde(default)]
    pub(crate) background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct TokenColorRule {
    #[serde(default)]
    pub(crate) scope: Option<ScopeSelector>,
    #[serde(default)]
    pub(crate) settings: TokenSettings,
}

/// Lookup from scope string to the token-color rule that styles it.
///
/// Built once per parse. Every rule is reachable under each of its individual scopes and under
/// its joined scope key. When two rules claim the same key the later rule wins.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScopeIndex {
    rules: Vec<TokenColorRule>,
    by_scope: HashMap<String, usize>,
    global: Option<usize>,
}

impl ScopeIndex {
    pub(crate) fn build(rules: Vec<TokenColorRule>) -> Self {
        let mut by_scope = HashMap::new();
        let mut global = None;
        for (idx, rule) in rules.iter().enumerate() {
            let Some(selector) = &rule.scope else {
                // tmTheme-style global settings carry no scope; keep the first one.
                global.get_or_insert(idx);
                continue;
            };
            let scopes = selector.scopes();
            if scopes.len() > 1 {
                by_scope.insert(selector.joined(), idx);
            }
            for scope in scopes {
                by_scope.insert(scope.to_owned(), idx);
            }
        }
        Self {
            rules,
            by_scope,
            global,
        }
    }

    pub(crate) fn get(&self, scope: &str) -> Option<&TokenColorRule> {
        self.by_scope.get(scope).map(|&idx| &self.rules[idx])
    }

    pub(crate) fn lookup(&self, scope: &str) -> ThemeResult<&TokenColorRule> {
        self.get(scope)
            .ok_or_else(|| ThemeverterError::missing_scope(scope))
    }

    /// Foreground of the rule for `scope`; a rule without a foreground counts as missing.
    pub(crate) fn foreground(&self, scope: &str) -> ThemeResult<&str> {
        self.lookup(scope)?
            .settings
            .foreground
            .as_deref()
            .ok_or_else(|| ThemeverterError::missing_scope(format!("{scope} (no foreground)")))
    }

    /// First rule without a scope, if any.
    pub(crate) fn global(&self) -> Option<&TokenColorRule> {
        self.global.map(|idx| &self.rules[idx])
    }

    pub(crate) fn len_keys(&self) -> usize {
        self.by_scope.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/scope_index.rs"]
mod tests;
