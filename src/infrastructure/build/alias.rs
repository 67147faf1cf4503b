//! Import-shorthand aliases (`@` -> `./src`) used to turn component
//! specifiers into chunk locations.

use std::collections::BTreeMap;

pub const SOURCE_ALIAS: &str = "@";
pub const SOURCE_DIR: &str = "./src";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::empty().with_alias(SOURCE_ALIAS, SOURCE_DIR)
    }
}

impl AliasTable {
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    pub fn with_alias(mut self, prefix: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases
            .insert(prefix.into(), target.into().trim_end_matches('/').to_string());
        self
    }

    /// Rewrite a specifier whose first segment is an alias. Anything else
    /// is returned unchanged.
    pub fn resolve(&self, specifier: &str) -> String {
        let (head, rest) = match specifier.split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (specifier, None),
        };
        match (self.aliases.get(head), rest) {
            (Some(target), Some(rest)) => format!("{target}/{rest}"),
            (Some(target), None) => target.clone(),
            (None, _) => specifier.to_string(),
        }
    }
}
