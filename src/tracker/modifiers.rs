// src/tracker/modifiers.rs

/// Ordered filter map: key → human-readable value.
/// Keys are unique and iterate in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    entries: Vec<(String, String)>,
}

impl Modifiers {
    pub fn new() -> Self { Self { entries: Vec::new() } }

    /// Build from raw `key:value` tokens, in the order received.
    /// Duplicate keys are merged as `"first, second"`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut out = Self::new();
        for tok in tokens {
            let (key, value) = split_token(tok.as_ref());
            out.merge(key, &value);
        }
        out
    }

    pub fn merge(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            None => self.entries.push((s!(key), s!(value))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Split on the first ':'; quote characters are stripped from the value.
/// A token without ':' is all key, empty value.
fn split_token(token: &str) -> (&str, String) {
    match token.split_once(':') {
        Some((key, value)) => (key, value.replace('"', "")),
        None => (token, s!()),
    }
}
