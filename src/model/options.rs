//! Option storage for a single section.

use std::collections::HashMap;

/// The name/value pairs of one section.
///
/// Created by its owning [`Document`](crate::Document) and never shared
/// between documents or sections. When the document is ordered, an
/// auxiliary list of names keeps first-insertion order alongside the map.
#[derive(Debug, Clone)]
pub struct OptionSet {
    ordered: bool,
    option_order: Vec<String>,
    options: HashMap<String, String>,
}

impl OptionSet {
    pub(crate) fn new(ordered: bool) -> Self {
        OptionSet {
            ordered,
            option_order: Vec::new(),
            options: HashMap::new(),
        }
    }

    /// Check if an option with the given name exists.
    pub fn exists(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Set an option, overwriting any previous value. Always returns true.
    ///
    /// In ordered mode a name keeps the position of its first insertion;
    /// re-adding only updates the value.
    pub fn add(&mut self, name: &str, value: &str) -> bool {
        if self.ordered && !self.exists(name) {
            self.option_order.push(name.to_string());
        }
        self.options.insert(name.to_string(), value.to_string());
        true
    }

    /// Get the value stored under `name`, or `None` if it is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Remove an option. Returns false (and mutates nothing) if it is absent.
    pub fn remove(&mut self, name: &str) -> bool {
        if self.options.remove(name).is_none() {
            return false;
        }
        if self.ordered {
            // Names are unique, so at most one entry matches.
            if let Some(pos) = self.option_order.iter().position(|n| n == name) {
                self.option_order.remove(pos);
            }
        }
        true
    }

    /// List option names: first-insertion order when ordered, map iteration
    /// order otherwise (no stability guarantee across runs).
    pub fn option_names(&self) -> Vec<&str> {
        if self.ordered {
            self.option_order.iter().map(String::as_str).collect()
        } else {
            self.options.keys().map(String::as_str).collect()
        }
    }

    /// Number of options in this set.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
