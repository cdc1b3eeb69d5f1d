//! The root container holding all sections of an INI document.

use std::collections::HashMap;

use super::options::OptionSet;

/// An in-memory INI document: a mapping from section name to its options.
///
/// The `ordered` flag is fixed at construction. When true, `sections()` and
/// `options()` iterate in first-insertion order at the cost of keeping the
/// name lists alongside the maps; when false, iteration order is whatever
/// the maps yield.
#[derive(Debug, Clone)]
pub struct Document {
    ordered: bool,
    section_order: Vec<String>,
    sections: HashMap<String, OptionSet>,
}

impl Document {
    /// Create an empty document.
    pub fn new(ordered: bool) -> Self {
        Document {
            ordered,
            section_order: Vec::new(),
            sections: HashMap::new(),
        }
    }

    /// Whether this document preserves insertion order.
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Check if a section with the given name exists.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Check if an option exists in the given section. False when the
    /// section itself is absent.
    pub fn has_option(&self, section: &str, name: &str) -> bool {
        self.sections
            .get(section)
            .map(|opts| opts.exists(name))
            .unwrap_or(false)
    }

    /// Add an empty section. Returns false (and mutates nothing) if a
    /// section with that name already exists.
    pub fn add_section(&mut self, name: &str) -> bool {
        if self.has_section(name) {
            return false;
        }
        self.sections
            .insert(name.to_string(), OptionSet::new(self.ordered));
        if self.ordered {
            self.section_order.push(name.to_string());
        }
        true
    }

    /// Set an option, creating the section first if it does not exist.
    /// Always returns true.
    pub fn add_option(&mut self, section: &str, name: &str, value: &str) -> bool {
        if !self.has_section(section) {
            self.add_section(section);
        }
        match self.sections.get_mut(section) {
            Some(opts) => opts.add(name, value),
            None => false,
        }
    }

    /// Get an option value, or `None` if the section or option is absent.
    pub fn get_option(&self, section: &str, name: &str) -> Option<&str> {
        self.sections.get(section)?.get(name)
    }

    /// Borrow a section's option set, or `None` if it is absent.
    pub fn section(&self, name: &str) -> Option<&OptionSet> {
        self.sections.get(name)
    }

    /// Remove a section and everything in it. Returns false if it is absent.
    pub fn remove_section(&mut self, name: &str) -> bool {
        if self.sections.remove(name).is_none() {
            return false;
        }
        if self.ordered {
            // Section names are unique, so at most one entry matches.
            if let Some(pos) = self.section_order.iter().position(|n| n == name) {
                self.section_order.remove(pos);
            }
        }
        true
    }

    /// Remove a single option. Returns false if the section or option is
    /// absent.
    pub fn remove_option(&mut self, section: &str, name: &str) -> bool {
        match self.sections.get_mut(section) {
            Some(opts) => opts.remove(name),
            None => false,
        }
    }

    /// List section names: first-insertion order when ordered, map
    /// iteration order otherwise.
    pub fn sections(&self) -> Vec<&str> {
        if self.ordered {
            self.section_order.iter().map(String::as_str).collect()
        } else {
            self.sections.keys().map(String::as_str).collect()
        }
    }

    /// List option names in a section; an absent section yields an empty
    /// list, not an error.
    pub fn options(&self, section: &str) -> Vec<&str> {
        self.sections
            .get(section)
            .map(|opts| opts.option_names())
            .unwrap_or_default()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_document() {
        let mut doc = Document::new(true);

        assert!(doc.add_option("section1", "option1", "value1"));
        assert!(doc.add_option("section1", "option2", "value2"));
        assert!(doc.add_option("section1", "option2", "value2_modified"));
        assert!(doc.add_option("section2", "option1", "value1"));
        assert!(doc.add_option("section2", "option2", "value2"));

        assert!(doc.add_section("section3"));
        assert!(!doc.add_section("section3"));

        assert_eq!(doc.sections(), vec!["section1", "section2", "section3"]);
        assert_eq!(doc.options("section1"), vec!["option1", "option2"]);
        assert_eq!(doc.options("section2"), vec!["option1", "option2"]);
        assert!(doc.options("section3").is_empty());

        assert_eq!(doc.get_option("section1", "option1"), Some("value1"));
        assert_eq!(
            doc.get_option("section1", "option2"),
            Some("value2_modified")
        );
        assert_eq!(doc.get_option("section1", "doesnotexist"), None);
        assert_eq!(doc.get_option("section3", "doesnotexist"), None);

        assert!(doc.add_option("section3", "option1", "value1"));
        assert_eq!(doc.options("section3"), vec!["option1"]);

        assert!(doc.remove_section("section3"));
        assert!(!doc.remove_section("doesntexist"));
        assert_eq!(doc.sections(), vec!["section1", "section2"]);

        assert!(doc.remove_option("section1", "option1"));
        assert_eq!(doc.options("section1"), vec!["option2"]);
        assert_eq!(
            doc.get_option("section1", "option2"),
            Some("value2_modified")
        );
    }

    #[test]
    fn test_unordered_document() {
        let mut doc = Document::new(false);

        assert!(doc.add_option("section1", "option1", "value1"));
        assert!(doc.add_option("section1", "option2", "value2"));
        assert!(doc.add_option("section1", "option2", "value2_modified"));
        assert!(doc.add_option("section2", "option1", "value1"));

        assert!(doc.add_section("section3"));
        assert!(!doc.add_section("section3"));

        let mut sections = doc.sections();
        sections.sort_unstable();
        assert_eq!(sections, vec!["section1", "section2", "section3"]);

        let mut options = doc.options("section1");
        options.sort_unstable();
        assert_eq!(options, vec!["option1", "option2"]);

        assert_eq!(
            doc.get_option("section1", "option2"),
            Some("value2_modified")
        );

        assert!(doc.remove_section("section3"));
        assert!(!doc.remove_section("doesntexist"));
        assert_eq!(doc.section_count(), 2);
    }

    #[test]
    fn test_implicit_section_creation() {
        let mut doc = Document::new(true);
        assert!(!doc.has_section("new"));

        assert!(doc.add_option("new", "k", "v"));
        assert!(doc.has_section("new"));
        assert!(doc.has_option("new", "k"));
        assert_eq!(doc.get_option("new", "k"), Some("v"));
        assert_eq!(doc.section("new").map(|s| s.len()), Some(1));
        assert!(doc.section("other").is_none());
    }

    #[test]
    fn test_remove_on_absent_section() {
        let mut doc = Document::new(true);
        doc.add_option("s", "k", "v");

        assert!(!doc.remove_option("other", "k"));
        assert!(!doc.has_option("other", "k"));
        assert!(doc.options("other").is_empty());
        assert_eq!(doc.sections(), vec!["s"]);
    }

    #[test]
    fn test_order_survives_interleaved_mutation() {
        let mut doc = Document::new(true);
        doc.add_section("a");
        doc.add_section("b");
        doc.add_section("c");
        doc.remove_section("b");
        doc.add_section("d");
        doc.add_option("a", "k", "v2");

        assert_eq!(doc.sections(), vec!["a", "c", "d"]);
    }
}
