//! Static dictionary validation.
//!
//! Catalogs are authored by hand, so templates can carry broken placeholder
//! syntax that would silently render wrong at lookup time. The validator
//! walks a [`Dictionary`] once and reports problems up front: unbalanced
//! braces are errors, suspicious placeholder names and empty namespaces are
//! warnings.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::adapters::static_dict::Dictionary;

/// Placeholder pattern matcher (compiled once)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{([^{}]*)\}\}").expect("placeholder regex should compile")
    })
}

/// Outcome of validating a dictionary.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    /// Problems that make a template render incorrectly.
    pub errors: Vec<String>,

    /// Suspicious constructs that still render.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether any errors were found.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether any warnings were found.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether the dictionary passed without errors or warnings.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn warning(&mut self, message: String) {
        self.warnings.push(message);
    }
}

/// Walks dictionaries and reports template problems.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Validate every template in the dictionary.
    ///
    /// # Arguments
    /// * `dictionary` - The catalog to check
    ///
    /// # Returns
    /// A report listing errors (unbalanced braces) and warnings (empty or
    /// whitespace placeholder names, empty namespaces).
    pub fn validate(dictionary: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (namespace, entries) in dictionary {
            if namespace.trim().is_empty() {
                report.warning("namespace with empty name".to_string());
            }
            if entries.is_empty() {
                report.warning(format!("namespace '{}' has no entries", namespace));
            }

            for (key, template) in entries {
                Self::check_template(namespace, key, template, &mut report);
            }
        }

        report
    }

    fn check_template(namespace: &str, key: &str, template: &str, report: &mut ValidationReport) {
        let opens = template.matches("{{").count();
        let closes = template.matches("}}").count();
        if opens != closes {
            report.error(format!(
                "unbalanced placeholder braces in '{}:{}' ({} opening, {} closing)",
                namespace, key, opens, closes
            ));
            return;
        }

        for captures in placeholder_regex().captures_iter(template) {
            let name = &captures[1];
            if name.is_empty() {
                report.warning(format!("empty placeholder name in '{}:{}'", namespace, key));
            } else if name.chars().any(char::is_whitespace) {
                report.warning(format!(
                    "placeholder name '{}' in '{}:{}' contains whitespace",
                    name, namespace, key
                ));
            }
        }
    }
}
