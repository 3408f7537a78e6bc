//! The markup template and its closed placeholder vocabulary.

/// Every placeholder the composer recognizes. The set is closed: a template
/// token outside this list passes through composition untouched.
pub const PLACEHOLDERS: [&str; 8] = [
    "invoice_id",
    "invoice_date",
    "customer_name",
    "customer_email",
    "customer_phone",
    "customer_address",
    "tables",
    "total_amount",
];

/// The placeholders a template needs for the document body to appear at
/// all. Their absence is reported, never fatal.
pub const STRUCTURAL_PLACEHOLDERS: [&str; 2] = ["tables", "total_amount"];

/// Renders a placeholder name as its literal template token, `{{name}}`.
pub fn token(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// A markup document with `{{...}}` placeholder tokens.
///
/// The template is plain text to the composer; tokens are matched as full
/// literals including their delimiters, so `{{invoice_id}}` never matches
/// inside `{{invoice_id_legacy}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the template carries the given placeholder token.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.source.contains(&token(name))
    }

    /// Lists the structural placeholders this template is missing.
    pub fn missing_structural(&self) -> Vec<&'static str> {
        STRUCTURAL_PLACEHOLDERS
            .into_iter()
            .filter(|name| !self.has_placeholder(name))
            .collect()
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
