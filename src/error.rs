//! Errors raised when user input is checked against the catalog.

use thiserror::Error;

/// Errors that can occur while parsing or looking up catalog tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Nothing was supplied.
    #[error("No {category} given")]
    Empty { category: &'static str },

    /// The token does not have the shape of its kind.
    #[error("Malformed {kind}: '{token}'")]
    MalformedToken { kind: &'static str, token: String },

    /// The token is well formed but not in the catalog.
    #[error("Unknown {category}: '{token}'{}", format_suggestions(.suggestions))]
    Unknown {
        category: &'static str,
        token: String,
        suggestions: Vec<&'static str>,
    },

    /// A preferences option name that does not exist.
    #[error("Unknown option: {0}. Valid options: region, instance-type, db-instance-type")]
    UnknownOption(String),
}

fn format_suggestions(suggestions: &[&'static str]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}
