//! Stub templates: the literal source/test file bodies written into each
//! scaffolded module.
//!
//! Rendering is literal placeholder substitution, nothing more — no
//! conditionals, no loops, no escaping. Every occurrence of [`PLACEHOLDER`]
//! is replaced with the module name, so substituting the name back yields
//! the original template.

use crate::domain::error::DomainError;
use crate::domain::name::TargetName;

/// The fixed substitution token recognised in stub templates.
pub const PLACEHOLDER: &str = "???";

/// A validated stub template.
///
/// Invariant: contains the placeholder token at least once. Enforced at
/// construction so a template that silently produces identical files for
/// every module is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTemplate {
    text: String,
}

impl StubTemplate {
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if !text.contains(PLACEHOLDER) {
            return Err(DomainError::MissingPlaceholder {
                placeholder: PLACEHOLDER,
            });
        }
        Ok(Self { text })
    }

    /// Render the template for a module by replacing every occurrence of the
    /// placeholder with the module name.
    pub fn render(&self, name: &TargetName) -> String {
        self.text.replace(PLACEHOLDER, name.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_without_placeholder_is_rejected() {
        assert_eq!(
            StubTemplate::new("no token here"),
            Err(DomainError::MissingPlaceholder {
                placeholder: PLACEHOLDER
            })
        );
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let template = StubTemplate::new("class ??? { static let name = \"???\" }").unwrap();
        let name = TargetName::new("AppKit0").unwrap();
        let rendered = template.render(&name);
        assert_eq!(rendered, "class AppKit0 { static let name = \"AppKit0\" }");
        assert!(!rendered.contains(PLACEHOLDER));
    }

    #[test]
    fn substitution_round_trips() {
        let template = StubTemplate::new("import Foundation\n\nfinal class ???Tests {}\n").unwrap();
        let name = TargetName::new("AppUI7").unwrap();
        let rendered = template.render(&name);
        assert_eq!(rendered.replace(name.as_str(), PLACEHOLDER), template.as_str());
    }
}
