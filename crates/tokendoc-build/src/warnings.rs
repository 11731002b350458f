//! Non-fatal build issues.
//!
//! A missing slot inside an instantiated template never aborts a build;
//! it is recorded here and the remaining slots, cards, and sections keep
//! going. Warnings are returned with the build result so callers (and
//! tests) can see exactly which fields were skipped; each one is also
//! emitted through the `log` facade for host-console visibility.

use std::fmt;

use thiserror::Error;

/// A recoverable issue encountered while building the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildWarning {
    /// A card slot was not found inside the instantiated token template;
    /// the field was left unset.
    #[error("unable to find {slot} node for token {token}")]
    SlotNotFound { token: String, slot: CardSlot },

    /// The section-header template has no title slot; the section was
    /// built without a header.
    #[error("unable to find header title for section {section}")]
    HeaderTitleNotFound { section: String },
}

impl BuildWarning {
    /// Record the warning and emit it on the `log` facade.
    pub(crate) fn push(self, warnings: &mut Vec<BuildWarning>) {
        log::warn!("{self}");
        warnings.push(self);
    }
}

/// The five named field slots of a token card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    Name,
    Value,
    Preview,
    Alias,
    Description,
}

impl fmt::Display for CardSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CardSlot::Name => "Token Name",
            CardSlot::Value => "Token Value",
            CardSlot::Preview => "Token Preview",
            CardSlot::Alias => "Token Alias",
            CardSlot::Description => "Token Description",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let warning = BuildWarning::SlotNotFound {
            token: "color.bg".to_string(),
            slot: CardSlot::Preview,
        };
        assert_eq!(
            warning.to_string(),
            "unable to find Token Preview node for token color.bg"
        );

        let warning = BuildWarning::HeaderTitleNotFound {
            section: "Background Colors".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "unable to find header title for section Background Colors"
        );
    }
}
