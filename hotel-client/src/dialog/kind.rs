use serde::{Deserialize, Serialize};

/// Visual variant of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    #[default]
    Info,
    Warning,
    Danger,
    Success,
    Error,
}

impl ModalKind {
    pub const ALL: [ModalKind; 5] = [
        Self::Info,
        Self::Warning,
        Self::Danger,
        Self::Success,
        Self::Error,
    ];

    /// Icon name rendered next to the title
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "info-circle",
            Self::Warning => "exclamation-triangle",
            Self::Danger => "exclamation-octagon",
            Self::Success => "check-circle",
            Self::Error => "x-circle",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Info => "Information",
            Self::Warning => "Warning",
            Self::Danger => "Are you sure?",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            Self::Info | Self::Success => "OK",
            Self::Warning => "Continue",
            Self::Danger => "Delete",
            Self::Error => "Close",
        }
    }

    pub fn cancel_label(&self) -> &'static str {
        "Cancel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_labels() {
        for kind in ModalKind::ALL {
            assert!(!kind.icon().is_empty());
            assert!(!kind.default_title().is_empty());
            assert!(!kind.confirm_label().is_empty());
        }
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ModalKind::Danger).unwrap(),
            "\"danger\""
        );
    }
}
