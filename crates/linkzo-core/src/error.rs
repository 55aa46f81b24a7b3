//! Error types for Linkzo.

/// Result type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A submission was missing one or more required fields.
///
/// The `Display` text is the fixed message returned to the submitter; the
/// `missing` list is for logs only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A company order lacked a required field.
    #[error("All fields are required")]
    IncompleteCompanyOrder {
        /// Names of the missing or empty fields.
        missing: Vec<&'static str>,
    },

    /// A creator registration lacked a required field.
    #[error("Name, email, niche, and audience size are required")]
    IncompleteCreatorRegistration {
        /// Names of the missing or empty fields.
        missing: Vec<&'static str>,
    },
}

impl ValidationError {
    /// Names of the fields that failed the presence check.
    #[must_use]
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::IncompleteCompanyOrder { missing }
            | Self::IncompleteCreatorRegistration { missing } => missing,
        }
    }
}

/// Take a required field, recording its name if it is absent or empty.
pub(crate) fn require(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
