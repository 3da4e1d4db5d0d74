use serde::{Deserialize, Serialize};

/// One independently fetched category of reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataDomain {
    Series,
    CustomFilters,
    Tags,
    QualityProfiles,
    LanguageProfiles,
    UiSettings,
}

impl DataDomain {
    /// Every tracked domain, in display order
    pub const ALL: [DataDomain; 6] = [
        DataDomain::Series,
        DataDomain::CustomFilters,
        DataDomain::Tags,
        DataDomain::QualityProfiles,
        DataDomain::LanguageProfiles,
        DataDomain::UiSettings,
    ];

    /// Position of the domain inside `ALL`
    pub fn index(self) -> usize {
        match self {
            DataDomain::Series => 0,
            DataDomain::CustomFilters => 1,
            DataDomain::Tags => 2,
            DataDomain::QualityProfiles => 3,
            DataDomain::LanguageProfiles => 4,
            DataDomain::UiSettings => 5,
        }
    }

    /// Stable machine name, used for file names and logs
    pub fn key(self) -> &'static str {
        match self {
            DataDomain::Series => "series",
            DataDomain::CustomFilters => "custom_filters",
            DataDomain::Tags => "tags",
            DataDomain::QualityProfiles => "quality_profiles",
            DataDomain::LanguageProfiles => "language_profiles",
            DataDomain::UiSettings => "ui_settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DataDomain::Series => "Series",
            DataDomain::CustomFilters => "Custom Filters",
            DataDomain::Tags => "Tags",
            DataDomain::QualityProfiles => "Quality Profiles",
            DataDomain::LanguageProfiles => "Language Profiles",
            DataDomain::UiSettings => "UI Settings",
        }
    }
}

impl std::fmt::Display for DataDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error reported by a domain's fetch machinery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
    pub status: Option<u16>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Load state of a single domain as seen by the coordinator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainStatus {
    pub is_populated: bool,
    pub error: Option<ErrorInfo>,
}

impl DomainStatus {
    pub fn unpopulated() -> Self {
        Self::default()
    }

    pub fn populated() -> Self {
        Self {
            is_populated: true,
            error: None,
        }
    }

    /// A fetch that completed with an error still counts as a finished attempt
    pub fn failed(error: ErrorInfo) -> Self {
        Self {
            is_populated: true,
            error: Some(error),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of a successful domain load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPayload {
    pub domain: DataDomain,
    pub item_count: usize,
    /// Only present when `domain` is `UiSettings`
    pub ui_settings: Option<super::chrome::UiSettings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, domain) in DataDomain::ALL.iter().enumerate() {
            assert_eq!(domain.index(), i);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: std::collections::HashSet<_> = DataDomain::ALL.iter().map(|d| d.key()).collect();
        assert_eq!(keys.len(), DataDomain::ALL.len());
    }

    #[test]
    fn test_failed_status_counts_as_error() {
        let status = DomainStatus::failed(ErrorInfo::with_status(500, "Internal Server Error"));
        assert!(status.has_error());
        assert!(!DomainStatus::populated().has_error());
    }

    #[test]
    fn test_error_info_display() {
        assert_eq!(ErrorInfo::with_status(500, "boom").to_string(), "boom (500)");
        assert_eq!(ErrorInfo::new("offline").to_string(), "offline");
    }
}
