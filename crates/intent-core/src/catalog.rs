//! Signal catalog: the closed set of tracked lead activities, the type
//! bucket each one belongs to, and the point weight it earns when recorded.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ConfigError};

/// Type bucket a signal contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    Engagement,
    Behavioral,
    External,
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalType::Engagement => write!(f, "engagement"),
            SignalType::Behavioral => write!(f, "behavioral"),
            SignalType::External => write!(f, "external"),
        }
    }
}

/// One of the 25 tracked lead activities.
///
/// The type bucket is a fixed property of the category (see
/// [`SignalCategory::signal_type`]); it is never stored or configured
/// independently, which rules out inconsistent category/type pairs at the
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    // Engagement: direct communication with the lead.
    EmailOpen,
    EmailClick,
    EmailReply,
    SmsReply,
    ChatSessionStarted,
    CallConnected,
    CallbackRequested,
    MeetingBooked,
    WebinarAttended,
    // Behavioral: actions taken on our own surfaces.
    ListingViewed,
    ListingSaved,
    ListingShared,
    ReturnVisit,
    SearchPerformed,
    PricingViewed,
    MortgageCalculatorUsed,
    BrochureDownloaded,
    VirtualTourStarted,
    ContactFormSubmitted,
    // External: third-party and market signals.
    PreapprovalObtained,
    CreditInquiry,
    HomeValuationRequested,
    PublicRecordChange,
    SocialMention,
    ReferralReceived,
}

impl SignalCategory {
    /// Every tracked category, in catalog order.
    pub const ALL: [SignalCategory; 25] = [
        SignalCategory::EmailOpen,
        SignalCategory::EmailClick,
        SignalCategory::EmailReply,
        SignalCategory::SmsReply,
        SignalCategory::ChatSessionStarted,
        SignalCategory::CallConnected,
        SignalCategory::CallbackRequested,
        SignalCategory::MeetingBooked,
        SignalCategory::WebinarAttended,
        SignalCategory::ListingViewed,
        SignalCategory::ListingSaved,
        SignalCategory::ListingShared,
        SignalCategory::ReturnVisit,
        SignalCategory::SearchPerformed,
        SignalCategory::PricingViewed,
        SignalCategory::MortgageCalculatorUsed,
        SignalCategory::BrochureDownloaded,
        SignalCategory::VirtualTourStarted,
        SignalCategory::ContactFormSubmitted,
        SignalCategory::PreapprovalObtained,
        SignalCategory::CreditInquiry,
        SignalCategory::HomeValuationRequested,
        SignalCategory::PublicRecordChange,
        SignalCategory::SocialMention,
        SignalCategory::ReferralReceived,
    ];

    /// The fixed type bucket for this category.
    #[must_use]
    pub fn signal_type(self) -> SignalType {
        match self {
            SignalCategory::EmailOpen
            | SignalCategory::EmailClick
            | SignalCategory::EmailReply
            | SignalCategory::SmsReply
            | SignalCategory::ChatSessionStarted
            | SignalCategory::CallConnected
            | SignalCategory::CallbackRequested
            | SignalCategory::MeetingBooked
            | SignalCategory::WebinarAttended => SignalType::Engagement,
            SignalCategory::ListingViewed
            | SignalCategory::ListingSaved
            | SignalCategory::ListingShared
            | SignalCategory::ReturnVisit
            | SignalCategory::SearchPerformed
            | SignalCategory::PricingViewed
            | SignalCategory::MortgageCalculatorUsed
            | SignalCategory::BrochureDownloaded
            | SignalCategory::VirtualTourStarted
            | SignalCategory::ContactFormSubmitted => SignalType::Behavioral,
            SignalCategory::PreapprovalObtained
            | SignalCategory::CreditInquiry
            | SignalCategory::HomeValuationRequested
            | SignalCategory::PublicRecordChange
            | SignalCategory::SocialMention
            | SignalCategory::ReferralReceived => SignalType::External,
        }
    }

    /// Snake-case name, matching the serialized representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SignalCategory::EmailOpen => "email_open",
            SignalCategory::EmailClick => "email_click",
            SignalCategory::EmailReply => "email_reply",
            SignalCategory::SmsReply => "sms_reply",
            SignalCategory::ChatSessionStarted => "chat_session_started",
            SignalCategory::CallConnected => "call_connected",
            SignalCategory::CallbackRequested => "callback_requested",
            SignalCategory::MeetingBooked => "meeting_booked",
            SignalCategory::WebinarAttended => "webinar_attended",
            SignalCategory::ListingViewed => "listing_viewed",
            SignalCategory::ListingSaved => "listing_saved",
            SignalCategory::ListingShared => "listing_shared",
            SignalCategory::ReturnVisit => "return_visit",
            SignalCategory::SearchPerformed => "search_performed",
            SignalCategory::PricingViewed => "pricing_viewed",
            SignalCategory::MortgageCalculatorUsed => "mortgage_calculator_used",
            SignalCategory::BrochureDownloaded => "brochure_downloaded",
            SignalCategory::VirtualTourStarted => "virtual_tour_started",
            SignalCategory::ContactFormSubmitted => "contact_form_submitted",
            SignalCategory::PreapprovalObtained => "preapproval_obtained",
            SignalCategory::CreditInquiry => "credit_inquiry",
            SignalCategory::HomeValuationRequested => "home_valuation_requested",
            SignalCategory::PublicRecordChange => "public_record_change",
            SignalCategory::SocialMention => "social_mention",
            SignalCategory::ReferralReceived => "referral_received",
        }
    }
}

impl std::fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default point weights, applied when no weights file is configured.
///
/// Weights are copied onto each signal at recording time; changing this
/// table later never rescores history.
pub const DEFAULT_WEIGHTS: &[(SignalCategory, f64)] = &[
    (SignalCategory::EmailOpen, 7.0),
    (SignalCategory::EmailClick, 9.0),
    (SignalCategory::EmailReply, 14.0),
    (SignalCategory::SmsReply, 12.0),
    (SignalCategory::ChatSessionStarted, 8.0),
    (SignalCategory::CallConnected, 16.0),
    (SignalCategory::CallbackRequested, 18.0),
    (SignalCategory::MeetingBooked, 25.0),
    (SignalCategory::WebinarAttended, 10.0),
    (SignalCategory::ListingViewed, 5.0),
    (SignalCategory::ListingSaved, 12.0),
    (SignalCategory::ListingShared, 9.0),
    (SignalCategory::ReturnVisit, 10.0),
    (SignalCategory::SearchPerformed, 4.0),
    (SignalCategory::PricingViewed, 30.0),
    (SignalCategory::MortgageCalculatorUsed, 20.0),
    (SignalCategory::BrochureDownloaded, 8.0),
    (SignalCategory::VirtualTourStarted, 15.0),
    (SignalCategory::ContactFormSubmitted, 22.0),
    (SignalCategory::PreapprovalObtained, 28.0),
    (SignalCategory::CreditInquiry, 18.0),
    (SignalCategory::HomeValuationRequested, 20.0),
    (SignalCategory::PublicRecordChange, 12.0),
    (SignalCategory::SocialMention, 5.0),
    (SignalCategory::ReferralReceived, 15.0),
];

/// What `weight_of` does for a category absent from the weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCategoryPolicy {
    /// Fail loudly with [`CatalogError::UnknownCategory`]. The default.
    Error,
    /// Treat the category as a zero-weight no-op and log a warning.
    #[serde(rename = "zero")]
    ZeroWeight,
}

impl std::fmt::Display for UnknownCategoryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnknownCategoryPolicy::Error => write!(f, "error"),
            UnknownCategoryPolicy::ZeroWeight => write!(f, "zero"),
        }
    }
}

/// The active `(category) -> (type, weight)` lookup table.
#[derive(Debug, Clone)]
pub struct SignalCatalog {
    weights: HashMap<SignalCategory, f64>,
    policy: UnknownCategoryPolicy,
}

impl Default for SignalCatalog {
    /// Built-in weight table covering every category, failing loudly on
    /// unknown lookups.
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS.iter().copied().collect(),
            policy: UnknownCategoryPolicy::Error,
        }
    }
}

impl SignalCatalog {
    #[must_use]
    pub fn new(weights: HashMap<SignalCategory, f64>, policy: UnknownCategoryPolicy) -> Self {
        Self { weights, policy }
    }

    /// Built-in weight table with an explicit unknown-category policy.
    #[must_use]
    pub fn with_policy(policy: UnknownCategoryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn policy(&self) -> UnknownCategoryPolicy {
        self.policy
    }

    /// Point weight earned by recording a signal in `category`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] if the category has no
    /// entry in the weight table and the policy is
    /// [`UnknownCategoryPolicy::Error`]. Under
    /// [`UnknownCategoryPolicy::ZeroWeight`] the lookup instead returns
    /// `0.0` and logs a warning.
    pub fn weight_of(&self, category: SignalCategory) -> Result<f64, CatalogError> {
        match self.weights.get(&category) {
            Some(weight) => Ok(*weight),
            None => match self.policy {
                UnknownCategoryPolicy::Error => Err(CatalogError::UnknownCategory(category)),
                UnknownCategoryPolicy::ZeroWeight => {
                    tracing::warn!(
                        category = %category,
                        "category missing from weight table, scoring as zero"
                    );
                    Ok(0.0)
                }
            },
        }
    }

    /// Entries present in the weight table, in catalog order.
    #[must_use]
    pub fn entries(&self) -> Vec<(SignalCategory, SignalType, f64)> {
        SignalCategory::ALL
            .iter()
            .filter_map(|c| self.weights.get(c).map(|w| (*c, c.signal_type(), *w)))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Build the catalog from a weights file, falling back to the built-in
    /// table when no path is configured. The file's `policy` key, when
    /// present, overrides `policy`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails
    /// validation.
    pub fn from_weights_path(
        path: Option<&Path>,
        policy: UnknownCategoryPolicy,
    ) -> Result<Self, ConfigError> {
        match path {
            None => Ok(Self::with_policy(policy)),
            Some(path) => {
                let file = load_weights(path)?;
                Ok(Self {
                    policy: file.policy.unwrap_or(policy),
                    weights: file.weights,
                })
            }
        }
    }
}

/// On-disk weights override. Replaces the built-in table entirely: any
/// category the file omits becomes subject to the unknown-category policy.
#[derive(Debug, Deserialize)]
pub struct WeightsFile {
    pub weights: HashMap<SignalCategory, f64>,
    #[serde(default)]
    pub policy: Option<UnknownCategoryPolicy>,
}

/// Load and validate a weights configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_weights(path: &Path) -> Result<WeightsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WeightsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let weights_file: WeightsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::WeightsFileParse)?;

    validate_weights(&weights_file)?;

    Ok(weights_file)
}

fn validate_weights(weights_file: &WeightsFile) -> Result<(), ConfigError> {
    if weights_file.weights.is_empty() {
        return Err(ConfigError::Validation(
            "weights table must not be empty".to_string(),
        ));
    }

    for (category, weight) in &weights_file.weights {
        if !weight.is_finite() {
            return Err(ConfigError::Validation(format!(
                "category '{category}' has non-finite weight"
            )));
        }
        if *weight < 0.0 {
            return Err(ConfigError::Validation(format!(
                "category '{category}' has negative weight {weight}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_covers_every_category() {
        let catalog = SignalCatalog::default();
        for category in SignalCategory::ALL {
            assert!(
                catalog.weight_of(category).is_ok(),
                "default catalog missing weight for {category}"
            );
        }
        assert_eq!(catalog.len(), SignalCategory::ALL.len());
    }

    #[test]
    fn weight_of_known_category() {
        let catalog = SignalCatalog::default();
        assert_eq!(catalog.weight_of(SignalCategory::PricingViewed).unwrap(), 30.0);
        assert_eq!(catalog.weight_of(SignalCategory::EmailOpen).unwrap(), 7.0);
    }

    #[test]
    fn unknown_category_errors_under_error_policy() {
        let catalog = SignalCatalog::new(HashMap::new(), UnknownCategoryPolicy::Error);
        let err = catalog.weight_of(SignalCategory::EmailOpen).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(SignalCategory::EmailOpen)));
    }

    #[test]
    fn unknown_category_scores_zero_under_zero_policy() {
        let catalog = SignalCatalog::new(HashMap::new(), UnknownCategoryPolicy::ZeroWeight);
        assert_eq!(catalog.weight_of(SignalCategory::EmailOpen).unwrap(), 0.0);
    }

    #[test]
    fn category_type_mapping() {
        assert_eq!(SignalCategory::EmailOpen.signal_type(), SignalType::Engagement);
        assert_eq!(SignalCategory::PricingViewed.signal_type(), SignalType::Behavioral);
        assert_eq!(
            SignalCategory::PreapprovalObtained.signal_type(),
            SignalType::External
        );
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&SignalCategory::PricingViewed).unwrap();
        assert_eq!(json, "\"pricing_viewed\"");
        let back: SignalCategory = serde_json::from_str("\"email_open\"").unwrap();
        assert_eq!(back, SignalCategory::EmailOpen);
    }

    #[test]
    fn display_matches_serialized_name() {
        for category in SignalCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn entries_are_in_catalog_order() {
        let catalog = SignalCatalog::default();
        let entries = catalog.entries();
        assert_eq!(entries.len(), 25);
        assert_eq!(entries[0].0, SignalCategory::EmailOpen);
        assert_eq!(entries[14].0, SignalCategory::PricingViewed);
        assert_eq!(entries[14].2, 30.0);
    }

    #[test]
    fn weights_file_parses_and_overrides_policy() {
        let yaml = "weights:\n  pricing_viewed: 30\n  email_open: 7\npolicy: zero\n";
        let file: WeightsFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.weights.len(), 2);
        assert_eq!(file.policy, Some(UnknownCategoryPolicy::ZeroWeight));
        assert!(validate_weights(&file).is_ok());
    }

    #[test]
    fn weights_file_rejects_unknown_category_name() {
        let yaml = "weights:\n  not_a_category: 10\n";
        let result: Result<WeightsFile, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let yaml = "weights:\n  email_open: -3\n";
        let file: WeightsFile = serde_yaml::from_str(yaml).unwrap();
        let err = validate_weights(&file).unwrap_err();
        assert!(err.to_string().contains("negative weight"));
    }

    #[test]
    fn validate_rejects_non_finite_weight() {
        let yaml = "weights:\n  email_open: .nan\n";
        let file: WeightsFile = serde_yaml::from_str(yaml).unwrap();
        let err = validate_weights(&file).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn validate_rejects_empty_table() {
        let yaml = "weights: {}\n";
        let file: WeightsFile = serde_yaml::from_str(yaml).unwrap();
        let err = validate_weights(&file).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn from_weights_path_none_uses_builtin_table() {
        let catalog =
            SignalCatalog::from_weights_path(None, UnknownCategoryPolicy::ZeroWeight).unwrap();
        assert_eq!(catalog.len(), 25);
        assert_eq!(catalog.policy(), UnknownCategoryPolicy::ZeroWeight);
    }

    #[test]
    fn load_weights_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("weights.yaml");
        assert!(
            path.exists(),
            "weights.yaml missing at {path:?} — required for this test"
        );
        let result = load_weights(&path);
        assert!(result.is_ok(), "failed to load weights.yaml: {result:?}");
        let file = result.unwrap();
        assert_eq!(file.weights.len(), SignalCategory::ALL.len());
        assert_eq!(file.policy, Some(UnknownCategoryPolicy::Error));
    }

    #[test]
    fn policy_display() {
        assert_eq!(UnknownCategoryPolicy::Error.to_string(), "error");
        assert_eq!(UnknownCategoryPolicy::ZeroWeight.to_string(), "zero");
    }
}
