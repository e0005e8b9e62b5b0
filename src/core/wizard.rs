//! Lead-capture wizard state machine
//!
//! The demo-preview form walks a visitor through two steps: website URL
//! first, then a short business profile. This module holds the pure state
//! machine behind that form:
//!
//! - `CollectingUrl → CollectingProfile → Submitting → Success`
//! - a failed submission returns to `CollectingProfile` with the entered
//!   values preserved
//!
//! URL normalization, business-name suggestion and field validation live
//! here so the component layer stays a thin signal wrapper.

use url::Url;

/// Selector value that enables the matching free-text field.
pub const OTHER: &str = "other";

/// Everything collected on the profile step. `business_name` is pre-filled
/// from the URL's host but stays editable; the `*_other` fields only
/// matter when their parent selector equals [`OTHER`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadProfile {
    pub business_name: String,
    pub email: String,
    pub industry: String,
    pub industry_other: String,
    pub company_size: String,
    pub biggest_challenge: String,
    pub challenge_other: String,
    pub monthly_traffic: String,
    pub notes: String,
}

/// Per-field validation messages for the profile step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileErrors {
    pub business_name: Option<String>,
    pub email: Option<String>,
    pub industry_other: Option<String>,
    pub biggest_challenge: Option<String>,
    pub challenge_other: Option<String>,
    pub monthly_traffic: Option<String>,
}

impl ProfileErrors {
    pub fn is_empty(&self) -> bool {
        self.business_name.is_none()
            && self.email.is_none()
            && self.industry_other.is_none()
            && self.biggest_challenge.is_none()
            && self.challenge_other.is_none()
            && self.monthly_traffic.is_none()
    }
}

/// Where the wizard currently is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WizardState {
    #[default]
    CollectingUrl,
    CollectingProfile,
    Submitting,
    Success {
        preview_url: String,
    },
}

/// The wizard itself: current state plus everything entered so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadWizard {
    state: WizardState,
    url: String,
    suggested_name: String,
    profile: LeadProfile,
    error: Option<String>,
}

impl LeadWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The normalized URL accepted on step one (empty before that).
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn profile(&self) -> &LeadProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut LeadProfile {
        &mut self.profile
    }

    /// Message from the last failed submission, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == WizardState::Submitting
    }

    /// Submit the URL step. On success the wizard stores the normalized
    /// URL, pre-fills the business name suggestion (without clobbering a
    /// name the visitor already edited) and moves to the profile step.
    pub fn submit_url(&mut self, raw: &str) -> Result<(), String> {
        if self.state != WizardState::CollectingUrl {
            return Ok(());
        }

        let normalized = normalize_url(raw)?;
        let suggestion = normalized
            .host_str()
            .map(suggest_business_name)
            .unwrap_or_default();

        if self.profile.business_name.is_empty()
            || self.profile.business_name == self.suggested_name
        {
            self.profile.business_name = suggestion.clone();
        }
        self.suggested_name = suggestion;
        self.url = normalized.to_string();
        self.state = WizardState::CollectingProfile;
        Ok(())
    }

    /// Return to the URL step without losing anything entered so far.
    pub fn back(&mut self) {
        if self.state == WizardState::CollectingProfile {
            self.state = WizardState::CollectingUrl;
        }
    }

    /// Submit the profile step. Validation failures keep the wizard on
    /// the profile step; while a submission is already in flight the call
    /// is rejected with an empty error set so nothing is displayed and
    /// nothing changes.
    pub fn submit_profile(&mut self) -> Result<(), ProfileErrors> {
        if self.state != WizardState::CollectingProfile {
            return Err(ProfileErrors::default());
        }

        let errors = validate_profile(&self.profile);
        if !errors.is_empty() {
            return Err(errors);
        }

        self.error = None;
        self.state = WizardState::Submitting;
        Ok(())
    }

    /// Finish an in-flight submission: `Ok` carries the preview URL,
    /// `Err` the message to surface. A failure returns to the profile
    /// step with every entered value intact.
    pub fn resolve(&mut self, outcome: Result<String, String>) {
        if self.state != WizardState::Submitting {
            return;
        }
        match outcome {
            Ok(preview_url) => {
                self.state = WizardState::Success { preview_url };
            }
            Err(message) => {
                self.error = Some(message);
                self.state = WizardState::CollectingProfile;
            }
        }
    }

    /// Clear everything and start over from the URL step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Normalize and validate a visitor-entered website URL.
///
/// Bare domains (`nike.com`) get `https://` prepended before parsing;
/// inputs that already carry a scheme pass through unchanged. The result
/// must be an absolute http(s) URL with a host.
pub fn normalize_url(raw: &str) -> Result<Url, String> {
    const INVALID: &str = "Please enter a valid URL (e.g., https://example.com)";

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Please enter your website URL".to_string());
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|_| INVALID.to_string())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
        return Err(INVALID.to_string());
    }
    Ok(url)
}

/// Derive a business-name suggestion from a hostname: strip a leading
/// `www.`, keep the first label, capitalize its first letter.
///
/// `www.manuelsbakery.com` becomes `Manuelsbakery`, `shop.acme.io`
/// becomes `Shop`.
pub fn suggest_business_name(host: &str) -> String {
    let host = host.strip_prefix("www.").unwrap_or(host);
    let label = host.split('.').next().unwrap_or(host);
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Minimal plausibility check for an email address: one `@` separating a
/// non-empty local part from a dotted domain, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Validate the profile step. Required: business name, a plausible email,
/// a biggest-challenge and a monthly-traffic selection. The free-text
/// `*_other` fields are required exactly when their parent selector is
/// [`OTHER`].
pub fn validate_profile(profile: &LeadProfile) -> ProfileErrors {
    let mut errors = ProfileErrors::default();

    if profile.business_name.trim().is_empty() {
        errors.business_name = Some("Business name is required".to_string());
    }

    if profile.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(profile.email.trim()) {
        errors.email = Some("Valid email is required".to_string());
    }

    if profile.biggest_challenge.is_empty() {
        errors.biggest_challenge = Some("Please select your biggest challenge".to_string());
    } else if profile.biggest_challenge == OTHER && profile.challenge_other.trim().is_empty() {
        errors.challenge_other = Some("Please describe your challenge".to_string());
    }

    if profile.monthly_traffic.is_empty() {
        errors.monthly_traffic = Some("Please select your monthly traffic".to_string());
    }

    if profile.industry == OTHER && profile.industry_other.trim().is_empty() {
        errors.industry_other = Some("Please specify your industry".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_profile() -> LeadProfile {
        LeadProfile {
            business_name: "Acme".to_string(),
            email: "owner@acme.com".to_string(),
            industry: "retail".to_string(),
            company_size: "1-10".to_string(),
            biggest_challenge: "support".to_string(),
            monthly_traffic: "1k-10k".to_string(),
            ..LeadProfile::default()
        }
    }

    #[test]
    fn test_bare_domain_gets_https_prepended() {
        let url = normalize_url("nike.com").unwrap();
        assert_eq!(url.as_str(), "https://nike.com/");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("nike.com"));
    }

    #[test]
    fn test_existing_scheme_is_preserved() {
        let url = normalize_url("http://nike.com").unwrap();
        assert_eq!(url.scheme(), "http");

        let url = normalize_url("https://shop.acme.io/catalog").unwrap();
        assert_eq!(url.host_str(), Some("shop.acme.io"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let url = normalize_url("  acme.com  ").unwrap();
        assert_eq!(url.host_str(), Some("acme.com"));
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        assert!(normalize_url("").is_err());
        assert!(normalize_url("   ").is_err());
        assert!(normalize_url("not a url").is_err());
        assert!(normalize_url("ftp://acme.com").is_err());
        assert!(normalize_url("https://").is_err());
    }

    #[test]
    fn test_business_name_suggestions() {
        assert_eq!(suggest_business_name("www.manuelsbakery.com"), "Manuelsbakery");
        assert_eq!(suggest_business_name("shop.acme.io"), "Shop");
        assert_eq!(suggest_business_name("acme.com"), "Acme");
        assert_eq!(suggest_business_name("localhost"), "Localhost");
    }

    #[test]
    fn test_email_plausibility() {
        assert!(is_valid_email("owner@acme.com"));
        assert!(is_valid_email("a.b+tag@sub.acme.io"));
        assert!(!is_valid_email("owner"));
        assert!(!is_valid_email("owner@acme"));
        assert!(!is_valid_email("@acme.com"));
        assert!(!is_valid_email("owner@.com"));
        assert!(!is_valid_email("owner @acme.com"));
    }

    #[test]
    fn test_submit_url_moves_to_profile_with_suggestion() {
        let mut wizard = LeadWizard::new();
        wizard.submit_url("https://acme.com").unwrap();

        assert_eq!(wizard.state(), &WizardState::CollectingProfile);
        assert_eq!(wizard.url(), "https://acme.com/");
        assert_eq!(wizard.profile().business_name, "Acme");
    }

    #[test]
    fn test_submit_url_rejects_garbage_and_stays_put() {
        let mut wizard = LeadWizard::new();
        let err = wizard.submit_url("not a url").unwrap_err();
        assert!(err.contains("valid URL"));
        assert_eq!(wizard.state(), &WizardState::CollectingUrl);
    }

    #[test]
    fn test_edited_business_name_survives_url_resubmission() {
        let mut wizard = LeadWizard::new();
        wizard.submit_url("acme.com").unwrap();
        wizard.profile_mut().business_name = "Acme Holdings".to_string();

        wizard.back();
        wizard.submit_url("nike.com").unwrap();

        assert_eq!(wizard.profile().business_name, "Acme Holdings");
    }

    #[test]
    fn test_unedited_suggestion_follows_url_change() {
        let mut wizard = LeadWizard::new();
        wizard.submit_url("acme.com").unwrap();
        assert_eq!(wizard.profile().business_name, "Acme");

        wizard.back();
        wizard.submit_url("nike.com").unwrap();
        assert_eq!(wizard.profile().business_name, "Nike");
    }

    #[test]
    fn test_back_keeps_url_and_profile() {
        let mut wizard = LeadWizard::new();
        wizard.submit_url("acme.com").unwrap();
        wizard.profile_mut().email = "owner@acme.com".to_string();

        wizard.back();
        assert_eq!(wizard.state(), &WizardState::CollectingUrl);
        assert_eq!(wizard.url(), "https://acme.com/");
        assert_eq!(wizard.profile().email, "owner@acme.com");
    }

    #[test]
    fn test_missing_challenge_blocks_submission() {
        let mut wizard = LeadWizard::new();
        wizard.submit_url("acme.com").unwrap();
        *wizard.profile_mut() = LeadProfile {
            biggest_challenge: String::new(),
            ..filled_profile()
        };

        let errors = wizard.submit_profile().unwrap_err();
        assert!(errors.biggest_challenge.is_some());
        assert_eq!(wizard.state(), &WizardState::CollectingProfile);
    }

    #[test]
    fn test_other_fields_required_when_parent_is_other() {
        let mut profile = filled_profile();
        profile.industry = OTHER.to_string();
        profile.biggest_challenge = OTHER.to_string();

        let errors = validate_profile(&profile);
        assert!(errors.industry_other.is_some());
        assert!(errors.challenge_other.is_some());

        profile.industry_other = "Aerospace".to_string();
        profile.challenge_other = "After-hours support".to_string();
        assert!(validate_profile(&profile).is_empty());
    }

    #[test]
    fn test_other_fields_ignored_when_parent_is_not_other() {
        let profile = LeadProfile {
            industry_other: String::new(),
            challenge_other: String::new(),
            ..filled_profile()
        };
        assert!(validate_profile(&profile).is_empty());
    }

    #[test]
    fn test_double_submit_is_rejected_while_submitting() {
        let mut wizard = LeadWizard::new();
        wizard.submit_url("acme.com").unwrap();
        *wizard.profile_mut() = filled_profile();

        wizard.submit_profile().unwrap();
        assert!(wizard.is_submitting());

        let second = wizard.submit_profile();
        assert!(second.is_err());
        assert!(second.unwrap_err().is_empty());
        assert!(wizard.is_submitting());
    }

    #[test]
    fn test_failure_returns_to_profile_with_values_intact() {
        let mut wizard = LeadWizard::new();
        wizard.submit_url("acme.com").unwrap();
        *wizard.profile_mut() = filled_profile();
        let before = wizard.profile().clone();

        wizard.submit_profile().unwrap();
        wizard.resolve(Err("X".to_string()));

        assert_eq!(wizard.state(), &WizardState::CollectingProfile);
        assert_eq!(wizard.last_error(), Some("X"));
        assert_eq!(wizard.profile(), &before);
    }

    #[test]
    fn test_resolve_ignored_outside_submitting() {
        let mut wizard = LeadWizard::new();
        wizard.resolve(Ok("https://preview.example/acme".to_string()));
        assert_eq!(wizard.state(), &WizardState::CollectingUrl);
    }

    #[test]
    fn test_successful_run_end_to_end() {
        let mut wizard = LeadWizard::new();
        wizard.submit_url("https://acme.com").unwrap();
        assert_eq!(wizard.profile().business_name, "Acme");

        wizard.profile_mut().email = "owner@acme.com".to_string();
        wizard.profile_mut().biggest_challenge = "support".to_string();
        wizard.profile_mut().monthly_traffic = "1k-10k".to_string();

        wizard.submit_profile().unwrap();
        wizard.resolve(Ok("https://preview.example/acme".to_string()));

        assert_eq!(
            wizard.state(),
            &WizardState::Success {
                preview_url: "https://preview.example/acme".to_string()
            }
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut wizard = LeadWizard::new();
        wizard.submit_url("acme.com").unwrap();
        *wizard.profile_mut() = filled_profile();
        wizard.submit_profile().unwrap();
        wizard.resolve(Ok("https://preview.example/acme".to_string()));

        wizard.reset();
        assert_eq!(wizard, LeadWizard::new());
    }
}
