//! # AAP Certificate Generator
//!
//! Client certificates for AAP installations, issued from a private CA. The
//! presets set validity and subject fields per environment.

use super::acm_private_ca::analytics_subject;
use crate::model::common::require;
use crate::model::{CertificateGenerator, Validity};
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

impl Tool for CertificateGenerator {
    const NAME: &'static str = "aap_certificate_generator";
    const MODULE: &'static str = "aap_certificate_generator";
    const CATEGORY: ToolCategory = ToolCategory::Security;
    const DESCRIPTION: &'static str = "Generate client certificates for AAP installations";
    const TAGS_KEY: Option<&'static str> = None;

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        require(Self::NAME, "customer_id", &self.customer_id)?;
        require(Self::NAME, "installation_id", &self.installation_id)?;
        require(Self::NAME, "ca_arn", &self.ca_arn)?;

        let subject = self
            .subject_additional_fields
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(analytics_subject);

        let mut args = ModuleArgs::new();
        args.insert("customer_id", &self.customer_id)
            .insert("installation_id", &self.installation_id)
            .insert("ca_arn", &self.ca_arn)
            .insert("key_size", self.key_size.unwrap_or(2048))
            .insert(
                "signing_algorithm",
                self.signing_algorithm.as_deref().unwrap_or("SHA256WITHRSA"),
            )
            .insert("store_private_key", self.store_private_key.unwrap_or(false))
            .insert("output_format", self.output_format.as_deref().unwrap_or("pem"))
            .insert(
                "validity_period",
                self.validity_period.unwrap_or(Validity::days(730)),
            )
            .insert("subject_additional_fields", &subject)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Certificate for a real installation: two years in production, 90 days elsewhere.
///
/// The environment is recorded as the subject's `State` field.
pub fn aap_certificate(
    customer_id: &str,
    installation_id: &str,
    ca_arn: &str,
    environment: &str,
) -> CertificateGenerator {
    let days = if environment == "production" { 730 } else { 90 };
    let mut subject = analytics_subject();
    subject.insert("State".into(), title_case(environment));

    CertificateGenerator {
        validity_period: Some(Validity::days(days)),
        subject_additional_fields: Some(subject),
        ..CertificateGenerator::new(customer_id, installation_id, ca_arn)
    }
}

/// Short-lived certificate for test installations.
pub fn test_certificate(customer_id: &str, installation_id: &str, ca_arn: &str) -> CertificateGenerator {
    let mut subject = analytics_subject();
    subject.insert("OrganizationalUnit".into(), "Ansible Analytics - Testing".into());

    CertificateGenerator {
        validity_period: Some(Validity::days(30)),
        subject_additional_fields: Some(subject),
        ..CertificateGenerator::new(customer_id, installation_id, ca_arn)
    }
}
