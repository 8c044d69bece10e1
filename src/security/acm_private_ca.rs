use crate::model::{AcmPrivateCa, Subject, Validity};
use tool_framework::{ModuleArgs, NormalizeError, ResolutionMode, Tool, ToolCategory};

/// Subject fields shared by every certificate issued for AAP metrics.
pub(crate) fn analytics_subject() -> Subject {
    [
        ("Country", "US"),
        ("Organization", "Red Hat Inc"),
        ("OrganizationalUnit", "Ansible Analytics"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Subject used when a CA is created without one.
pub fn default_ca_subject() -> Subject {
    let mut subject = analytics_subject();
    subject.insert("CommonName".into(), "AAP Metrics CA".into());
    subject
}

impl Tool for AcmPrivateCa {
    const NAME: &'static str = "acm_private_ca";
    const MODULE: &'static str = "acm_private_ca";
    const CATEGORY: ToolCategory = ToolCategory::Security;
    const DESCRIPTION: &'static str = "Manage AWS Certificate Manager Private Certificate Authority";

    fn module_args(&self, _mode: ResolutionMode) -> Result<ModuleArgs, NormalizeError> {
        let subject = self.subject.clone().unwrap_or_else(default_ca_subject);
        let validity = self.validity_period.unwrap_or(Validity::years(10));

        let mut args = ModuleArgs::new();
        args.insert("state", self.state)
            .insert("type", self.ca_type.as_deref().unwrap_or("ROOT"))
            .insert(
                "key_algorithm",
                self.key_algorithm.as_deref().unwrap_or("RSA_2048"),
            )
            .insert(
                "signing_algorithm",
                self.signing_algorithm.as_deref().unwrap_or("SHA256WITHRSA"),
            )
            .insert(
                "usage_mode",
                self.usage_mode.as_deref().unwrap_or("GENERAL_PURPOSE"),
            )
            .insert("subject", &subject)
            .insert("validity", validity)
            .insert_present("tags", &self.tags)
            .insert_present("certificate", &self.ca_certificate)
            .insert_present("certificate_chain", &self.ca_certificate_chain)
            .insert_present("region", &self.region)
            .merge_extra(&self.extra);
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValidityUnit;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_subject_and_validity() {
        let args = AcmPrivateCa::default().normalize().unwrap();
        assert_eq!(
            args.into_value(),
            json!({
                "state": "present",
                "type": "ROOT",
                "key_algorithm": "RSA_2048",
                "signing_algorithm": "SHA256WITHRSA",
                "usage_mode": "GENERAL_PURPOSE",
                "subject": {
                    "CommonName": "AAP Metrics CA",
                    "Country": "US",
                    "Organization": "Red Hat Inc",
                    "OrganizationalUnit": "Ansible Analytics"
                },
                "validity": {"Type": "YEARS", "Value": 10}
            })
        );
    }

    #[test]
    fn test_subordinate_ca_with_imported_certificate() {
        let ca = AcmPrivateCa {
            ca_type: Some("SUBORDINATE".into()),
            validity_period: Some(Validity {
                unit: ValidityUnit::Months,
                value: 18,
            }),
            ca_certificate: Some("CERT".into()),
            ca_certificate_chain: Some("CHAIN".into()),
            ..Default::default()
        };

        let args = ca.normalize().unwrap();
        assert_eq!(args.get("type"), Some(&json!("SUBORDINATE")));
        assert_eq!(args.get("validity"), Some(&json!({"Type": "MONTHS", "Value": 18})));
        assert_eq!(args.get("certificate"), Some(&json!("CERT")));
        assert_eq!(args.get("certificate_chain"), Some(&json!("CHAIN")));
    }
}
