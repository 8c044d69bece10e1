//! # IAM Policy Documents
//!
//! Typed builders for IAM-style JSON documents: single statements, versioned
//! documents, trust policies and a few canned permission sets. They are pure and
//! independent of any tool; convert with `Value::from(doc)` to fill a policy field.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tool_framework::ArgValue;

pub const POLICY_VERSION: &str = "2012-10-17";

const ASSUME_ROLE: &str = "sts:AssumeRole";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// Who a statement applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Principal {
    #[serde(rename = "Service")]
    Service(Vec<String>),
    #[serde(rename = "AWS")]
    Aws(Vec<String>),
    #[serde(rename = "*")]
    Any,
}

/// `Action` is a bare string in trust policies and a list everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Actions {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyStatement {
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Principal", skip_serializing_if = "Option::is_none", default)]
    pub principal: Option<Principal>,
    #[serde(rename = "Action")]
    pub action: Actions,
    #[serde(rename = "Resource", skip_serializing_if = "Option::is_none", default)]
    pub resource: Option<Vec<String>>,
    #[serde(rename = "Condition", skip_serializing_if = "Option::is_none", default)]
    pub condition: Option<Value>,
}

impl PolicyStatement {
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Attaches a condition block. Empty conditions are dropped.
    pub fn with_condition(mut self, condition: Value) -> Self {
        self.condition = Some(condition).filter(|c| c.is_present());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statements: Vec<PolicyStatement>,
}

impl PolicyDocument {
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

impl ArgValue for PolicyDocument {
    fn to_arg(&self) -> Value {
        json!(self)
    }
}

impl From<PolicyDocument> for Value {
    fn from(doc: PolicyDocument) -> Self {
        doc.to_arg()
    }
}

impl From<PolicyStatement> for Value {
    fn from(statement: PolicyStatement) -> Self {
        json!(statement)
    }
}

fn owned<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_string()).collect()
}

/// A statement granting or denying `actions` on `resources`.
pub fn statement<A: AsRef<str>, R: AsRef<str>>(
    effect: Effect,
    actions: &[A],
    resources: &[R],
) -> PolicyStatement {
    PolicyStatement {
        effect,
        principal: None,
        action: Actions::Many(owned(actions)),
        resource: Some(owned(resources)),
        condition: None,
    }
}

/// Wraps statements in a document at [`POLICY_VERSION`].
pub fn document(statements: Vec<PolicyStatement>) -> PolicyDocument {
    PolicyDocument {
        version: POLICY_VERSION.to_string(),
        statements,
    }
}

fn assume_role(principal: Principal) -> PolicyStatement {
    PolicyStatement {
        effect: Effect::Allow,
        principal: Some(principal),
        action: Actions::One(ASSUME_ROLE.to_string()),
        resource: None,
        condition: None,
    }
}

/// Trust policy letting the given AWS services assume a role.
pub fn service_trust_policy<S: AsRef<str>>(services: &[S]) -> PolicyDocument {
    document(vec![assume_role(Principal::Service(owned(services)))])
}

/// Trust policy letting other accounts assume a role.
///
/// The `sts:ExternalId` condition is added only when `external_id` is supplied.
pub fn cross_account_trust_policy<S: AsRef<str>>(
    account_ids: &[S],
    external_id: Option<&str>,
) -> PolicyDocument {
    let roots = account_ids
        .iter()
        .map(|id| format!("arn:aws:iam::{}:root", id.as_ref()))
        .collect();
    let mut trust = assume_role(Principal::Aws(roots));
    if let Some(external_id) = external_id.filter(|id| !id.is_empty()) {
        trust = trust.with_condition(json!({
            "StringEquals": { "sts:ExternalId": external_id }
        }));
    }
    document(vec![trust])
}

/// Trust policy for Lambda execution roles.
pub fn lambda_trust_policy() -> PolicyDocument {
    service_trust_policy(&["lambda.amazonaws.com"])
}

/// CloudWatch Logs write access for a function.
pub fn lambda_execution_policy() -> PolicyDocument {
    document(vec![statement(
        Effect::Allow,
        &["logs:CreateLogGroup", "logs:CreateLogStream", "logs:PutLogEvents"],
        &["arn:aws:logs:*:*:*"],
    )])
}

/// Object access in one bucket. Defaults to get, put and delete.
pub fn s3_access_policy(bucket_arn: &str, actions: Option<&[&str]>) -> PolicyDocument {
    let actions = actions.unwrap_or(&["s3:GetObject", "s3:PutObject", "s3:DeleteObject"]);
    document(vec![statement(
        Effect::Allow,
        actions,
        &[format!("{bucket_arn}/*")],
    )])
}

/// Item access on a table and its indexes. Defaults to CRUD plus query and scan.
pub fn dynamodb_access_policy(table_arn: &str, actions: Option<&[&str]>) -> PolicyDocument {
    let actions = actions.unwrap_or(&[
        "dynamodb:GetItem",
        "dynamodb:PutItem",
        "dynamodb:UpdateItem",
        "dynamodb:DeleteItem",
        "dynamodb:Query",
        "dynamodb:Scan",
    ]);
    document(vec![statement(
        Effect::Allow,
        actions,
        &[table_arn.to_string(), format!("{table_arn}/*")],
    )])
}

/// Certificate issuance from a private CA; `None` grants it on every CA.
pub fn acm_pca_access_policy(ca_arn: Option<&str>) -> PolicyDocument {
    document(vec![statement(
        Effect::Allow,
        &[
            "acm-pca:IssueCertificate",
            "acm-pca:GetCertificate",
            "acm-pca:DescribeCertificateAuthority",
            "acm-pca:ListCertificateAuthorities",
            "acm-pca:GetCertificateAuthorityCertificate",
        ],
        &[ca_arn.unwrap_or("*")],
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_statement_with_condition_and_principal() {
        let stmt = statement(Effect::Deny, &["s3:*"], &["arn:aws:s3:::b/*"])
            .with_principal(Principal::Any)
            .with_condition(json!({"Bool": {"aws:SecureTransport": "false"}}));
        assert_eq!(
            Value::from(stmt),
            json!({
                "Effect": "Deny",
                "Principal": "*",
                "Action": ["s3:*"],
                "Resource": ["arn:aws:s3:::b/*"],
                "Condition": {"Bool": {"aws:SecureTransport": "false"}}
            })
        );
    }

    #[test]
    fn test_empty_condition_is_dropped() {
        let stmt = statement(Effect::Allow, &["s3:GetObject"], &["*"]).with_condition(json!({}));
        assert_eq!(stmt.condition, None);
    }

    #[test]
    fn test_service_trust_policy() {
        assert_eq!(
            Value::from(lambda_trust_policy()),
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": {"Service": ["lambda.amazonaws.com"]},
                    "Action": "sts:AssumeRole"
                }]
            })
        );
    }

    #[test]
    fn test_cross_account_trust_external_id_only_when_supplied() {
        let open = Value::from(cross_account_trust_policy(&["111122223333"], None));
        assert_eq!(
            open["Statement"][0]["Principal"],
            json!({"AWS": ["arn:aws:iam::111122223333:root"]})
        );
        assert!(open["Statement"][0].get("Condition").is_none());

        let guarded = Value::from(cross_account_trust_policy(&["111122223333"], Some("xyz")));
        assert_eq!(
            guarded["Statement"][0]["Condition"],
            json!({"StringEquals": {"sts:ExternalId": "xyz"}})
        );
    }

    #[test]
    fn test_canned_policies() {
        let s3 = s3_access_policy("arn:aws:s3:::data", None);
        assert_eq!(s3.statements[0].resource, Some(vec!["arn:aws:s3:::data/*".to_string()]));
        assert_eq!(s3.statements[0].action, Actions::Many(owned(&["s3:GetObject", "s3:PutObject", "s3:DeleteObject"])));

        let ddb = dynamodb_access_policy("arn:aws:dynamodb:t", Some(&["dynamodb:GetItem"]));
        assert_eq!(
            ddb.statements[0].resource,
            Some(vec!["arn:aws:dynamodb:t".to_string(), "arn:aws:dynamodb:t/*".to_string()])
        );

        let pca = acm_pca_access_policy(None);
        assert_eq!(pca.statements[0].resource, Some(vec!["*".to_string()]));

        let logs = Value::from(lambda_execution_policy().with_version("2008-10-17"));
        assert_eq!(logs["Version"], "2008-10-17");
    }

    #[test]
    fn test_document_deserializes_from_json() {
        let doc: PolicyDocument = serde_json::from_value(json!({
            "Version": "2012-10-17",
            "Statement": [{"Effect": "Allow", "Action": "sts:AssumeRole", "Principal": {"AWS": ["arn:aws:iam::1:root"]}}]
        }))
        .unwrap();
        assert_eq!(doc, cross_account_trust_policy(&["1"], None));
    }
}
