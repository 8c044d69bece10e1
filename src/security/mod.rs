//! Security tools: IAM roles and policies, KMS keys, ACM certificates, private
//! certificate authorities and AAP client certificates.

pub mod acm_certificate;
pub mod acm_private_ca;
pub mod certificate_generator;
pub mod iam_policy;
pub mod iam_role;
pub mod kms_key;

pub use acm_certificate::upload_certificate;
pub use acm_private_ca::default_ca_subject;
pub use certificate_generator::{aap_certificate, test_certificate};
pub use iam_role::lambda_execution_role;
