//! # FTL AWS Tools
//!
//! Typed AWS resource configs, normalized into the canonical argument maps an
//! automation engine's modules expect, and run through a pluggable
//! [`ModuleRunner`](tool_framework::ModuleRunner).
//!
//! ## Core Components
//!
//! - **[model]**: one config struct per resource kind, plus the [`ResourceRequest`]
//!   enum that carries any of them behind a `kind` tag.
//! - **[compute], [database], [monitoring], [networking], [security], [storage]**: the
//!   [`Tool`](tool_framework::Tool) impl for each kind (its field rules) and the
//!   builders for the nested objects its module takes.
//! - **[policy]**: IAM policy documents and trust policies.
//! - **[clients]**: the [`AwsTools`](clients::AwsTools) facade.
//! - **[lifecycle]**: session context, per-run settings and the [`ToolSystem`]
//!   that wires a host, a backend and the facade together.
//!
//! ## Normalization
//!
//! Every kind follows the same rules when building its map:
//!
//! 1. Required and defaulted fields are always written.
//! 2. Optional fields are written only when set and non-empty, except the few where
//!    `false` or `0` means something (`versioning`, `threshold`, ...).
//! 3. Mutually exclusive sources (Lambda code, certificate content, policy
//!    qualifier) resolve by priority, or fail in
//!    [`ResolutionMode::Strict`](tool_framework::ResolutionMode::Strict).
//! 4. The config's `extra` map is merged last and wins on conflict.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! [`ResourceRequest`]: model::ResourceRequest
//! [`ToolSystem`]: lifecycle::ToolSystem

/// Invokes `$callback!` with every resource kind as `Variant(ConfigType)`.
///
/// The snake-cased variant is the request `kind` and the facade method name.
macro_rules! resource_kinds {
    ($callback:ident) => {
        $callback! {
            LambdaFunction(LambdaFunction),
            LambdaPolicy(LambdaPolicy),
            DynamodbTable(DynamoDbTable),
            MetricAlarm(MetricAlarm),
            LogGroup(LogGroup),
            Vpc(Vpc),
            Subnet(Subnet),
            InternetGateway(InternetGateway),
            SecurityGroup(SecurityGroup),
            ApplicationLoadBalancer(ApplicationLoadBalancer),
            IamRole(IamRole),
            IamPolicy(IamPolicy),
            KmsKey(KmsKey),
            AcmCertificate(AcmCertificate),
            AcmPrivateCa(AcmPrivateCa),
            S3Bucket(S3Bucket),
            CertificateGenerator(CertificateGenerator),
        }
    };
}

pub mod clients;
pub mod compute;
pub mod database;
pub mod lifecycle;
pub mod model;
pub mod monitoring;
pub mod networking;
pub mod policy;
pub mod security;
pub mod storage;
