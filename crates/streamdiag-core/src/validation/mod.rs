//! Schema validation for contributor-submitted diagram JSON.
//!
//! Contributors edit the data file by hand, so the validator works on the raw
//! `serde_json::Value` rather than the typed [`crate::Document`].  A typed
//! decode would stop at the first problem; the validator keeps walking and
//! reports every missing field it finds, each tagged with its position in the
//! tree (`Layer 0, Category 2, Technology 5`).
//!
//! Problems come in two severities:
//!
//! - **errors** – a required field is missing or has the wrong shape.  Any
//!   error makes the report invalid.
//! - **warnings** – a link URL does not parse.  Warnings never affect validity.
//!
//! The validator never panics on malformed data: a node that is not a JSON
//! object simply has every required field missing.

pub mod report;
pub mod validator;

pub use report::{JsonValidation, Report, ReportSummary};
pub use validator::{validate, validate_json_string, Validator};
