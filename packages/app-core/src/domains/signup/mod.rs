//! Signup domain - registration form, validation chain, submission flow.
//!
//! Validation runs entirely client-side before any I/O; account creation
//! is delegated to the external service behind `BaseAccountService`.

pub mod flow;
pub mod form;
pub mod validation;

pub use flow::{Alert, Destination, SignupFlow, SignupPhase, SubmitOutcome};
pub use form::{SignupField, SignupForm};
pub use validation::{validate, ValidationError};
