//! Signup submission flow.
//!
//! A two-phase machine (Idle / Submitting). `submit` takes `&mut self`,
//! which statically rules out overlapping submissions; the phase exists
//! for the shell's loading overlay and always returns to Idle.

use std::sync::Arc;

use serde::Serialize;
use tracing::error;

use crate::kernel::BaseAccountService;

use super::form::SignupForm;
use super::validation::{validate, ValidationError};

const GENERIC_SIGNUP_ERROR: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignupPhase {
    Idle,
    Submitting,
}

/// Where the shell navigates after a completed signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Destination {
    Login,
}

/// A blocking user-facing prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SubmitOutcome {
    /// Validation failed before any I/O; the collaborator was not invoked.
    Rejected(ValidationError),
    /// The account service reported or caused a failure.
    Failed { message: String },
    /// Account created; navigate to the destination.
    Completed(Destination),
}

impl SubmitOutcome {
    /// The prompt the shell shows for this outcome, if any.
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Self::Rejected(err) => Some(Alert {
                title: "Invalid Input".to_string(),
                message: err.to_string(),
            }),
            Self::Failed { message } => Some(Alert {
                title: "SignUp Error".to_string(),
                message: message.clone(),
            }),
            Self::Completed(_) => None,
        }
    }

    pub fn destination(&self) -> Option<Destination> {
        match self {
            Self::Completed(destination) => Some(*destination),
            _ => None,
        }
    }
}

pub struct SignupFlow {
    accounts: Arc<dyn BaseAccountService>,
    phase: SignupPhase,
}

impl SignupFlow {
    pub fn new(accounts: Arc<dyn BaseAccountService>) -> Self {
        Self {
            accounts,
            phase: SignupPhase::Idle,
        }
    }

    pub fn phase(&self) -> SignupPhase {
        self.phase
    }

    /// Validate the form and, if it passes, submit it to the account
    /// service. The form itself is never mutated; every completion path
    /// returns the phase to Idle.
    pub async fn submit(&mut self, form: &SignupForm) -> SubmitOutcome {
        let account = match validate(form) {
            Ok(account) => account,
            Err(err) => return SubmitOutcome::Rejected(err),
        };

        self.phase = SignupPhase::Submitting;

        let outcome = match self.accounts.sign_up_user(&account).await {
            Ok(response) if response.success => SubmitOutcome::Completed(Destination::Login),
            Ok(response) => SubmitOutcome::Failed {
                message: response
                    .error
                    .unwrap_or_else(|| GENERIC_SIGNUP_ERROR.to_string()),
            },
            Err(e) => {
                error!("Signup request failed: {:#}", e);
                SubmitOutcome::Failed {
                    message: GENERIC_SIGNUP_ERROR.to_string(),
                }
            }
        };

        self.phase = SignupPhase::Idle;
        outcome
    }
}
