// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like the signup validation chain) should be domain
// functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAccountService)

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// =============================================================================
// Account Service Trait (Infrastructure - external account creation)
// =============================================================================

/// The five validated registration fields handed to the account service.
/// The password confirmation never leaves the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub student_number: String,
    pub email: String,
    pub password: String,
}

/// Outcome reported by the account-creation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[async_trait]
pub trait BaseAccountService: Send + Sync {
    /// Create an account for the validated registration fields.
    async fn sign_up_user(&self, account: &NewAccount) -> Result<SignupResponse>;
}
