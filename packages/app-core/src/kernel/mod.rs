//! Kernel module - infrastructure seams and dependency wiring.

pub mod accounts_client;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use accounts_client::AccountsClient;
pub use deps::AppDeps;
pub use traits::{BaseAccountService, NewAccount, SignupResponse};
