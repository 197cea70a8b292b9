use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use super::{BaseAccountService, NewAccount, SignupResponse};

/// Account-creation service client
/// Posts validated registration fields to the hosted accounts API
pub struct AccountsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AccountsClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl BaseAccountService for AccountsClient {
    async fn sign_up_user(&self, account: &NewAccount) -> Result<SignupResponse> {
        let url = format!("{}/signup", self.base_url);

        let mut request = self.client.post(&url).json(account);

        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        info!("Submitting signup for {}", account.email);

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            error!("Accounts API error {}: {}", status, body);
            anyhow::bail!("Accounts API error {}: {}", status, body);
        }

        let signup_response: SignupResponse = response.json().await?;
        Ok(signup_response)
    }
}
