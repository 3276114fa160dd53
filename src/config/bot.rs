//! Bot identity and access configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::UserId;

/// Bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Username commands may be addressed to (`/create@<name>`)
    #[serde(default = "default_name")]
    pub name: String,

    /// User ids allowed to manage any event (comma-separated)
    pub admin_ids: Option<String>,
}

impl BotConfig {
    /// Parse the administrator list
    pub fn admins(&self) -> Result<Vec<UserId>, ValidationError> {
        let Some(list) = self.admin_ids.as_deref() else {
            return Ok(Vec::new());
        };
        list.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                id.parse()
                    .map_err(|_| ValidationError::InvalidAdminId(id.to_string()))
            })
            .collect()
    }

    /// Validate bot configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingRequired("bot.name"));
        }
        if self.name.contains('@') || self.name.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidBotName);
        }
        self.admins()?;
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            admin_ids: None,
        }
    }
}

fn default_name() -> String {
    "SecretSantaBot".to_string()
}
