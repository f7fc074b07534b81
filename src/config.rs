//! Configuration for the AI module and its providers

use serde::{Deserialize, Serialize};
use log::{debug, error};

/// Environment variable holding the Grok credential
pub const GROK_API_KEY: &str = "GROK_API_KEY";

/// One configured prompt, shown as a launcher entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiPrompt
{   /// Label shown in the launcher list
    pub label: String
  , /// Upstream model name
    pub model: String
  , pub max_tokens: u32
  , pub temperature: f64
  , /// Only show the entry when the AI module runs alone
    #[serde(default)]
    pub single_module_only: bool
}

/// Grok provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrokConfig
{   /// Prompts offered as entries
    #[serde(default)]
    pub prompts: Vec<AiPrompt>
  , /// API base URL (if custom)
    #[serde(default)]
    pub api_base: Option<String>
}

/// AI module configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfig
{   #[serde(default)]
    pub grok: GrokConfig
}

impl AiConfig
{   /// Parse configuration from a JSON document
    pub fn from_json_str(json: &str)
      -> Result<Self, crate::error::Error>
    {   serde_json::from_str(json).map_err(|e| {
          error!("Invalid AI config: {}", e);
          crate::error::Error::InvalidConfiguration(e.to_string())
        })
    }

    /// Load configuration from a JSON file
    pub fn load(path: &std::path::Path)
      -> Result<Self, crate::error::Error>
    {   debug!("Loading AI config from {}", path.display());
        let json = std::fs::read_to_string(path)
          .map_err(|e| {
            error!("Failed to read {}: {}", path.display(), e);
            crate::error::Error::InvalidConfiguration(
              format!("{}: {}", path.display(), e)
            )
          })?;
        Self::from_json_str(&json)
    }
}

/// Provider credentials, sourced once at process start
#[derive(Debug, Clone, Default)]
pub struct ApiKeys
{   pub grok: Option<String>
}

impl ApiKeys
{   /// Read every provider credential from the environment
    pub fn from_env() -> Self
    {   ApiKeys
        {   grok: key_from_env(GROK_API_KEY)
        }
    }
}

/// Empty values count as unset
fn key_from_env(var: &str) -> Option<String>
{   match std::env::var(var)
    {   Ok(key) if !key.is_empty() => {
          debug!("Found credential in {}", var);
          Some(key)
        }
      , _ => None
    }
}
