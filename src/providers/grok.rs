use serde::{Deserialize, Deserializer, Serialize};
use log::{debug, trace, error, info, warn};

const GROK_API_BASE: &str
  = "https://api.x.ai/v1";

/// Provider name bound into entry callbacks
pub const GROK_PROVIDER_NAME: &str = "grok";

// ===== Wire Types =====

/// Explicit `null` decodes like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>
, T: Default + Deserialize<'de>
{   Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrokRequest
{   pub model: String
  , pub max_tokens: u32
  , pub temperature: f64
  , pub messages: Vec<crate::Message>
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GrokResponse
{   #[serde(deserialize_with = "null_as_default")]
    pub id: String
  , #[serde(deserialize_with = "null_as_default")]
    pub model: String
  , #[serde(deserialize_with = "null_as_default")]
    pub object: String
  , pub system_fingerprint: Option<String>
  , #[serde(deserialize_with = "null_as_default")]
    pub created: i64
  , #[serde(deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>
  , #[serde(deserialize_with = "null_as_default")]
    pub usage: Usage
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Choice
{   #[serde(deserialize_with = "null_as_default")]
    pub index: u32
  , pub finish_reason: Option<String>
  , #[serde(deserialize_with = "null_as_default")]
    pub message: ChoiceMessage
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChoiceMessage
{   #[serde(deserialize_with = "null_as_default")]
    pub role: String
  , pub content: Option<String>
  , pub reasoning_content: Option<String>
  , pub refusal: Option<String>
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Usage
{   #[serde(deserialize_with = "null_as_default")]
    pub prompt_tokens: u32
  , #[serde(deserialize_with = "null_as_default")]
    pub completion_tokens: u32
  , #[serde(deserialize_with = "null_as_default")]
    pub total_tokens: u32
  , #[serde(deserialize_with = "null_as_default")]
    pub prompt_tokens_details: PromptTokensDetails
  , #[serde(deserialize_with = "null_as_default")]
    pub completion_tokens_details: CompletionTokensDetails
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptTokensDetails
{   #[serde(deserialize_with = "null_as_default")]
    pub text_tokens: u32
  , #[serde(deserialize_with = "null_as_default")]
    pub audio_tokens: u32
  , #[serde(deserialize_with = "null_as_default")]
    pub image_tokens: u32
  , #[serde(deserialize_with = "null_as_default")]
    pub cached_tokens: u32
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompletionTokensDetails
{   #[serde(deserialize_with = "null_as_default")]
    pub reasoning_tokens: u32
  , #[serde(deserialize_with = "null_as_default")]
    pub audio_tokens: u32
  , #[serde(deserialize_with = "null_as_default")]
    pub accepted_prediction_tokens: u32
  , #[serde(deserialize_with = "null_as_default")]
    pub rejected_prediction_tokens: u32
}

// ===== Grok Provider =====

/// Adapter for the xAI chat-completion API
pub struct GrokProvider
{   config: crate::config::GrokConfig
  , key: String
  , special_func: crate::entry::SpecialFunc
  , http_client: reqwest::Client
}

impl GrokProvider
{   /// Returns `None` when no key is given, which leaves
    /// the provider inactive
    pub fn new(
      config: &crate::config::AiConfig
    , api_key: Option<String>
    , special_func: crate::entry::SpecialFunc
    ) -> Option<Self>
    {   let key = match api_key
        {   Some(key) if !key.is_empty() => key
          , _ => {
              warn!("grok: no api key set");
              return None;
            }
        };

        debug!("Creating GrokProvider");
        Some(GrokProvider
        {   config: config.grok.clone()
          , key
          , special_func
          , http_client: reqwest::Client::new()
        })
    }

    pub fn endpoint(&self) -> String
    {   let base = self.config.api_base
          .as_deref()
          .unwrap_or(GROK_API_BASE)
          .trim_end_matches('/');
        format!("{}/chat/completions", base)
    }

    /// One launcher entry per configured prompt
    pub fn setup_data(&self) -> Vec<crate::entry::Entry>
    {   let entries: Vec<crate::entry::Entry>
          = self.config.prompts
            .iter()
            .map(|prompt| crate::entry::Entry
            {   label: prompt.label.clone()
              , sub: "Grok".to_string()
              , exec: String::new()
              , recalculate_score: true
              , matching: crate::entry::MatchingType::Fuzzy
              , special_func: self.special_func.clone()
              , special_func_args: crate::entry::SpecialFuncArgs
                {   provider: GROK_PROVIDER_NAME.to_string()
                  , prompt: prompt.clone()
                }
              , single_module_only: prompt.single_module_only
            })
            .collect();

        if entries.is_empty()
        {   info!("grok: no prompts set.");
        } else
        {   debug!("Grok catalog has {} entries", entries.len());
        }
        entries
    }

    /// Send `query` with the conversation so far.
    ///
    /// The user message lands in `history` before the request
    /// goes out and stays there whatever happens next. `items`
    /// is replaced with the transcript up to that message.
    /// Assistant messages are appended only on success.
    pub async fn query<S>(
      &self
    , query: &str
    , history: &mut Vec<crate::Message>
    , prompt: &crate::config::AiPrompt
    , items: &mut S
    ) -> Result<(), crate::error::Error>
    where
      S: crate::display::DisplaySink + ?Sized
    {   debug!("Handling grok query for model: {}", prompt.model);

        history.push(crate::Message::user(query));
        items.replace_all(history.as_slice());

        let request = GrokRequest
        {   model: prompt.model.clone()
          , max_tokens: prompt.max_tokens
          , temperature: prompt.temperature
          , messages: history.clone()
        };

        trace!("Grok request: {:?}", request);

        let body = serde_json::to_vec(&request)
          .map_err(|e| {
            error!("Failed to encode grok request: {}", e);
            crate::error::Error::SerializeError(e.to_string())
          })?;

        let response = self.http_client
          .post(self.endpoint())
          .header("Authorization", format!("Bearer {}", self.key))
          .header("Content-Type", "application/json")
          .body(body)
          .send()
          .await
          .map_err(|e| {
            error!("Error making request: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Grok response status: {}", status);

        if !status.is_success()
        {   error!(
              "Grok API returned unexpected status code {}",
              status.as_u16()
            );
            return Err(crate::error::Error::UnexpectedStatus(
              status.as_u16()
            ));
        }

        let bytes = response.bytes().await
          .map_err(|e| {
            error!("Error reading response: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let grok_response: GrokResponse
          = serde_json::from_slice(&bytes).map_err(|e| {
            error!("Error decoding response: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        debug!(
          "Grok returned {} choices, {} tokens",
          grok_response.choices.len(),
          grok_response.usage.total_tokens
        );

        history.extend(
          grok_response.choices
            .into_iter()
            .map(|c| crate::Message::assistant(
              c.message.content.unwrap_or_default()
            ))
        );

        Ok(())
    }
}
