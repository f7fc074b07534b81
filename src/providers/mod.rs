//! LLM provider implementations

use log::{debug, info};

pub mod grok;

// Re-export for convenience
pub use grok::GrokProvider;

/// An active provider adapter, one variant per upstream service
pub enum Provider
{   Grok(GrokProvider)
}

impl Provider
{   /// Name bound into entry callbacks
    pub fn name(&self) -> &'static str
    {   match self
        {   Provider::Grok(_) => grok::GROK_PROVIDER_NAME
        }
    }

    /// Launcher entries for this provider's prompts
    pub fn setup_data(&self) -> Vec<crate::entry::Entry>
    {   match self
        {   Provider::Grok(p) => p.setup_data()
        }
    }

    /// Run one query against the upstream service
    pub async fn query<S>(
      &self
    , query: &str
    , history: &mut Vec<crate::Message>
    , prompt: &crate::config::AiPrompt
    , items: &mut S
    ) -> Result<(), crate::error::Error>
    where
      S: crate::display::DisplaySink + ?Sized
    {   match self
        {   Provider::Grok(p) => {
              p.query(query, history, prompt, items).await
            }
        }
    }
}

/// Build every provider that has a credential
pub fn setup_providers(
  config: &crate::config::AiConfig
, keys: &crate::config::ApiKeys
, special_func: crate::entry::SpecialFunc
) -> Vec<Provider>
{   let mut providers = vec![];

    if let Some(grok) = GrokProvider::new(
      config,
      keys.grok.clone(),
      special_func
    )
    {   providers.push(Provider::Grok(grok));
    }

    info!("{} AI providers active", providers.len());
    for p in &providers
    {   debug!("Active provider: {}", p.name());
    }
    providers
}
