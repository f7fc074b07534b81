//! Lives in its own test binary since it installs a global logger

use std::sync::{Arc, Mutex};
use launcher_ai::config::{AiConfig, AiPrompt, GrokConfig};
use launcher_ai::providers::GrokProvider;
use launcher_ai::{SpecialFunc, SpecialFuncArgs};

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl log::Log for CaptureLogger
{   fn enabled(&self, _metadata: &log::Metadata) -> bool
    {   true
    }

    fn log(&self, record: &log::Record)
    {   RECORDS.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn noop() -> SpecialFunc
{   Arc::new(|_: &SpecialFuncArgs| {})
}

fn grok_notes() -> Vec<String>
{   RECORDS.lock().unwrap()
      .iter()
      .filter(|r| r.starts_with("grok:"))
      .cloned()
      .collect()
}

#[test]
fn test_catalog_diagnostics()
{   log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    // Empty prompt list: exactly one record of any kind
    let provider = GrokProvider::new(
      &AiConfig::default(),
      Some("key".to_string()),
      noop()
    ).unwrap();
    RECORDS.lock().unwrap().clear();
    assert!(provider.setup_data().is_empty());
    assert_eq!(
      *RECORDS.lock().unwrap(),
      vec!["grok: no prompts set.".to_string()]
    );

    // Configured prompts: nothing new
    RECORDS.lock().unwrap().clear();
    let config = AiConfig
    {   grok: GrokConfig
        {   prompts: vec![AiPrompt
            {   label: "Ask".to_string()
              , model: "grok-2-latest".to_string()
              , max_tokens: 64
              , temperature: 0.0
              , single_module_only: false
            }]
          , api_base: None
        }
    };
    let provider = GrokProvider::new(
      &config,
      Some("key".to_string()),
      noop()
    ).unwrap();
    assert_eq!(provider.setup_data().len(), 1);
    assert!(grok_notes().is_empty());

    // Missing key: one note, no provider
    assert!(GrokProvider::new(&config, None, noop()).is_none());
    assert_eq!(grok_notes(), vec!["grok: no api key set".to_string()]);
}
