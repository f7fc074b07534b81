use std::future::Future;
use std::pin::Pin;
use tokio::sync::mpsc;
use log::{debug, error, info};
use crate::AiFoot;

/// Backend state: the active provider adapters
pub struct AiBackendState
{   pub providers: Vec<crate::providers::Provider>
}

impl AiBackendState
{   pub fn new(
      providers: Vec<crate::providers::Provider>
    ) -> Self
    {   debug!(
          "Initializing AiBackendState with {} providers",
          providers.len()
        );
        AiBackendState
        {   providers
        }
    }

    fn provider(&self, name: &str)
      -> Option<&crate::providers::Provider>
    {   self.providers.iter().find(|p| p.name() == name)
    }

    async fn handle_query(&self, args: crate::QueryArgs)
    {   let crate::QueryArgs
        {   provider
          , query
          , mut history
          , prompt
          , mut display
          , reply
        } = args;

        let result = match self.provider(&provider)
        {   Some(p) => {
              p.query(&query, &mut history, &prompt, &mut display)
                .await
            }
          , None => {
              error!("Provider not available: {}", provider);
              Err(crate::error::Error::ProviderUnavailable(provider))
            }
        };

        if reply.send(crate::QueryReply { history, result }).is_err()
        {   debug!("Query reply receiver dropped");
        }
    }

    fn handle_setup_data(&self) -> crate::SetupDataReply
    {   self.providers
          .iter()
          .flat_map(|p| p.setup_data())
          .collect()
    }
}

/// Public API for the AI backend - owns the task.
///
/// Queries run on the backend task one at a time, so a
/// conversation never has two requests in flight. Catalog
/// and shutdown requests are answered while a query runs;
/// shutdown drops the in-flight query without a reply.
pub struct AiBackend
{   hand: crate::AiHand
  , _task_handle: tokio::task::JoinHandle<()>
}

impl AiBackend
{   /// Create and spawn a new backend
    /// Returns immediately - spawns background task
    pub fn new(
      providers: Vec<crate::providers::Provider>
    ) -> Self
    {   debug!("Creating AiBackend with task ownership");

        let (query_tx, query_rx)
          = mpsc::unbounded_channel();
        let (setup_data_tx, setup_data_rx)
          = mpsc::unbounded_channel();
        let (kill_process_tx, kill_process_rx)
          = mpsc::unbounded_channel();

        let hand = crate::AiHand
        {   query_tx
          , setup_data_tx
          , kill_process_tx
        };

        let foot = crate::AiFoot
        {   query_rx
          , setup_data_rx
          , kill_process_rx
        };

        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, providers).await
        });

        AiBackend
        {   hand
          , _task_handle
        }
    }

    /// Queue a query - returns immediately.
    ///
    /// The transcript including the new user message arrives on
    /// the display receiver before the request goes out; the
    /// final history arrives on the reply receiver.
    pub fn query(
      &self
    , provider: &str
    , query: String
    , history: Vec<crate::Message>
    , prompt: crate::config::AiPrompt
    ) -> Result<
        ( mpsc::UnboundedReceiver<Vec<crate::Message>>
        , mpsc::UnboundedReceiver<crate::QueryReply>
        ),
        crate::error::Error
      >
    {   debug!("query queuing command for provider: {}", provider);
        let (display_tx, display_rx)
          = mpsc::unbounded_channel();
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::QueryArgs
        {   provider: provider.to_string()
          , query
          , history
          , prompt
          , display: display_tx
          , reply: reply_tx
        };

        self.hand.query_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok((display_rx, reply_rx))
    }

    /// Request the launcher entries of every active provider
    pub fn setup_data(
      &self
    ) -> Result<
        mpsc::UnboundedReceiver<crate::SetupDataReply>,
        crate::error::Error
      >
    {   debug!("setup_data queuing command");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        self.hand.setup_data_tx
          .send(crate::SetupDataArgs { reply: reply_tx })
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), crate::error::Error>
    {   debug!("Shutting down AiBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::KillProcessArgs
        {   reply: reply_tx
        };

        self.hand.kill_process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            crate::error::Error::Other(
              "Backend already shutdown".to_string()
            )
          })?;

        if let Some(result) = reply_rx.recv().await
        {   debug!("Backend shutdown confirmed");
            result
        } else
        {   error!("Backend exited before confirming shutdown");
            Err(crate::error::Error::Other(
              "Backend already shutdown".to_string()
            ))
        }
    }
}

/// Main backend event loop
async fn run_backend_loop(
  foot: crate::AiFoot
, providers: Vec<crate::providers::Provider>
)
{   debug!("Starting AiBackend event loop");
    let state = AiBackendState::new(providers);
    let AiFoot
    {   mut query_rx
      , mut setup_data_rx
      , mut kill_process_rx
    } = foot;

    // At most one query in flight; catalog and shutdown
    // requests are still answered while it runs.
    let mut in_flight = None;

    loop
    { tokio::select!
      { Some(cmd) = query_rx.recv(), if in_flight.is_none() => {
          debug!("Received Query for provider: {}", cmd.provider);
          in_flight = Some(Box::pin(state.handle_query(cmd)));
        }
      , () = drive(&mut in_flight), if in_flight.is_some() => {
          debug!("Query finished");
          in_flight = None;
        }
      , Some(cmd) = setup_data_rx.recv() => {
          debug!("Received SetupData");
          if cmd.reply.send(state.handle_setup_data()).is_err()
          {   debug!("SetupData reply receiver dropped");
          }
        }
      , Some(cmd) = kill_process_rx.recv() => {
          debug!("Received KillProcess");
          if in_flight.is_some()
          {   info!("Dropping in-flight query on shutdown");
          }
          if cmd.reply.send(Ok(())).is_err()
          {   debug!("KillProcess reply receiver dropped");
          }
          info!("AiBackend shutting down");
          break;
        }
      , else => {
          debug!("All command channels closed");
          break;
        }
      }
    }
}

/// Resolves when the in-flight query does; pends forever if none
async fn drive<F>(in_flight: &mut Option<Pin<Box<F>>>)
where
  F: Future<Output = ()>
{   match in_flight
    {   Some(query) => query.as_mut().await
      , None => std::future::pending().await
    }
}
