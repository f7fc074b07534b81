//! GUI-facing transcript views

use tokio::sync::mpsc;
use log::debug;

/// A mutable ordered view of the transcript the GUI renders
pub trait DisplaySink
{   /// Replace the entire contents with `messages`
    fn replace_all(&mut self, messages: &[crate::Message]);
}

impl DisplaySink for Vec<crate::Message>
{   fn replace_all(&mut self, messages: &[crate::Message])
    {   self.clear();
        self.extend_from_slice(messages);
    }
}

/// Forwards each replace to whoever owns the GUI list
impl DisplaySink for mpsc::UnboundedSender<Vec<crate::Message>>
{   fn replace_all(&mut self, messages: &[crate::Message])
    {   if self.send(messages.to_vec()).is_err()
        {   debug!("Display receiver dropped");
        }
    }
}
