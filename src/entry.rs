//! Launcher entries produced by provider catalogs

use std::fmt;
use std::sync::Arc;

/// How the launcher matches the query against an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingType
{   Fuzzy
}

/// Arguments bound to an entry's callback
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialFuncArgs
{   /// Name of the provider that built the entry
    pub provider: String
  , pub prompt: crate::config::AiPrompt
}

/// Callback invoked when an entry is activated
pub type SpecialFunc
  = Arc<dyn Fn(&SpecialFuncArgs) + Send + Sync>;

/// A selectable launcher entry
#[derive(Clone)]
pub struct Entry
{   pub label: String
  , pub sub: String
  , pub exec: String
  , pub recalculate_score: bool
  , pub matching: MatchingType
  , pub special_func: SpecialFunc
  , pub special_func_args: SpecialFuncArgs
  , pub single_module_only: bool
}

impl Entry
{   /// Run the bound callback with its bound arguments
    pub fn activate(&self)
    {   (self.special_func)(&self.special_func_args)
    }
}

impl fmt::Debug for Entry
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   f.debug_struct("Entry")
          .field("label", &self.label)
          .field("sub", &self.sub)
          .field("exec", &self.exec)
          .field("recalculate_score", &self.recalculate_score)
          .field("matching", &self.matching)
          .field("special_func_args", &self.special_func_args)
          .field("single_module_only", &self.single_module_only)
          .finish_non_exhaustive()
    }
}
