//! Answers, derived configuration and persisted settings for the Ractive
//! project generator.
//!
//! - [`Answers`] - what the user chose, from prompts or an answers file
//! - [`DerivedConfig`] - generation flags resolved from the answers
//! - [`PersistedSettings`] - the `.yo-rc.json` record shared with the
//!   component generator
//! - [`Router`] - router choices and their single package table

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod answers;
mod derived;
mod error;
mod feature;
mod load_method;
mod router;
mod settings;
mod test_framework;

pub use answers::Answers;
pub use derived::DerivedConfig;
pub use error::{Error, Result, SourceContext};
pub use feature::Feature;
pub use load_method::LoadMethod;
pub use router::{Router, RouterSpec};
pub use settings::{PersistedSettings, SETTINGS_FILE, SETTINGS_KEY};
pub use test_framework::TestFramework;
