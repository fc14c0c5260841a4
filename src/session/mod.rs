//! Brush session lifecycle shared by the liquify and blur tools
//!
//! The controller drives a [`StrokeTool`] through
//! `Idle -> Active -> Idle`, publishes pixels through the injected
//! [`SceneHost`] and commits one history entry per completed stroke through
//! the injected [`HistorySink`].

mod controller;
mod host;
#[cfg(test)]
pub(crate) mod testing;
mod tool;

pub use controller::{SessionController, SessionState};
pub use host::{HistoryEntry, HistoryKind, HistorySink, SceneHost};
pub use tool::{FlushPolicy, StrokeTool};

use crate::blur::BlurTool;
use crate::liquify::LiquifyTool;

pub type LiquifySession<S, H> = SessionController<LiquifyTool, S, H>;
pub type BlurSession<S, H> = SessionController<BlurTool, S, H>;
