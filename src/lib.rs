//! Pixel-space deformation engine behind the Liquify and Blur brushes
//!
//! A host editor binds a raster layer, forwards pointer events to a
//! [`SessionController`], and receives replacement pixels plus one history
//! entry per completed stroke. Everything runs synchronously on the caller's
//! thread.
//!
//! ```no_run
//! use warpbrush::{LiquifySettings, LiquifyTool, PointerSample, SessionController, TargetId};
//! # fn demo<S: warpbrush::SceneHost>(scene: S) {
//! let history = |entry: warpbrush::HistoryEntry| println!("commit {}", entry.kind.as_str());
//! let mut session = SessionController::new(LiquifyTool::new(LiquifySettings::default()), scene, history);
//! session.bind_target(Some(TargetId(1)));
//! session.start(&PointerSample::new(40.0, 50.0));
//! session.process(&PointerSample::new(50.0, 50.0));
//! session.on_frame();
//! session.end();
//! # }
//! ```

pub mod blur;
pub mod brush;
pub mod config;
pub mod error;
pub mod input;
pub mod liquify;
pub mod logging;
pub mod raster;
pub mod session;

pub use blur::BlurTool;
pub use config::{BlurSettings, LiquifySettings};
pub use error::DeformError;
pub use input::{Point, PointerSample, ViewTransform};
pub use liquify::{DisplacementField, LiquifyTool, TwirlDirection, WarpMode};
pub use raster::{RasterTarget, RasterTransform, Rect, TargetId};
pub use session::{
    BlurSession, FlushPolicy, HistoryEntry, HistoryKind, HistorySink, LiquifySession, SceneHost,
    SessionController, SessionState, StrokeTool,
};
