//! Session controller - start/process/end/reset state machine
//!
//! Nothing in here returns an error to the caller. Pointer-driven UI code
//! must survive stray events, so every failure degrades to a logged no-op.

use super::host::{HistoryEntry, HistorySink, SceneHost};
use super::tool::{FlushPolicy, StrokeTool};
use crate::error::DeformError;
use crate::input::{mapper, Point, PointerSample};
use crate::raster::{Rect, TargetId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// Building snapshots on first touch of a target
    Initializing,
    /// Pointer down, accumulating
    Active,
}

/// Drives one stroke tool against one bound raster target
pub struct SessionController<T, S, H> {
    tool: T,
    host: S,
    history: H,
    target: Option<TargetId>,
    state: SessionState,
    /// Image-local position of the last processed sample
    last: Option<Point>,
    /// Everything the current stroke has touched
    stroke_bounds: Rect,
    /// Processed samples not yet published (coalesced tools only)
    flush_pending: bool,
    /// Region changed since the last publish
    dirty: Rect,
}

impl<T, S, H> SessionController<T, S, H>
where
    T: StrokeTool,
    S: SceneHost,
    H: HistorySink,
{
    pub fn new(tool: T, host: S, history: H) -> Self {
        Self {
            tool,
            host,
            history,
            target: None,
            state: SessionState::Idle,
            last: None,
            stroke_bounds: Rect::empty(),
            flush_pending: false,
            dirty: Rect::empty(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn target(&self) -> Option<TargetId> {
        self.target
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Brush parameter updates take effect on the next `process`
    pub fn tool_mut(&mut self) -> &mut T {
        &mut self.tool
    }

    pub fn host(&self) -> &S {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut S {
        &mut self.host
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Bind a different raster (or none).
    ///
    /// Any snapshot or field built for the previous target is dropped; an
    /// unfinished stroke on it is abandoned without a history entry.
    pub fn bind_target(&mut self, target: Option<TargetId>) {
        if self.target == target {
            return;
        }
        if let Some(previous) = self.target {
            if self.flush_pending {
                self.flush_to(previous);
            }
            if self.state == SessionState::Active {
                tracing::debug!(
                    "[{}] Abandoning stroke on {:?} after target switch",
                    self.tool.name(),
                    previous
                );
            }
        }
        self.tool.invalidate();
        self.end_session();
        self.target = target;
    }

    /// Pointer down. Returns `true` if the session became active.
    pub fn start(&mut self, sample: &PointerSample) -> bool {
        if self.state == SessionState::Active {
            return false;
        }
        let Some(id) = self.target else {
            tracing::warn!("[{}] Tool invoked with no target bound", self.tool.name());
            return false;
        };
        let view = self.host.view();
        let Some(raster) = self.host.raster(id) else {
            tracing::warn!("[{}] {}", self.tool.name(), DeformError::TargetNotFound(id));
            return false;
        };

        if self.tool.is_initialized() && self.tool.dimensions() != Some(raster.pixels.dimensions()) {
            tracing::debug!(
                "[{}] Raster {:?} changed size, rebuilding snapshots",
                self.tool.name(),
                id
            );
            self.tool.invalidate();
        }

        if !self.tool.is_initialized() {
            self.state = SessionState::Initializing;
            let result = self.tool.initialize(id, raster);
            self.state = SessionState::Idle;
            if let Err(err) = result {
                tracing::warn!("[{}] Initialization failed: {}", self.tool.name(), err);
                return false;
            }
        }

        let Some(at) = mapper::resolve(sample, &view, raster) else {
            return false;
        };

        let touched = self.tool.begin_stroke(raster, at);
        self.state = SessionState::Active;
        self.last = Some(at);
        self.stroke_bounds = touched;
        if !touched.is_empty() {
            self.after_change(id, touched);
        }
        tracing::debug!("[{}] Stroke started at ({:.1}, {:.1})", self.tool.name(), at.x, at.y);
        true
    }

    /// Pointer move. Returns `true` if the sample was applied.
    pub fn process(&mut self, sample: &PointerSample) -> bool {
        if self.state != SessionState::Active {
            return false;
        }
        let Some(id) = self.target else {
            return false;
        };
        let view = self.host.view();
        let Some(raster) = self.host.raster(id) else {
            return false;
        };
        let Some(at) = mapper::resolve(sample, &view, raster) else {
            return false;
        };

        let from = self.last.unwrap_or(at);
        let touched = self.tool.stroke_to(from, at);
        self.last = Some(at);
        self.stroke_bounds.union(&touched);
        if !touched.is_empty() {
            self.after_change(id, touched);
        }
        true
    }

    /// Pointer up. Returns `true` if a history entry was committed.
    pub fn end(&mut self) -> bool {
        if self.state != SessionState::Active {
            return false;
        }
        let bounds = self.stroke_bounds;
        let Some(id) = self.target else {
            self.end_session();
            return false;
        };

        // Committed pixels must match the last processed sample
        self.flush_to(id);
        self.end_session();

        let has_pixels = self.host.raster(id).is_some_and(|r| r.has_pixels());
        if !has_pixels {
            tracing::warn!("[{}] Raster {:?} lost its pixels, skipping history", self.tool.name(), id);
            return false;
        }

        self.history.commit_history_entry(HistoryEntry {
            kind: self.tool.history_kind(),
            target: id,
            bounds,
        });
        tracing::info!("[{}] Committed {}", self.tool.name(), self.tool.history_kind().as_str());
        true
    }

    /// Restore the pristine image and forget all snapshots.
    ///
    /// Does not create a history entry. Returns `true` if pixels were
    /// restored.
    pub fn reset(&mut self) -> bool {
        self.end_session();
        let Some(id) = self.target else {
            return false;
        };
        let Some(pristine) = self.tool.reset() else {
            return false;
        };
        let (width, height) = pristine.dimensions();
        self.host.publish(id, &pristine, Rect::new(0, 0, width as i32, height as i32));
        self.dirty = Rect::empty();
        true
    }

    /// Animation-frame tick: publish coalesced changes, at most once.
    pub fn on_frame(&mut self) -> bool {
        if !self.flush_pending {
            return false;
        }
        match self.target {
            Some(id) => {
                self.flush_to(id);
                true
            }
            None => {
                self.flush_pending = false;
                false
            }
        }
    }

    fn after_change(&mut self, id: TargetId, touched: Rect) {
        self.dirty.union(&touched);
        match self.tool.flush_policy() {
            FlushPolicy::Immediate => self.flush_to(id),
            FlushPolicy::Coalesced => self.flush_pending = true,
        }
    }

    fn flush_to(&mut self, id: TargetId) {
        if let Some(pixels) = self.tool.flush() {
            self.host.publish(id, pixels, self.dirty);
        }
        self.dirty = Rect::empty();
        self.flush_pending = false;
    }

    fn end_session(&mut self) {
        self.state = SessionState::Idle;
        self.last = None;
        self.stroke_bounds = Rect::empty();
        self.flush_pending = false;
        self.dirty = Rect::empty();
    }
}
