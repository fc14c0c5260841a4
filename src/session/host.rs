//! Host collaborator interfaces
//!
//! The editor shell implements these and hands them to the session
//! controller at construction. Nothing here is global.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::input::ViewTransform;
use crate::raster::{RasterTarget, Rect, TargetId};

/// Scene/elements collaborator
pub trait SceneHost {
    /// Raster currently stored for `id`, if any
    fn raster(&self, id: TargetId) -> Option<&RasterTarget>;

    /// Replace the raster's pixel data and request a redraw.
    ///
    /// Only pixels inside `dirty` differ from the previous publish, so hosts
    /// may copy just that region. It is empty when nothing changed.
    fn publish(&mut self, id: TargetId, pixels: &RgbaImage, dirty: Rect);

    /// Current pan/zoom/container origin
    fn view(&self) -> ViewTransform;
}

/// Kind of history entry a completed stroke produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HistoryKind {
    LiquifyApplied,
    BlurApplied,
}

impl HistoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryKind::LiquifyApplied => "liquifyApplied",
            HistoryKind::BlurApplied => "blurApplied",
        }
    }
}

/// One completed stroke, handed to the history collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub kind: HistoryKind,
    pub target: TargetId,
    /// Raster-local bounds of every pixel the stroke touched
    pub bounds: Rect,
}

/// History collaborator; the host snapshots its scene state on each commit
pub trait HistorySink {
    fn commit_history_entry(&mut self, entry: HistoryEntry);
}

impl<F> HistorySink for F
where
    F: FnMut(HistoryEntry),
{
    fn commit_history_entry(&mut self, entry: HistoryEntry) {
        self(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_kind_names() {
        assert_eq!(HistoryKind::LiquifyApplied.as_str(), "liquifyApplied");
        assert_eq!(
            serde_json::to_string(&HistoryKind::BlurApplied).unwrap(),
            "\"blurApplied\""
        );
    }

    #[test]
    fn test_closure_as_history_sink() {
        let mut kinds = Vec::new();
        {
            let mut sink = |entry: HistoryEntry| kinds.push(entry.kind);
            sink.commit_history_entry(HistoryEntry {
                kind: HistoryKind::LiquifyApplied,
                target: TargetId(1),
                bounds: Rect::new(0, 0, 1, 1),
            });
        }
        assert_eq!(kinds, vec![HistoryKind::LiquifyApplied]);
    }
}
