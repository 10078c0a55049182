use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Weak;

use crate::raster::frame::{FrameBuffer, FrameId};

/// Counters for cache behaviour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AuxCacheStats {
    /// Entries allocated (first use or after a resize).
    pub allocations: u64,
    /// Acquisitions served by an existing entry.
    pub reuses: u64,
    /// Entries dropped because their frame no longer exists.
    pub evictions: u64,
}

struct AuxEntry {
    frame: Weak<()>,
    scratch: FrameBuffer,
    snapshot: Option<FrameBuffer>,
}

impl AuxEntry {
    fn for_frame(frame: &FrameBuffer) -> Self {
        Self {
            frame: frame.liveness(),
            scratch: shadow(frame),
            snapshot: None,
        }
    }

    fn matches(&self, frame: &FrameBuffer) -> bool {
        self.scratch.width() == frame.width() && self.scratch.height() == frame.height()
    }

    fn is_orphaned(&self) -> bool {
        self.frame.strong_count() == 0
    }

    fn bytes(&self) -> usize {
        self.scratch.data().len() + self.snapshot.as_ref().map_or(0, |s| s.data().len())
    }
}

fn shadow(frame: &FrameBuffer) -> FrameBuffer {
    FrameBuffer::new(frame.width(), frame.height()).with_capabilities(frame.capabilities())
}

/// Offscreen buffers shadowing frame buffers, keyed by [`FrameId`].
///
/// Each entry is sized to its frame at the last acquisition and is reallocated when the frame's
/// dimensions change. Entries whose frame has been dropped are pruned on the next acquisition, so
/// the cache never holds more entries than there are live frames it has seen. Contents are stale
/// between acquisitions; callers clear before use.
#[derive(Default)]
pub struct AuxCache {
    entries: HashMap<FrameId, AuxEntry>,
    stats: AuxCacheStats,
}

impl AuxCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Auxiliary buffer for `frame`, matching its current size.
    pub fn acquire(&mut self, frame: &FrameBuffer) -> &mut FrameBuffer {
        &mut self.entry(frame).scratch
    }

    /// Scratch buffer plus a second same-sized buffer for holding a snapshot of `frame`.
    ///
    /// The snapshot buffer is allocated on first request and kept with the entry.
    pub(crate) fn acquire_with_snapshot(
        &mut self,
        frame: &FrameBuffer,
    ) -> (&mut FrameBuffer, &mut FrameBuffer) {
        let entry = self.entry(frame);
        let snapshot = entry.snapshot.get_or_insert_with(|| {
            trace_alloc(frame, "allocating snapshot buffer");
            shadow(frame)
        });
        (&mut entry.scratch, snapshot)
    }

    fn entry(&mut self, frame: &FrameBuffer) -> &mut AuxEntry {
        self.prune();
        let id = frame.id();
        match self.entries.entry(id) {
            Entry::Occupied(o) if o.get().matches(frame) => {
                self.stats.reuses = self.stats.reuses.saturating_add(1);
                o.into_mut()
            }
            Entry::Occupied(mut o) => {
                self.stats.allocations = self.stats.allocations.saturating_add(1);
                trace_alloc(frame, "resizing auxiliary buffer");
                o.insert(AuxEntry::for_frame(frame));
                o.into_mut()
            }
            Entry::Vacant(v) => {
                self.stats.allocations = self.stats.allocations.saturating_add(1);
                trace_alloc(frame, "allocating auxiliary buffer");
                v.insert(AuxEntry::for_frame(frame))
            }
        }
    }

    /// Drop entries whose frame has been dropped. Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| !e.is_orphaned());
        let removed = before - self.entries.len();
        if removed > 0 {
            self.stats.evictions = self.stats.evictions.saturating_add(removed as u64);
            tracing::trace!(removed, "pruned auxiliary buffers of dropped frames");
        }
        removed
    }

    /// Drop the entry for `id`, if any.
    pub fn evict(&mut self, id: FrameId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of frames with a cached buffer.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes held by every cached buffer.
    pub fn retained_bytes(&self) -> usize {
        self.entries.values().map(AuxEntry::bytes).sum()
    }

    /// Allocation and reuse counters.
    pub fn stats(&self) -> AuxCacheStats {
        self.stats
    }
}

fn trace_alloc(frame: &FrameBuffer, msg: &'static str) {
    tracing::trace!(
        frame = frame.id().get(),
        width = frame.width(),
        height = frame.height(),
        "{msg}"
    );
}

#[cfg(test)]
#[path = "../../tests/unit/fx/cache.rs"]
mod tests;
