// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between the controller and the host page.
//!
//! A host owns a live UI tree, a viewport, and an event loop. The
//! controller needs four capabilities from it: a selector query, per-node
//! class names and bounding geometry, and a filter write. Everything else
//! (selector semantics, layout, style recalculation) stays on the host's
//! side of this trait.

use crate::filter::Filter;
use peniko::kurbo::Rect;
use smallvec::SmallVec;

/// Handle to an element of the host page.
///
/// A handle is only meaningful to the [`Page`] that issued it, and only
/// for the refresh it was issued in; the candidate set is re-queried from
/// scratch every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a node handle from a raw index.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw index backing this handle.
    pub fn to_raw(self) -> u32 {
        self.0
    }
}

/// Host lifecycle signals the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSignal {
    /// The document has become ready for element queries. Hosts fire this
    /// at most once.
    Ready,
    /// The viewport scrolled.
    Scrolled,
    /// The viewport was resized.
    Resized,
}

/// Class names of a single element.
pub type ClassList<'a> = SmallVec<[&'a str; 8]>;

/// Access to the live page, as required by
/// [`ViewportBlurController`](crate::ViewportBlurController).
///
/// All methods are synchronous views over host state and are called from
/// whatever thread owns the page, within a single event turn. Reads and
/// writes are never interleaved with other page mutations during one
/// refresh.
pub trait Page {
    /// Whether the document is ready for element queries.
    fn is_ready(&self) -> bool;

    /// Current viewport height in CSS pixels.
    fn viewport_height(&self) -> f64;

    /// Handles of all elements currently matched by `selector`, in
    /// document order.
    ///
    /// A selector the host cannot interpret matches nothing.
    fn query(&self, selector: &str) -> Vec<NodeId>;

    /// Class names of `node`.
    fn class_names(&self, node: NodeId) -> ClassList<'_>;

    /// Bounding rectangle of `node` in CSS pixels, relative to the
    /// viewport's top-left corner. The vertical extent may be negative or
    /// exceed the viewport height.
    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// Write `filter` as `node`'s filter style.
    fn set_filter(&mut self, node: NodeId, filter: Filter);
}
