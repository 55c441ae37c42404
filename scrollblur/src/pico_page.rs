// Copyright 2026 the Scrollblur Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal in-memory page for driving the controller in examples and tests
//!
//! This module provides a simple page implementation with a tiny selector
//! engine so the controller can be exercised without a browser. It supports
//! type and class simple selectors, compound selectors, child (`>`) and
//! descendant (whitespace) combinators, and comma-separated selector lists,
//! which is enough for the default selector and realistic test pages.
//! Anything else is a parse error, and a query with an unparsable selector
//! matches nothing.

use crate::filter::Filter;
use crate::page::{ClassList, NodeId, Page};
use log::warn;
use peniko::kurbo::{Rect, Vec2};
use thiserror::Error;

/// A simplified in-memory page.
///
/// Nodes form a tree via parent handles, carry class names and a bounding
/// rect relative to the viewport, and record the last filter text written
/// to them. The page starts ready; use [`set_ready`](Self::set_ready) to
/// model a still-loading document.
#[derive(Debug)]
pub struct PicoPage {
    ready: bool,
    viewport_height: f64,
    nodes: Vec<PicoNode>,
}

/// A single element of a [`PicoPage`].
#[derive(Debug)]
struct PicoNode {
    /// Tag name, lower case.
    tag: String,
    /// Class names.
    classes: Vec<String>,
    /// Parent element, if any.
    parent: Option<NodeId>,
    /// Bounding rect relative to the viewport's top-left corner.
    rect: Rect,
    /// Detached nodes (and their descendants) are invisible to queries.
    detached: bool,
    /// The last filter style written, as CSS text. `None` until the first
    /// write.
    filter: Option<String>,
}

impl PicoPage {
    /// Create an empty, ready page with the given viewport height.
    pub fn new(viewport_height: f64) -> Self {
        Self {
            ready: true,
            viewport_height,
            nodes: Vec::new(),
        }
    }

    /// Append an element and return its handle.
    pub fn insert(
        &mut self,
        tag: &str,
        classes: &[&str],
        parent: Option<NodeId>,
        rect: Rect,
    ) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(PicoNode {
            tag: tag.to_ascii_lowercase(),
            classes: classes.iter().map(|class| class.to_string()).collect(),
            parent,
            rect,
            detached: false,
            filter: None,
        });
        id
    }

    /// Change whether the document is ready for queries.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Change the viewport height, as a window resize would.
    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
    }

    /// Scroll the page down by `delta` pixels, shifting every bounding
    /// rect up by the same amount. Negative `delta` scrolls up.
    pub fn scroll_by(&mut self, delta: f64) {
        for node in &mut self.nodes {
            node.rect = node.rect - Vec2::new(0.0, delta);
        }
    }

    /// Replace a node's bounding rect.
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        self.node_mut(node).rect = rect;
    }

    /// Remove a node (and with it, its subtree) from future queries.
    pub fn detach(&mut self, node: NodeId) {
        self.node_mut(node).detached = true;
    }

    /// The last filter text written to `node`, or `None` if the node has
    /// never been written to.
    pub fn filter(&self, node: NodeId) -> Option<&str> {
        self.node(node).filter.as_deref()
    }

    /// The node's current bounding rect.
    pub fn rect(&self, node: NodeId) -> Rect {
        self.node(node).rect
    }

    fn node(&self, id: NodeId) -> &PicoNode {
        &self.nodes[id.to_raw() as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut PicoNode {
        &mut self.nodes[id.to_raw() as usize]
    }

    fn is_detached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.node(id);
            if node.detached {
                return true;
            }
            current = node.parent;
        }
        false
    }

    fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        selector
            .alternatives
            .iter()
            .any(|complex| self.matches_complex(id, complex))
    }

    fn matches_complex(&self, id: NodeId, complex: &Complex) -> bool {
        self.matches_compound(id, &complex.subject)
            && self.matches_ancestors(self.node(id).parent, &complex.ancestors)
    }

    /// Match the ancestor chain starting at `start`, nearest constraint
    /// first. A descendant combinator retries higher ancestors when the
    /// remaining chain fails further up.
    fn matches_ancestors(&self, start: Option<NodeId>, chain: &[(Combinator, Compound)]) -> bool {
        let Some(((combinator, compound), rest)) = chain.split_first() else {
            return true;
        };
        match combinator {
            Combinator::Child => start.is_some_and(|parent| {
                self.matches_compound(parent, compound)
                    && self.matches_ancestors(self.node(parent).parent, rest)
            }),
            Combinator::Descendant => {
                let mut current = start;
                while let Some(ancestor) = current {
                    if self.matches_compound(ancestor, compound)
                        && self.matches_ancestors(self.node(ancestor).parent, rest)
                    {
                        return true;
                    }
                    current = self.node(ancestor).parent;
                }
                false
            }
        }
    }

    fn matches_compound(&self, id: NodeId, compound: &Compound) -> bool {
        let node = self.node(id);
        if compound.tag.as_ref().is_some_and(|tag| *tag != node.tag) {
            return false;
        }
        compound
            .classes
            .iter()
            .all(|class| node.classes.iter().any(|own| own == class))
    }
}

impl Page for PicoPage {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn query(&self, selector: &str) -> Vec<NodeId> {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("ignoring selector {selector:?}: {err}");
                return Vec::new();
            }
        };
        (0..self.nodes.len() as u32)
            .map(NodeId::new)
            .filter(|id| !self.is_detached(*id) && self.matches(*id, &parsed))
            .collect()
    }

    fn class_names(&self, node: NodeId) -> ClassList<'_> {
        self.node(node).classes.iter().map(String::as_str).collect()
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.node(node).rect
    }

    fn set_filter(&mut self, node: NodeId, filter: Filter) {
        self.node_mut(node).filter = Some(filter.to_css_string());
    }
}

/// Errors from parsing a pico selector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// A selector or selector-list alternative with no content.
    #[error("empty selector")]
    Empty,
    /// A character with no meaning to the pico engine, including all
    /// unsupported selector syntax (ids, attributes, pseudo-classes).
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    /// A `.` with no class name after it.
    #[error("expected a class name after '.'")]
    MissingClassName,
    /// A combinator with no compound selector after it.
    #[error("dangling combinator")]
    DanglingCombinator,
}

/// A parsed selector: one or more comma-separated alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        for part in source.split(',') {
            alternatives.push(parse_complex(part)?);
        }
        Ok(Self { alternatives })
    }
}

/// One alternative: a subject compound plus ancestor constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    /// Matched against the candidate element itself.
    subject: Compound,
    /// Constraints on the candidate's ancestors, nearest first.
    ancestors: Vec<(Combinator, Compound)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Child,
    Descendant,
}

/// An optional tag name plus any number of required classes. The
/// universal selector `*` is a compound with neither.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

fn parse_complex(source: &str) -> Result<Complex, SelectorError> {
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();
    let mut rest = source.trim();
    if rest.is_empty() {
        return Err(SelectorError::Empty);
    }
    loop {
        let (compound, after) = parse_compound(rest)?;
        compounds.push(compound);
        rest = after.trim_start();
        if rest.is_empty() {
            break;
        }
        if let Some(stripped) = rest.strip_prefix('>') {
            combinators.push(Combinator::Child);
            rest = stripped.trim_start();
            if rest.is_empty() {
                return Err(SelectorError::DanglingCombinator);
            }
        } else {
            combinators.push(Combinator::Descendant);
        }
    }

    // `compounds` is always one longer than `combinators`; pair each
    // remaining compound with the combinator to its right.
    let subject = compounds.pop().expect("at least one compound parsed");
    let mut ancestors = Vec::new();
    while let (Some(compound), Some(combinator)) = (compounds.pop(), combinators.pop()) {
        ancestors.push((combinator, compound));
    }
    Ok(Complex { subject, ancestors })
}

fn parse_compound(source: &str) -> Result<(Compound, &str), SelectorError> {
    let mut compound = Compound::default();
    let mut rest = source;
    let mut consumed = false;
    if let Some(stripped) = rest.strip_prefix('*') {
        rest = stripped;
        consumed = true;
    } else {
        let (ident, after) = take_ident(rest);
        if !ident.is_empty() {
            compound.tag = Some(ident.to_ascii_lowercase());
            rest = after;
            consumed = true;
        }
    }
    while let Some(stripped) = rest.strip_prefix('.') {
        let (ident, after) = take_ident(stripped);
        if ident.is_empty() {
            return Err(SelectorError::MissingClassName);
        }
        compound.classes.push(ident.to_string());
        rest = after;
        consumed = true;
    }
    if !consumed {
        return Err(match rest.chars().next() {
            Some(unexpected) => SelectorError::UnexpectedChar(unexpected),
            None => SelectorError::Empty,
        });
    }
    // Only the end of input, whitespace, or a combinator may follow.
    match rest.chars().next() {
        None => {}
        Some(next) if next.is_whitespace() || next == '>' => {}
        Some(unexpected) => return Err(SelectorError::UnexpectedChar(unexpected)),
    }
    Ok((compound, rest))
}

fn take_ident(source: &str) -> (&str, &str) {
    let end = source
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(source.len());
    source.split_at(end)
}
