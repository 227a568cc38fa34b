// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child classification: explicit capability tags for heterogeneous children.
//!
//! Hosts describe each child with a [`Child`] variant. The variant *is* the
//! capability declaration, so classification never has to probe a type at
//! runtime. [`classify`] resolves grouping wrappers, drops non-renderable
//! children, and yields one [`Classified`] entry per remaining child, in order.

use alloc::vec::Vec;

use crate::PanelProps;

/// Capability tag attached to a classified child.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A collapsible panel owned by the surrounding group.
    Panel,
    /// The always-visible header of a panel.
    Header,
    /// The collapsible body of a panel.
    Detail,
    /// Anything else; rendered unchanged.
    Passthrough,
}

/// A child descriptor as supplied by the host.
///
/// `T` is the host's opaque payload (a widget handle, a view description, a
/// string, ...). The core never inspects it.
#[derive(Clone, Debug)]
pub enum Child<T> {
    /// A non-renderable child (for example an absent or boolean value).
    ///
    /// Empty children are dropped and never count towards panel ordinals.
    Empty,
    /// A transparent grouping wrapper.
    ///
    /// Only its first element is used; the rest are ignored. An empty wrapper
    /// behaves like [`Child::Empty`].
    Group(Vec<Self>),
    /// A panel with its caller-supplied properties.
    Panel(PanelProps, T),
    /// A panel header.
    Header(T),
    /// A panel body.
    Detail(T),
    /// Content without any declared capability.
    Passthrough(T),
}

impl<T> Child<T> {
    /// Lift an optional payload: `None` becomes [`Child::Empty`].
    pub fn passthrough_or_empty(content: Option<T>) -> Self {
        content.map_or(Self::Empty, Self::Passthrough)
    }
}

/// A child after classification.
#[derive(Clone, Debug)]
pub enum Classified<T> {
    /// Panel-capable child.
    Panel(PanelProps, T),
    /// Header child.
    Header(T),
    /// Detail child.
    Detail(T),
    /// Passthrough child.
    Passthrough(T),
}

impl<T> Classified<T> {
    /// Returns the capability tag of this entry.
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Panel(..) => Tag::Panel,
            Self::Header(_) => Tag::Header,
            Self::Detail(_) => Tag::Detail,
            Self::Passthrough(_) => Tag::Passthrough,
        }
    }

    /// Returns a reference to the host payload.
    pub const fn content(&self) -> &T {
        match self {
            Self::Panel(_, t) | Self::Header(t) | Self::Detail(t) | Self::Passthrough(t) => t,
        }
    }

    /// Consumes the entry and returns the host payload.
    pub fn into_content(self) -> T {
        match self {
            Self::Panel(_, t) | Self::Header(t) | Self::Detail(t) | Self::Passthrough(t) => t,
        }
    }
}

/// Classify an ordered sequence of children.
///
/// - Grouping wrappers are replaced by their first element, repeatedly, before
///   tagging.
/// - [`Child::Empty`] entries (and empty wrappers) are dropped.
/// - Order is preserved for everything else.
///
/// This is a pure function over its input.
pub fn classify<T, I>(children: I) -> Vec<Classified<T>>
where
    I: IntoIterator<Item = Child<T>>,
{
    children.into_iter().filter_map(resolve).collect()
}

fn resolve<T>(mut child: Child<T>) -> Option<Classified<T>> {
    loop {
        child = match child {
            Child::Empty => return None,
            Child::Group(nested) => nested.into_iter().next()?,
            Child::Panel(props, t) => return Some(Classified::Panel(props, t)),
            Child::Header(t) => return Some(Classified::Header(t)),
            Child::Detail(t) => return Some(Classified::Detail(t)),
            Child::Passthrough(t) => return Some(Classified::Passthrough(t)),
        };
    }
}

/// The children of a single panel, split by capability.
#[derive(Clone, Debug)]
pub struct PanelParts<T> {
    /// The first header child, if any.
    pub header: Option<T>,
    /// Every detail child, in order.
    pub details: Vec<T>,
    /// Nested panels with their props, in order, ready to be rendered by a
    /// nested [`Group`](crate::Group).
    pub panels: Vec<Child<T>>,
    /// Everything else, in order: passthrough content and extra headers.
    pub rest: Vec<T>,
}

impl<T> Default for PanelParts<T> {
    fn default() -> Self {
        Self {
            header: None,
            details: Vec::new(),
            panels: Vec::new(),
            rest: Vec::new(),
        }
    }
}

impl<T> PanelParts<T> {
    /// Classify a panel's own children and split them into header, details,
    /// nested panels, and the rest.
    pub fn from_children<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Child<T>>,
    {
        let mut parts = Self::default();
        for entry in classify(children) {
            match entry {
                Classified::Header(t) if parts.header.is_none() => parts.header = Some(t),
                Classified::Detail(t) => parts.details.push(t),
                Classified::Panel(props, t) => parts.panels.push(Child::Panel(props, t)),
                other => parts.rest.push(other.into_content()),
            }
        }
        parts
    }

    /// Returns `true` if the panel has any collapsible body content.
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Group, GroupConfig, GroupId, PanelKey};
    use alloc::vec;

    fn tags<T>(entries: &[Classified<T>]) -> Vec<Tag> {
        entries.iter().map(Classified::tag).collect()
    }

    #[test]
    fn empty_children_are_dropped() {
        let out = classify(vec![
            Child::Empty,
            Child::Passthrough("a"),
            Child::Empty,
            Child::Panel(PanelProps::default(), "p"),
        ]);
        assert_eq!(tags(&out), vec![Tag::Passthrough, Tag::Panel]);
        assert_eq!(*out[1].content(), "p");
    }

    #[test]
    fn wrapper_uses_first_element() {
        let out = classify(vec![Child::Group(vec![
            Child::Panel(PanelProps::default(), 1),
            Child::Passthrough(2),
        ])]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag(), Tag::Panel);
        assert_eq!(out[0].content(), &1);
    }

    #[test]
    fn nested_wrappers_unwrap_repeatedly() {
        let out = classify(vec![Child::Group(vec![Child::Group(vec![Child::Detail(
            "body",
        )])])]);
        assert_eq!(tags(&out), vec![Tag::Detail]);
    }

    #[test]
    fn empty_wrapper_is_dropped() {
        let out: Vec<Classified<u8>> = classify(vec![
            Child::Group(vec![]),
            Child::Group(vec![Child::Empty, Child::Passthrough(1)]),
        ]);
        // The second wrapper's first element is empty, so it is dropped too.
        assert!(out.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let out = classify(vec![
            Child::Header("h"),
            Child::Passthrough("x"),
            Child::Detail("d"),
            Child::Panel(PanelProps::default(), "p"),
        ]);
        assert_eq!(
            tags(&out),
            vec![Tag::Header, Tag::Passthrough, Tag::Detail, Tag::Panel]
        );
        let contents: Vec<_> = out.into_iter().map(Classified::into_content).collect();
        assert_eq!(contents, vec!["h", "x", "d", "p"]);
    }

    #[test]
    fn optional_payload_lifts_to_empty() {
        let out = classify(vec![
            Child::passthrough_or_empty(None),
            Child::passthrough_or_empty(Some(7)),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].content(), &7);
    }

    #[test]
    fn panel_parts_split_by_capability() {
        let parts = PanelParts::from_children(vec![
            Child::Passthrough("icon"),
            Child::Header("title"),
            Child::Detail("first"),
            Child::Header("second title"),
            Child::Empty,
            Child::Detail("second"),
        ]);
        assert_eq!(parts.header, Some("title"));
        assert_eq!(parts.details, vec!["first", "second"]);
        assert_eq!(parts.rest, vec!["icon", "second title"]);
        assert!(parts.has_details());
    }

    #[test]
    fn panel_parts_without_header() {
        let parts: PanelParts<&str> = PanelParts::from_children(vec![Child::Passthrough("x")]);
        assert!(parts.header.is_none());
        assert!(!parts.has_details());
        assert!(parts.panels.is_empty());
        assert_eq!(parts.rest, vec!["x"]);
    }

    #[test]
    fn panel_parts_keep_nested_panel_props() {
        let pinned = PanelProps::always_open().with_key(PanelKey(3));
        let parts = PanelParts::from_children(vec![
            Child::Header("outer"),
            Child::Group(vec![Child::Panel(pinned.clone(), "inner")]),
            Child::Passthrough("x"),
        ]);
        assert_eq!(parts.rest, vec!["x"]);
        assert_eq!(parts.panels.len(), 1);
        assert!(matches!(
            &parts.panels[0],
            Child::Panel(props, "inner") if *props == pinned
        ));

        // The nested panels render as their own group with props intact.
        let mut nested = Group::with_id(GroupId::new("inner"), GroupConfig::default());
        let render = nested.render(parts.panels);
        let view = render.panels().next().unwrap();
        assert!(view.is_always_open() && view.is_open());
    }
}
