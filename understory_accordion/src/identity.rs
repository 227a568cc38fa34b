// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group and panel identity.
//!
//! A [`GroupId`] is an opaque prefix created once per group. Panels derive
//! their [`PanelId`] from that prefix and their ordinal among panel-capable
//! siblings, so ids follow position: re-rendering an unchanged list yields
//! identical ids, while inserting or removing an earlier panel shifts the ids
//! of later ones.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{Classified, PanelProps, Tag};

/// Opaque identity prefix of a group.
///
/// Cloning is cheap; clones compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(Arc<str>);

impl GroupId {
    /// Create a group id from a caller-chosen prefix.
    ///
    /// Uniqueness across groups is the caller's responsibility.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        Self(Arc::from(prefix))
    }

    /// Create a group id from a random v4 UUID.
    #[cfg(feature = "uuid")]
    pub fn random() -> Self {
        Self::new(alloc::format!("accordion-{}", uuid::Uuid::new_v4().simple()))
    }

    /// Returns the prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the panel at `ordinal` within this group.
    pub fn panel(&self, ordinal: usize) -> PanelId {
        PanelId {
            group: self.clone(),
            ordinal,
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a panel: its group prefix plus its ordinal among panels.
///
/// Displays as `"{prefix}_{ordinal}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId {
    group: GroupId,
    ordinal: usize,
}

impl PanelId {
    /// The owning group.
    pub fn group(&self) -> &GroupId {
        &self.group
    }

    /// Zero-based position among panel-capable siblings.
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.group, self.ordinal)
    }
}

/// Caller-supplied content identity for a panel.
///
/// When set on [`PanelProps::key`], a panel's durable open state follows this
/// key instead of its position. Ids still follow position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelKey(pub u64);

/// Key of the durable state slot backing a panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKey {
    /// Slot follows position.
    Ordinal(usize),
    /// Slot follows a caller-supplied key.
    Keyed(PanelKey),
}

/// A panel entry stamped with its identity.
#[derive(Clone, Debug)]
pub struct IdentifiedPanel<T> {
    /// Panel id.
    pub id: PanelId,
    /// Caller-supplied properties.
    pub props: PanelProps,
    /// Host payload.
    pub content: T,
}

/// A classified child after identity assignment.
#[derive(Clone, Debug)]
pub enum Identified<T> {
    /// A panel, with its id.
    Panel(IdentifiedPanel<T>),
    /// Any non-panel child, with its tag.
    Other {
        /// Capability tag ([`Tag::Header`], [`Tag::Detail`], or [`Tag::Passthrough`]).
        tag: Tag,
        /// Host payload.
        content: T,
    },
}

/// Stamp every panel entry with `(group, ordinal)`.
///
/// Ordinals count panel entries only, in sequence order; other entries are
/// passed through with their tag.
pub fn assign_identities<T>(group: &GroupId, classified: Vec<Classified<T>>) -> Vec<Identified<T>> {
    let mut next_ordinal = 0;
    classified
        .into_iter()
        .map(|entry| match entry {
            Classified::Panel(props, content) => {
                let id = group.panel(next_ordinal);
                next_ordinal += 1;
                Identified::Panel(IdentifiedPanel { id, props, content })
            }
            other => Identified::Other {
                tag: other.tag(),
                content: other.into_content(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Child, classify};
    use alloc::string::ToString;
    use alloc::vec;

    fn panel_ids<T>(entries: &[Identified<T>]) -> Vec<String> {
        entries
            .iter()
            .filter_map(|e| match e {
                Identified::Panel(p) => Some(p.id.to_string()),
                Identified::Other { .. } => None,
            })
            .collect()
    }

    #[test]
    fn ordinals_count_only_panels() {
        let group = GroupId::new("g");
        let out = assign_identities(
            &group,
            classify(vec![
                Child::Passthrough("intro"),
                Child::Panel(PanelProps::default(), "a"),
                Child::Empty,
                Child::Header("stray"),
                Child::Panel(PanelProps::default(), "b"),
            ]),
        );
        assert_eq!(panel_ids(&out), vec!["g_0", "g_1"]);
        assert!(matches!(
            out[0],
            Identified::Other {
                tag: Tag::Passthrough,
                content: "intro"
            }
        ));
        assert!(matches!(
            out[2],
            Identified::Other {
                tag: Tag::Header,
                ..
            }
        ));
    }

    #[test]
    fn identical_lists_yield_identical_ids() {
        let group = GroupId::new("stable");
        let children = || {
            vec![
                Child::Panel(PanelProps::default(), 0),
                Child::Passthrough(1),
                Child::Panel(PanelProps::default(), 2),
            ]
        };
        let first = assign_identities(&group, classify(children()));
        let second = assign_identities(&group, classify(children()));
        assert_eq!(panel_ids(&first), panel_ids(&second));
    }

    #[test]
    fn ids_follow_position_after_removal() {
        let group = GroupId::new("g");
        let out = assign_identities(
            &group,
            classify(vec![
                Child::Empty,
                Child::Panel(PanelProps::default(), "was second"),
            ]),
        );
        match &out[0] {
            Identified::Panel(p) => {
                assert_eq!(p.id.ordinal(), 0);
                assert_eq!(p.content, "was second");
            }
            Identified::Other { .. } => panic!("expected a panel"),
        }
    }

    #[test]
    fn panel_id_display_and_equality() {
        let group = GroupId::new("acc");
        let id = group.panel(3);
        assert_eq!(id.to_string(), "acc_3");
        assert_eq!(id, group.clone().panel(3));
        assert_ne!(id, GroupId::new("other").panel(3));
        assert_eq!(id.group().as_str(), "acc");
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn random_prefixes_differ() {
        assert_ne!(GroupId::random(), GroupId::random());
    }
}
