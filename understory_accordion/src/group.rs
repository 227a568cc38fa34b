// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The group coordinator: identity, exclusivity, and durable panel state.

use alloc::vec::Vec;

use hashbrown::hash_map::Entry;
use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::{
    Child, GroupId, GroupSnapshot, Identified, NoReflow, PanelFlags, PanelId, PanelState,
    ReflowHint, SlotKey, SlotSnapshot, Tag, assign_identities, classify,
};

/// Exclusivity policy of a group.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// At most one panel is opened by user interaction at a time: activating a
    /// panel closes every other panel that is not pinned open.
    Single,
    /// Panels open and close independently.
    #[default]
    Multi,
}

/// Host-defined presentation handle.
///
/// The core carries these values to every panel without interpreting them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PresentationSymbol(pub u64);

/// Pass-through presentation properties injected into every panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Presentation {
    /// Surface treatment (for example, a background variant).
    pub surface: Option<PresentationSymbol>,
    /// Viewport class (for example, compact or wide).
    pub viewport: Option<PresentationSymbol>,
}

/// Construction-time configuration of a [`Group`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupConfig {
    /// Exclusivity policy. Fixed for the lifetime of the group.
    pub mode: Mode,
    /// Pass-through presentation properties.
    pub presentation: Presentation,
}

impl GroupConfig {
    /// Configuration with the given mode and default presentation.
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// What triggered a committed transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cause {
    /// A user toggle via [`Group::toggle`].
    User,
    /// A change of the caller's controlled [`PanelProps::opened`](crate::PanelProps::opened).
    External,
}

/// A committed open/close transition to report to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    /// Panel that changed.
    pub id: PanelId,
    /// New open state.
    pub opened: bool,
    /// Trigger.
    pub cause: Cause,
}

/// A panel as rendered by its group, with all derived properties.
#[derive(Clone, Debug)]
pub struct PanelView<T> {
    /// Panel id.
    pub id: PanelId,
    /// Exclusivity policy of the owning group.
    pub mode: Mode,
    /// Active panel of the group; always `None` in [`Mode::Multi`].
    pub active: Option<PanelId>,
    /// Derived flags.
    pub flags: PanelFlags,
    /// Pass-through presentation properties.
    pub presentation: Presentation,
    /// Host payload.
    pub content: T,
}

impl<T> PanelView<T> {
    /// Zero-based position among the group's panels.
    pub fn ordinal(&self) -> usize {
        self.id.ordinal()
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.flags.contains(PanelFlags::OPEN)
    }

    /// Whether the panel is pinned open.
    pub fn is_always_open(&self) -> bool {
        self.flags.contains(PanelFlags::ALWAYS_OPEN)
    }

    /// Whether the panel's header is sticky.
    pub fn is_sticky(&self) -> bool {
        self.flags.contains(PanelFlags::STICKY)
    }

    /// Whether this is the first panel (draws the leading divider).
    pub fn is_first(&self) -> bool {
        self.flags.contains(PanelFlags::FIRST)
    }

    /// Whether this is the last panel (draws the trailing divider).
    pub fn is_last(&self) -> bool {
        self.flags.contains(PanelFlags::LAST)
    }

    /// Replace the payload, keeping every derived property.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PanelView<U> {
        PanelView {
            id: self.id,
            mode: self.mode,
            active: self.active,
            flags: self.flags,
            presentation: self.presentation,
            content: f(self.content),
        }
    }
}

/// A child as rendered by its group.
#[derive(Clone, Debug)]
pub enum Rendered<T> {
    /// A panel with derived properties.
    Panel(PanelView<T>),
    /// A header outside any panel; rendered unchanged.
    Header(T),
    /// A detail outside any panel; rendered unchanged.
    Detail(T),
    /// Other content; rendered unchanged.
    Passthrough(T),
}

/// Output of one [`Group::render`] pass.
#[derive(Clone, Debug)]
pub struct Render<T> {
    /// Rendered children, in input order, with empty children dropped.
    pub children: Vec<Rendered<T>>,
    /// Transitions committed by this pass (controlled-value syncs).
    pub changes: SmallVec<[Change; 2]>,
}

impl<T> Render<T> {
    /// Iterate over rendered panels only.
    pub fn panels(&self) -> impl Iterator<Item = &PanelView<T>> {
        self.children.iter().filter_map(|child| match child {
            Rendered::Panel(view) => Some(view),
            _ => None,
        })
    }
}

#[derive(Clone, Debug)]
struct PanelEntry {
    id: PanelId,
    slot: SlotKey,
}

/// Coordinator of a group of collapsible panels.
///
/// A group is created once and rendered many times. Each [`render`](Self::render)
/// re-derives classification, ids, and boundary flags from the children it is
/// given; only the open state of each panel is durable, stored in slots keyed
/// by position (or by [`PanelProps::key`](crate::PanelProps::key) when set).
///
/// In [`Mode::Single`], a user toggle makes the toggled panel the active one
/// and then closes every other open panel that is not pinned open. The active
/// panel is tracked by its slot, so it follows the same identity as its open
/// state.
#[derive(Debug)]
pub struct Group<R = NoReflow> {
    id: GroupId,
    config: GroupConfig,
    active: Option<SlotKey>,
    /// Active slot for which forced closes have already been delivered.
    settled: Option<SlotKey>,
    slots: HashMap<SlotKey, PanelState>,
    panels: Vec<PanelEntry>,
    reflow: R,
}

impl Group<NoReflow> {
    /// Create a group with a random id prefix.
    #[cfg(feature = "uuid")]
    pub fn new(config: GroupConfig) -> Self {
        Self::with_id(GroupId::random(), config)
    }

    /// Create a group with a caller-chosen id prefix.
    pub fn with_id(id: GroupId, config: GroupConfig) -> Self {
        Self {
            id,
            config,
            active: None,
            settled: None,
            slots: HashMap::new(),
            panels: Vec::new(),
            reflow: NoReflow,
        }
    }
}

impl<R: ReflowHint> Group<R> {
    /// Replace the reflow hint invoked after committed user toggles.
    pub fn with_reflow<R2: ReflowHint>(self, reflow: R2) -> Group<R2> {
        Group {
            id: self.id,
            config: self.config,
            active: self.active,
            settled: self.settled,
            slots: self.slots,
            panels: self.panels,
            reflow,
        }
    }

    /// The group's id prefix.
    pub fn group_id(&self) -> &GroupId {
        &self.id
    }

    /// The group's exclusivity policy.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// The group's configuration.
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// The active panel, if any. Never set in [`Mode::Multi`].
    ///
    /// Always one of the panels of the most recent render.
    pub fn active(&self) -> Option<&PanelId> {
        let active = self.active?;
        self.panels
            .iter()
            .find(|entry| entry.slot == active)
            .map(|entry| &entry.id)
    }

    /// Number of panels in the most recent render.
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Id of the panel at `ordinal` in the most recent render.
    pub fn panel_id(&self, ordinal: usize) -> Option<&PanelId> {
        self.panels.get(ordinal).map(|entry| &entry.id)
    }

    /// Whether the panel `id` is currently open.
    ///
    /// Unknown or stale ids report `false`.
    pub fn is_open(&self, id: &PanelId) -> bool {
        self.state_of(id).is_some_and(PanelState::is_open)
    }

    /// Iterate over the ids of open panels, in order.
    pub fn open_panels(&self) -> impl Iterator<Item = &PanelId> {
        self.panels
            .iter()
            .filter(|entry| self.slots.get(&entry.slot).is_some_and(PanelState::is_open))
            .map(|entry| &entry.id)
    }

    /// The reflow hint.
    pub fn reflow_hint(&self) -> &R {
        &self.reflow
    }

    /// The reflow hint, mutably.
    pub fn reflow_hint_mut(&mut self) -> &mut R {
        &mut self.reflow
    }

    /// Render a list of children.
    ///
    /// Classifies the children, assigns panel ids, reconciles durable state
    /// (mounting new slots, applying always-open, syncing changed controlled
    /// values, and dropping slots of panels that disappeared), settles
    /// exclusivity, and derives a [`PanelView`] for every panel.
    pub fn render<T, I>(&mut self, children: I) -> Render<T>
    where
        I: IntoIterator<Item = Child<T>>,
    {
        let identified = assign_identities(&self.id, classify(children));
        let panel_count = identified
            .iter()
            .filter(|entry| matches!(entry, Identified::Panel(_)))
            .count();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "accordion.render",
            group = %self.id,
            children = identified.len(),
            panels = panel_count
        )
        .entered();

        let mut changes = SmallVec::new();
        let mut claimed: HashSet<SlotKey> = HashSet::with_capacity(panel_count);
        self.panels.clear();

        for entry in &identified {
            let Identified::Panel(panel) = entry else {
                continue;
            };
            // A repeated key falls back to the panel's position.
            let slot = match panel.props.key {
                Some(key) if !claimed.contains(&SlotKey::Keyed(key)) => SlotKey::Keyed(key),
                _ => SlotKey::Ordinal(panel.id.ordinal()),
            };
            claimed.insert(slot);

            match self.slots.entry(slot) {
                Entry::Occupied(mut occupied) => {
                    let state = occupied.get_mut();
                    state.pin(panel.props.always_open);
                    if let Some(opened) = state.sync(panel.props.opened) {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            message = "accordion.external_sync",
                            panel = %panel.id,
                            opened
                        );
                        changes.push(Change {
                            id: panel.id.clone(),
                            opened,
                            cause: Cause::External,
                        });
                    }
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(PanelState::new(&panel.props));
                }
            }
            self.panels.push(PanelEntry {
                id: panel.id.clone(),
                slot,
            });
        }

        let mounted = self.slots.len();
        self.slots.retain(|slot, _| claimed.contains(slot));
        #[cfg(feature = "tracing")]
        if mounted != self.slots.len() {
            tracing::debug!(
                message = "accordion.prune",
                group = %self.id,
                dropped = mounted - self.slots.len()
            );
        }
        #[cfg(not(feature = "tracing"))]
        let _ = mounted;

        if self.active.is_some_and(|slot| !claimed.contains(&slot)) {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "accordion.active_removed", group = %self.id);
            self.active = None;
            self.settled = None;
        }
        self.settle();

        let mode = self.config.mode;
        let presentation = self.config.presentation;
        let active = match mode {
            Mode::Single => self.active().cloned(),
            Mode::Multi => None,
        };
        let children = identified
            .into_iter()
            .map(|entry| match entry {
                Identified::Panel(panel) => {
                    let ordinal = panel.id.ordinal();
                    let open = self.state_of(&panel.id).is_some_and(PanelState::is_open);
                    let mut flags = PanelFlags::empty();
                    flags.set(PanelFlags::OPEN, open);
                    flags.set(PanelFlags::ALWAYS_OPEN, panel.props.always_open);
                    flags.set(PanelFlags::STICKY, panel.props.sticky);
                    flags.set(PanelFlags::FIRST, ordinal == 0);
                    flags.set(PanelFlags::LAST, ordinal + 1 == panel_count);
                    Rendered::Panel(PanelView {
                        id: panel.id,
                        mode,
                        active: active.clone(),
                        flags,
                        presentation,
                        content: panel.content,
                    })
                }
                Identified::Other { tag, content } => match tag {
                    Tag::Header => Rendered::Header(content),
                    Tag::Detail => Rendered::Detail(content),
                    Tag::Panel | Tag::Passthrough => Rendered::Passthrough(content),
                },
            })
            .collect();

        Render { children, changes }
    }

    /// Handle a user toggle of panel `id`.
    ///
    /// Returns the committed transition, or `None` if nothing changed: the id
    /// is unknown to the most recent render, or the panel is pinned open.
    ///
    /// In [`Mode::Single`] the toggled panel becomes active before any sibling
    /// is considered, and every other open panel that is not pinned open is
    /// closed. Forced closes are not reported as [`Change`]s.
    pub fn toggle(&mut self, id: &PanelId) -> Option<Change> {
        let slot = self.panels.iter().find(|entry| &entry.id == id)?.slot;
        let Some(opened) = self.slots.get_mut(&slot)?.toggle() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "accordion.toggle_ignored", panel = %id);
            return None;
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "accordion.toggle", panel = %id, opened);

        if self.config.mode == Mode::Single {
            self.active = Some(slot);
            self.settle();
        }
        self.reflow.reflow();

        Some(Change {
            id: id.clone(),
            opened,
            cause: Cause::User,
        })
    }

    /// Capture the open state of every mounted slot and the active panel.
    pub fn snapshot(&self) -> GroupSnapshot {
        let mut slots: Vec<SlotSnapshot> = self
            .slots
            .iter()
            .map(|(slot, state)| SlotSnapshot {
                slot: *slot,
                open: state.is_open(),
            })
            .collect();
        slots.sort_by_key(|saved| saved.slot);
        GroupSnapshot {
            active: self.active,
            slots,
        }
    }

    /// Reapply a snapshot to the mounted slots.
    ///
    /// Slots the group does not currently have are ignored, and pinned panels
    /// stay open. The active panel is restored without closing siblings, if
    /// its slot is mounted.
    /// Returns the number of slots applied.
    pub fn restore(&mut self, snapshot: &GroupSnapshot) -> usize {
        let mut applied = 0;
        for saved in &snapshot.slots {
            if let Some(state) = self.slots.get_mut(&saved.slot) {
                state.restore(saved.open);
                applied += 1;
            }
        }
        if self.config.mode == Mode::Single {
            self.active = snapshot
                .active
                .filter(|slot| self.panels.iter().any(|entry| entry.slot == *slot));
            self.settled = self.active;
        }
        applied
    }

    fn state_of(&self, id: &PanelId) -> Option<&PanelState> {
        let entry = self.panels.get(id.ordinal()).filter(|entry| &entry.id == id)?;
        self.slots.get(&entry.slot)
    }

    /// Deliver forced closes for a newly active panel, once per change.
    fn settle(&mut self) {
        if self.config.mode != Mode::Single || self.active == self.settled {
            return;
        }
        self.settled = self.active;
        let Some(active) = self.active else {
            return;
        };
        for entry in &self.panels {
            if entry.slot == active {
                continue;
            }
            let Some(state) = self.slots.get_mut(&entry.slot) else {
                continue;
            };
            let closed = state.force_close();
            #[cfg(feature = "tracing")]
            if closed {
                tracing::debug!(
                    message = "accordion.forced_close",
                    panel = %entry.id,
                    active = ?active
                );
            }
            #[cfg(not(feature = "tracing"))]
            let _ = closed;
        }
    }
}
