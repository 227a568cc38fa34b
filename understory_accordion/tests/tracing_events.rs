// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structured log events emitted with the `tracing` feature.

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use understory_accordion::{Child, Group, GroupConfig, GroupId, Mode, PanelProps};

#[derive(Clone, Debug, Default)]
struct Captured {
    spans: Vec<String>,
    messages: Vec<String>,
}

struct MessageVisitor(Option<String>);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0 = Some(value.to_string());
        }
    }
}

struct Capture(Arc<Mutex<Captured>>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Capture {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.0
            .lock()
            .unwrap()
            .spans
            .push(attrs.metadata().name().to_string());
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.0.lock().unwrap().messages.push(message);
        }
    }
}

fn capture(f: impl FnOnce()) -> Captured {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let subscriber = tracing_subscriber::registry().with(Capture(Arc::clone(&captured)));
    tracing::subscriber::with_default(subscriber, f);
    captured.lock().unwrap().clone()
}

#[test]
fn toggles_and_forced_closes_are_logged() {
    let captured = capture(|| {
        let mut group = Group::with_id(GroupId::new("log"), GroupConfig::with_mode(Mode::Single));
        let children = || {
            vec![
                Child::Panel(PanelProps::default(), ()),
                Child::Panel(PanelProps::default(), ()),
                Child::Panel(PanelProps::always_open(), ()),
            ]
        };
        group.render(children());
        let (a, b, pinned) = (
            group.panel_id(0).cloned().unwrap(),
            group.panel_id(1).cloned().unwrap(),
            group.panel_id(2).cloned().unwrap(),
        );
        group.toggle(&a);
        group.toggle(&b);
        group.toggle(&pinned);
    });

    assert!(captured.spans.iter().any(|s| s == "accordion.render"));
    let count = |m: &str| captured.messages.iter().filter(|x| *x == m).count();
    assert_eq!(count("accordion.toggle"), 2);
    assert_eq!(count("accordion.forced_close"), 1);
    assert_eq!(count("accordion.toggle_ignored"), 1);
}

#[test]
fn external_sync_and_prune_are_logged() {
    let captured = capture(|| {
        let mut group = Group::with_id(GroupId::new("log"), GroupConfig::default());
        group.render(vec![
            Child::Panel(PanelProps::opened(false), ()),
            Child::Panel(PanelProps::default(), ()),
        ]);
        group.render(vec![Child::Panel(PanelProps::opened(true), ())]);
    });

    let count = |m: &str| captured.messages.iter().filter(|x| *x == m).count();
    assert_eq!(count("accordion.external_sync"), 1);
    assert_eq!(count("accordion.prune"), 1);
}
