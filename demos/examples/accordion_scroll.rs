// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-mode accordion with sticky headers in a scrolling viewport.
//!
//! This example shows how to combine:
//! - `understory_accordion` for panel identity, exclusivity, and open state,
//! - `understory_sticky` for pinning the open panel's header while scrolling,
//! - a `ScrollNudge` reflow hint that records the layout nudges it would send.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example accordion_scroll`

use std::cell::Cell;

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_accordion::adapters::sticky::{header_rect, place_header};
use understory_accordion::{
    Child, Group, GroupConfig, GroupId, Mode, PanelProps, PanelView, Render, Rendered,
    ScrollNudge,
};
use understory_sticky::{StickyConfig, StickyPositioner};

const WIDTH: f64 = 320.0;
const HEADER_HEIGHT: f64 = 24.0;
const BODY_HEIGHT: f64 = 160.0;

/// Host payload: a title and some body lines.
#[derive(Clone, Copy, Debug)]
struct Section {
    title: &'static str,
    lines: usize,
}

fn children() -> Vec<Child<Section>> {
    vec![
        Child::Header(Section {
            title: "Help center",
            lines: 0,
        }),
        Child::Panel(
            PanelProps::default().with_sticky(),
            Section {
                title: "Shipping",
                lines: 6,
            },
        ),
        Child::Empty,
        Child::Group(vec![Child::Panel(
            PanelProps::default().with_sticky(),
            Section {
                title: "Returns",
                lines: 4,
            },
        )]),
        Child::Panel(
            PanelProps::always_open(),
            Section {
                title: "Contact",
                lines: 2,
            },
        ),
    ]
}

/// Natural header and panel rectangles, stacked top to bottom.
fn layout(render: &Render<Section>) -> Vec<(PanelView<Section>, Rect, Rect)> {
    let mut y = 0.0;
    let mut out = Vec::new();
    for child in &render.children {
        match child {
            Rendered::Panel(view) => {
                let body = if view.is_open() {
                    BODY_HEIGHT.min(view.content.lines as f64 * 20.0)
                } else {
                    0.0
                };
                let header = Rect::new(0.0, y, WIDTH, y + HEADER_HEIGHT);
                let panel = Rect::new(0.0, y, WIDTH, y + HEADER_HEIGHT + body);
                out.push((view.clone(), header, panel));
                y = panel.y1;
            }
            Rendered::Header(_) | Rendered::Detail(_) | Rendered::Passthrough(_) => {
                y += HEADER_HEIGHT;
            }
        }
    }
    out
}

fn print_render(render: &Render<Section>) {
    for view in render.panels() {
        let marker = if view.is_open() { "v" } else { ">" };
        let pinned = if view.is_always_open() { " (pinned)" } else { "" };
        println!("  {marker} [{}] {}{pinned}", view.id, view.content.title);
    }
    for change in &render.changes {
        println!("  change: {:?}", change);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let nudges = Cell::new(0_u32);
    let mut group = Group::with_id(GroupId::new("help"), GroupConfig::with_mode(Mode::Single))
        .with_reflow(ScrollNudge(|dy: f64| {
            tracing::trace!(dy, "reflow nudge");
            nudges.set(nudges.get() + 1);
        }));

    println!("== Initial render ==");
    let render = group.render(children());
    print_render(&render);

    let shipping = group.panel_id(0).cloned();
    let returns = group.panel_id(1).cloned();
    for (label, id) in [("Shipping", &shipping), ("Returns", &returns)] {
        let Some(id) = id else { continue };
        let change = group.toggle(id);
        println!("\n== Toggle {label}: {change:?} ==");
        print_render(&group.render(children()));
    }
    println!("\nreflow nudges sent: {}", nudges.get());

    println!("\n== Scrolling ==");
    let render = group.render(children());
    let panels = layout(&render);
    let mut sticky = StickyPositioner::new(StickyConfig { top_offset: 4.0 });
    for offset in [0.0, 40.0, 80.0, 120.0, 160.0] {
        sticky.set_scroll_offset(offset);
        println!("scroll {offset:>5.1}:");
        for (view, header, panel) in &panels {
            let placement = place_header(view, &sticky, *header, *panel);
            let rect = header_rect(view, &sticky, *header, *panel);
            println!(
                "  {:<8} {:?} at y={:.1}",
                view.content.title, placement, rect.y0
            );
        }
    }

    println!("\n== Snapshot ==");
    let snapshot = group.snapshot();
    println!("{snapshot:?}");

    let mut fresh = Group::with_id(GroupId::new("help"), GroupConfig::with_mode(Mode::Single));
    fresh.render(children());
    let applied = fresh.restore(&snapshot);
    println!("restored {applied} slots into a fresh group:");
    print_render(&fresh.render(children()));
}
