// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving `understory_row_snap` from a toy scroll surface.
//!
//! This example plays the host role:
//! - a fling ends somewhere between rows and is rewritten onto a snap point,
//! - the surface tweens there and reports the settled offset,
//! - application code then assigns the snapped row to seek programmatically.
//!
//! Run:
//! - `cargo run -p understory_demos --example row_snap_scroll`

use kurbo::Size;
use understory_row_snap::{
    Curve, Identifiable, RowSnapConfig, RowSnapScroll, ScrollRequest, ScrollTarget,
    ScrollTargetBehavior, Transition,
};

#[derive(Clone, Debug, PartialEq)]
struct Card {
    name: &'static str,
    height: f64,
}

impl Identifiable for Card {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        self.name
    }
}

/// Minimal stand-in for a platform scroll view.
#[derive(Debug)]
struct Surface {
    viewport: Size,
    offset: f64,
}

impl Surface {
    /// Moves to `to`, printing a few frames when animated.
    fn scroll_to(&mut self, to: f64, transition: Transition) {
        match transition {
            Transition::Immediate => self.offset = to,
            Transition::Animated(curve) => {
                let from = self.offset;
                for frame in 1..=4 {
                    let t = f64::from(frame) / 4.0;
                    self.offset = from + (to - from) * curve.sample(t);
                    println!("    frame {frame}: offset {:.1}", self.offset);
                }
                self.offset = to;
            }
        }
    }

    fn apply(&mut self, request: Option<ScrollRequest<&'static str>>) {
        match request {
            Some(ScrollRequest {
                target: Some(target),
                transition,
            }) => {
                println!("  seek to {:?} at {} ({transition:?})", target.id, target.offset);
                self.scroll_to(target.offset, transition);
            }
            Some(ScrollRequest { target: None, .. }) => println!("  seek with no target"),
            None => println!("  no seek"),
        }
    }
}

fn main() {
    let cards = vec![
        Card {
            name: "inbox",
            height: 50.0,
        },
        Card {
            name: "drafts",
            height: 30.0,
        },
        Card {
            name: "archive",
            height: 70.0,
        },
    ];
    let mut list = RowSnapScroll::new(cards, RowSnapConfig::default(), |c: &Card| c.height);
    let mut surface = Surface {
        viewport: Size::new(320.0, 120.0),
        offset: 0.0,
    };
    println!("snap points: {:?}", list.table().points());

    println!("mount, seeding `inbox`:");
    let inbox = list.rows()[0].clone();
    surface.apply(list.set_snapped_item(Some(inbox)));

    println!("fling ends at 55:");
    let mut target = ScrollTarget::at_offset(55.0, surface.viewport);
    list.update_target(&mut target);
    surface.scroll_to(target.offset(), Transition::Animated(Curve::default()));
    let snapped = list.on_offset_settled(surface.offset);
    println!("  snapped: {:?}", snapped.map(|c| c.name));

    println!("select `archive`:");
    let archive = list.rows()[2].clone();
    surface.apply(list.set_snapped_item(Some(archive.clone())));

    println!("select `archive` again:");
    surface.apply(list.set_snapped_item(Some(archive)));
}
