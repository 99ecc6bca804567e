// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is the interaction core of a before/after image comparison
//! slider widget, built for embedding in Iced applications.
//!
//! The widget keeps a single normalized divider position in sync across
//! pointer dragging, keyboard stepping, and externally invoked seeks, drives
//! the clipped layout of the two panes and the divider bar, and manages the
//! transient "drag me" hint affordance shown to first-time users.

#![doc(html_root_url = "https://docs.rs/iced_compare/0.1.0")]

pub mod config;
pub mod error;
pub mod host;
pub mod ui;

#[cfg(test)]
mod test_utils;
