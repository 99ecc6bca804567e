// SPDX-License-Identifier: MPL-2.0
//! Widget components and state management.
//!
//! Organized as a component-based architecture with the Elm-style
//! "state down, messages up" pattern:
//!
//! - [`state`] - Pure, reusable state types (position, geometry, drag,
//!   animation, seek dedup)
//! - [`slider`] - The slider facade and its input/hint sub-components

pub mod slider;
pub mod state;
