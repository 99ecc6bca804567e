// SPDX-License-Identifier: MPL-2.0
//! Slider sub-components following the Message/Effect pattern.

pub mod hint;
pub mod input;
