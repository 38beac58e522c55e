// SPDX-License-Identifier: MPL-2.0
//! Widget style functions shared by all screens.

pub mod button;
pub mod container;
