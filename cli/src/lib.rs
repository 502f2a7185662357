// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line host for the rooster timetable watcher.

mod cli;
mod config;
mod format;

pub use crate::cli::run;
