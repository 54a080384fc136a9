/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Staff planner – greedy person-day allocation across prioritised projects
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── config/      – optional YAML planner configuration
//! ├── table        – format-agnostic cells and tables
//! ├── adapter/     – CSV / Excel reading, xlsx / CSV report writing
//! ├── input/       – People & Projects tables → planning model
//! ├── model        – Person, Project, Grant
//! ├── notice       – non-fatal planning notices
//! ├── sequencer    – priority order → (project, role) work items
//! ├── allocator/   – least-loaded greedy allocation + capacity audit
//! ├── report/      – the four output reports
//! └── planner      – end-to-end pipeline
//! ```

pub mod adapter;
pub mod allocator;
pub mod config;
pub mod input;
pub mod model;
pub mod notice;
pub mod planner;
pub mod report;
pub mod sequencer;
pub mod table;
