// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
mod app;
mod client_task;
mod editor;
mod keys;
mod layout;
mod markup;
mod overlay;
mod submit;
mod view;
mod widgets;

pub use app::{App, AppOptions};
pub use client_task::{client_task, ClientRequest};
pub use markup::{render, style_nodes, MarkupNode, StyledLines};
