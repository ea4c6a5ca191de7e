// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
mod composer;

pub use composer::FeedbackComposer;
