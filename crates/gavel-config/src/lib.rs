// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
mod schema;
mod loader;

pub use schema::*;
pub use loader::load;
