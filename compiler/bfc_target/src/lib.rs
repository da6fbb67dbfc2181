// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod reg;
pub mod tape;

pub use tape::{TapeConfig, TapeSizeClamp};
