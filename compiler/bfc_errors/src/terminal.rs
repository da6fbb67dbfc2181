// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub const ANSI_COLOR_RED: &str = "\x1b[31m";
pub const ANSI_COLOR_YELLOW: &str = "\x1b[33m";
pub const ANSI_COLOR_CYAN: &str = "\x1b[36m";
pub const ANSI_COLOR_RESET: &str = "\x1b[0m";
