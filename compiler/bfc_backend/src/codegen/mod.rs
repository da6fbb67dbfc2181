// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use bfc_errors::CompileError;
use bfc_ir::Run;

pub mod labels;
pub mod tape_sim;
pub mod x86_64;

pub trait CodeGenerator {
    /// Walk one file's run sequence and produce the complete
    /// instruction text for it. Implementations reset any
    /// per-translation state at the start of each call.
    fn gen_program(&mut self, runs: &[Run]) -> Result<String, CompileError>;
}
