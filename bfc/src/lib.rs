// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod compiler;

pub use compiler::{BuildOptions, CompilerPipeline};

use bfc_errors::CompileError;

pub fn compile_file(file_name: &str, opts: BuildOptions) -> Result<(), CompileError> {
    let mut comp = CompilerPipeline::new(opts);
    comp.compile(file_name)
}
