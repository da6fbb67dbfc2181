// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod codegen;

pub use codegen::x86_64::X86_64CodeGenerator;
pub use codegen::CodeGenerator;
