// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

//! Register convention assumed by the emitted text. The pointer
//! register holds the current tape offset and is wide enough for any
//! permitted tape size; `%rax`/`%rdi`/`%rsi`/`%rdx` are left free for
//! the syscall sequences that read and write single bytes.

/// Current data-pointer offset into the tape.
pub const PTR_REG: &str = "%r9";

/// Base address of the tape, loaded once in the prologue.
pub const TAPE_BASE_REG: &str = "%r10";

/// Byte scratch register used to move a read byte into the tape.
pub const IO_SCRATCH_REG: &str = "%r11b";
