// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrCode {
    /// Character outside the recognized symbol set
    LEX1000     = 1000,

    /// Loop close without a matching open
    SYN2000     = 2000,

    /// End of input reached with an open loop
    SYN2001     = 2001,

    /// Tape size outside the permitted range
    CFG3000     = 3000,

    /// External assembler or linker failed
    EXT4000     = 4000,
}
