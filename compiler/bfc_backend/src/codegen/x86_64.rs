// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use bfc_errors::CompileError;
use bfc_ir::Run;
use bfc_target::reg::{IO_SCRATCH_REG, PTR_REG, TAPE_BASE_REG};
use bfc_target::TapeConfig;
use bfc_token::TokenKind;

use crate::codegen::labels::LabelAllocator;
use crate::codegen::tape_sim::{PointerMove, TapeState};
use crate::codegen::CodeGenerator;

use lazy_static::lazy_static;

// One-byte I/O through the Linux read/write syscalls. Each block
// transfers exactly one byte; consecutive reads or writes repeat the
// whole block, one per source token.
lazy_static! {
    static ref READ_BYTE: String = format!(
        "    mov     $0,             %rax
    mov     $0,             %rdi
    mov     $1,             %rdx
    lea     in_buf(%rip),   %rsi
    syscall
    movb    (%rsi),         {scratch}
    movb    {scratch},      ({base}, {ptr}, 1)
",
        scratch = IO_SCRATCH_REG,
        base = TAPE_BASE_REG,
        ptr = PTR_REG
    );

    static ref WRITE_BYTE: String = format!(
        "    mov     $1,             %rax
    mov     $1,             %rdi
    lea     ({base}, {ptr}, 1), %rsi
    mov     $1,             %rdx
    syscall
",
        base = TAPE_BASE_REG,
        ptr = PTR_REG
    );
}

// exit(0)
const EPILOGUE: &str = "    mov     $60,            %rax
    xor     %rdi,           %rdi
    syscall
";

/// Emits GNU-as x86-64 text for one file's run sequence. All state is
/// per-translation: `gen_program` starts from a zeroed pointer and an
/// empty label stack every time it is called.
pub struct X86_64CodeGenerator {
    config: TapeConfig,
    tape: TapeState,
    labels: LabelAllocator,
    code: String,
}

impl X86_64CodeGenerator {
    pub fn new(config: TapeConfig) -> Self {
        Self {
            config,
            tape: TapeState::new(config),
            labels: LabelAllocator::default(),
            code: String::new(),
        }
    }

    fn emit_prologue(&mut self) {
        self.code.push_str(&format!(
            ".section .rodata
.set tape_size, {size}

.section .bss
.lcomm tape, tape_size
.lcomm in_buf, 1

.section .text
.global _start

_start:
    xor     {ptr},          {ptr}
    lea     tape(%rip),     {base}
",
            size = self.config.size,
            ptr = PTR_REG,
            base = TAPE_BASE_REG
        ));
    }

    fn emit_cell_add(&mut self, count: usize) {
        self.code.push_str(&format!(
            "    addb    ${imm},            ({base}, {ptr}, 1)\n",
            imm = count % 256,
            base = TAPE_BASE_REG,
            ptr = PTR_REG
        ));
    }

    fn emit_cell_sub(&mut self, count: usize) {
        self.code.push_str(&format!(
            "    subb    ${imm},            ({base}, {ptr}, 1)\n",
            imm = count % 256,
            base = TAPE_BASE_REG,
            ptr = PTR_REG
        ));
    }

    fn emit_pointer_move(&mut self, mv: PointerMove) {
        let inst = match mv {
            PointerMove::Advance(n) => {
                format!("    add     ${n},            {ptr}\n", ptr = PTR_REG)
            }
            PointerMove::Retreat(n) => {
                format!("    sub     ${n},            {ptr}\n", ptr = PTR_REG)
            }
            PointerMove::Reload(offset) => {
                format!("    mov     ${offset},            {ptr}\n", ptr = PTR_REG)
            }
        };
        self.code.push_str(&inst);
    }

    fn emit_loop_entry(&mut self, id: usize) {
        self.code.push_str(&format!(
            "\ns{id}:
    cmpb    $0,             ({base}, {ptr}, 1)
    je      e{id}
",
            base = TAPE_BASE_REG,
            ptr = PTR_REG
        ));
    }

    fn emit_loop_exit(&mut self, id: usize) {
        self.code.push_str(&format!(
            "    cmpb    $0,             ({base}, {ptr}, 1)
    jne     s{id}

e{id}:
",
            base = TAPE_BASE_REG,
            ptr = PTR_REG
        ));
    }

    fn gen_run(&mut self, run: &Run) -> Result<(), CompileError> {
        match run.kind {
            TokenKind::T_PLUS => self.emit_cell_add(run.count),
            TokenKind::T_MINUS => self.emit_cell_sub(run.count),
            TokenKind::T_GTHAN => {
                let mv = self.tape.move_right(run.count);
                self.emit_pointer_move(mv);
            }
            TokenKind::T_LTHAN => {
                let mv = self.tape.move_left(run.count);
                self.emit_pointer_move(mv);
            }
            // reads and writes are externally observable; never
            // collapsed by count
            TokenKind::T_COMMA => {
                for _ in 0..run.count {
                    self.code.push_str(&READ_BYTE);
                }
            }
            TokenKind::T_DOT => {
                for _ in 0..run.count {
                    self.code.push_str(&WRITE_BYTE);
                }
            }
            // a run of n brackets is n nested loop entries or exits
            TokenKind::T_LBRACKET => {
                for _ in 0..run.count {
                    let id = self.labels.open(run.pos);
                    self.emit_loop_entry(id);
                }
            }
            TokenKind::T_RBRACKET => {
                for _ in 0..run.count {
                    let id = self.labels.close(run.pos)?;
                    self.emit_loop_exit(id);
                }
            }
        }
        Ok(())
    }
}

impl CodeGenerator for X86_64CodeGenerator {
    fn gen_program(&mut self, runs: &[Run]) -> Result<String, CompileError> {
        self.code.clear();
        self.tape = TapeState::new(self.config);
        self.labels = LabelAllocator::default();

        self.emit_prologue();
        for run in runs {
            self.gen_run(run)?;
        }
        self.labels.finish()?;
        self.code.push_str(EPILOGUE);
        Ok(std::mem::take(&mut self.code))
    }
}
