// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use bfc_backend::{CodeGenerator, X86_64CodeGenerator};
use bfc_comp_unit::{CompilationUnit, SourceFile, TranslationStageError};
use bfc_errors::code::ErrCode;
use bfc_errors::diagnostic::{Diagnostic, DiagnosticBag};
use bfc_errors::CompileError;
use bfc_ir::RunCoalescer;
use bfc_lexer::Tokenizer;
use bfc_target::{TapeConfig, TapeSizeClamp};

use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// `-o`: name of the produced artifact. Derived from the source
    /// file name when absent.
    pub out_path: Option<String>,

    /// `-S`: stop after emitting a `.s` file.
    pub gen_asm: bool,

    /// `-c`: stop after assembling a `.o` file.
    pub gen_object: bool,

    /// `-s`: requested tape size in bytes, clamped by the pipeline.
    pub tape_size: u64,

    /// `-v`: progress lines on stderr.
    pub verbose: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            out_path: None,
            gen_asm: false,
            gen_object: false,
            tape_size: bfc_target::tape::TAPE_SIZE_DEFAULT,
            verbose: false,
        }
    }
}

/// Drives one or more source files through scan, coalesce and emit,
/// then hands the instruction text to the external assembler and
/// linker. Every file gets fresh translation state; a failure in one
/// file never affects another.
pub struct CompilerPipeline {
    opts: BuildOptions,
    tape: TapeConfig,
    pub diagnostics: DiagnosticBag,
}

impl CompilerPipeline {
    pub fn new(opts: BuildOptions) -> Self {
        let (tape, clamp) = TapeConfig::new(opts.tape_size);

        let mut diagnostics = DiagnosticBag::default();
        if let Some(clamp) = clamp {
            let diag = match clamp {
                TapeSizeClamp::Floor => Diagnostic::notice(
                    ErrCode::CFG3000,
                    "provided tape size is at or below the minimum; the tape will be one byte",
                ),
                TapeSizeClamp::Ceiling => Diagnostic::notice(
                    ErrCode::CFG3000,
                    "provided tape size is bigger than the maximum value (4 GiB); the maximum will be used",
                ),
            };
            diag.report("", "");
            diagnostics.push(diag);
        }

        Self { opts, tape, diagnostics }
    }

    /// Compile a single source file to its configured artifact,
    /// reporting any failure before returning it.
    pub fn compile(&mut self, src_path: &str) -> Result<(), CompileError> {
        if !SourceFile::has_source_extension(src_path) {
            let err = CompileError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{src_path}' does not have a .bf extension; ignoring this file"),
            ));
            self.report_error(src_path, "", &err);
            return Err(err);
        }

        self.logv(&format!("opening '{src_path}'"));
        let source = match SourceFile::from_file(src_path) {
            Ok(source) => source,
            Err(err) => {
                let err = CompileError::from(err);
                self.report_error(src_path, "", &err);
                return Err(err);
            }
        };

        let mut unit = CompilationUnit::from_source(source);
        let result = self
            .translate(&mut unit)
            .and_then(|asm| self.emit_outputs(&unit, &asm));

        if let Err(err) = &result {
            let content = unit.source.content.clone();
            self.report_error(src_path, content.as_str(), err);
        }
        result
    }

    /// Scan → coalesce → emit for one unit. This is the whole
    /// translation pass; it owns no state that outlives the call.
    pub fn translate(&self, unit: &mut CompilationUnit) -> Result<String, CompileError> {
        let content = unit.source.content.clone();

        let mut tokenizer = Tokenizer::new(content.as_str());
        let tokens = match tokenizer.tokenize() {
            Ok(tokens) => tokens,
            Err(err) => {
                unit.fail(TranslationStageError::TokenizationError);
                return Err(err);
            }
        };
        unit.next_stage();

        let runs = RunCoalescer::coalesce(&tokens);
        unit.tokens = Some(tokens);
        unit.next_stage();

        let mut cg = X86_64CodeGenerator::new(self.tape);
        let asm = match cg.gen_program(&runs) {
            Ok(asm) => asm,
            Err(err) => {
                unit.fail(TranslationStageError::TranslationError);
                return Err(err);
            }
        };
        unit.runs = Some(runs);
        unit.asm = Some(asm.clone());
        unit.next_stage();

        self.logv(&format!(
            "translated '{}' ({} bytes of assembly)",
            unit.source.meta.name,
            asm.len()
        ));
        Ok(asm)
    }

    /// Translate in-memory source text; used by tests and embedders.
    pub fn translate_source(&self, name: &str, content: &str) -> Result<String, CompileError> {
        let mut unit = CompilationUnit::from_source(SourceFile::from_string(name, content));
        self.translate(&mut unit)
    }

    fn emit_outputs(&self, unit: &CompilationUnit, asm: &str) -> Result<(), CompileError> {
        let out_stem: String = self
            .opts
            .out_path
            .clone()
            .unwrap_or_else(|| unit.source.output_stem().to_string());

        // temp artifacts are unlinked when the handles drop, on every
        // exit path
        let mut tmp_asm = tempfile::Builder::new()
            .prefix("bfc-")
            .suffix(".s")
            .tempfile()?;
        tmp_asm.write_all(asm.as_bytes())?;
        tmp_asm.flush()?;
        self.logv(&format!("created '{}'", tmp_asm.path().display()));

        if self.opts.gen_asm {
            let out = format!("{out_stem}.s");
            self.logv(&format!("copying assembly to '{out}'"));
            fs::copy(tmp_asm.path(), &out)?;
        }

        if self.opts.gen_object {
            let tmp_obj = self.assemble(tmp_asm.path())?;
            let out = format!("{out_stem}.o");
            self.logv(&format!("copying object to '{out}'"));
            fs::copy(tmp_obj.path(), &out)?;
        }

        if !self.opts.gen_asm && !self.opts.gen_object {
            let tmp_obj = self.assemble(tmp_asm.path())?;
            self.link(tmp_obj.path(), &out_stem)?;
        }
        Ok(())
    }

    fn assemble(&self, asm_path: &Path) -> Result<NamedTempFile, CompileError> {
        let tmp_obj = tempfile::Builder::new()
            .prefix("bfc-")
            .suffix(".o")
            .tempfile()?;
        self.run_tool(
            "as",
            &[
                &asm_path.display().to_string(),
                "-o",
                &tmp_obj.path().display().to_string(),
            ],
        )?;
        Ok(tmp_obj)
    }

    fn link(&self, obj_path: &Path, out_path: &str) -> Result<(), CompileError> {
        self.run_tool("ld", &[&obj_path.display().to_string(), "-o", out_path])
    }

    fn run_tool(&self, tool: &'static str, args: &[&str]) -> Result<(), CompileError> {
        self.logv(&format!("executing '{} {}'", tool, args.join(" ")));
        let status = Command::new(tool).args(args).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(CompileError::ToolFailure { tool, code: status.code() })
        }
    }

    fn report_error(&mut self, file_name: &str, source: &str, err: &CompileError) {
        let diag = err.to_diagnostic();
        diag.report(file_name, source);
        self.diagnostics.push(diag);
    }

    fn logv(&self, msg: &str) {
        if self.opts.verbose {
            eprintln!("bfc: {msg}");
        }
    }
}
