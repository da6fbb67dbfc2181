// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::env;
use std::process;

use bfc::compiler::{BuildOptions, CompilerPipeline};
use bfc_errors::diagnostic::Diagnostic;
use bfc_target::tape::TAPE_SIZE_DEFAULT;

fn usage(program: &str) {
    eprintln!("Usage:\n\t{program} [options] [file1.bf file2.bf ... fileN.bf]");
    eprintln!("Options:");
    eprintln!("\t-o <path>  Name of the output artifact (source file name without the .bf extension by default).");
    eprintln!("\t           Ignored when more than one source file is provided.");
    eprintln!("\t-S         Generate a .s file with the assembly translation instead of an executable.");
    eprintln!("\t-c         Generate an object file instead of an executable.");
    eprintln!("\t-s <bytes> Size of the tape in bytes (default {TAPE_SIZE_DEFAULT}). Must be above zero.");
    eprintln!("\t-v         Enable verbose output.");
    eprintln!("\t-h         Print this help.");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("bfc");

    let mut opts = BuildOptions::default();
    let mut files: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                usage(program);
                return;
            }
            "-v" => opts.verbose = true,
            "-S" => opts.gen_asm = true,
            "-c" => opts.gen_object = true,
            "-o" => {
                i += 1;
                match args.get(i) {
                    Some(path) => opts.out_path = Some(path.clone()),
                    None => {
                        eprintln!("error: flag -o requires a value");
                        process::exit(2);
                    }
                }
            }
            "-s" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<u64>().ok()) {
                    Some(size) => opts.tape_size = size,
                    None => {
                        eprintln!("error: flag -s requires a byte count");
                        process::exit(2);
                    }
                }
            }
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown flag '{flag}'");
                usage(program);
                process::exit(2);
            }
            file => files.push(file.to_string()),
        }
        i += 1;
    }

    if files.is_empty() {
        println!("Nothing to do. Try '{program} -h'");
        return;
    }

    if files.len() > 1 && opts.out_path.take().is_some() {
        Diagnostic::warning("-o is ignored when more than one source file is provided")
            .report("", "");
    }

    let mut pipeline = CompilerPipeline::new(opts);

    // files are translated independently; one failure does not stop
    // the remaining files
    let mut failed = false;
    for file in &files {
        if pipeline.compile(file).is_err() {
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}
