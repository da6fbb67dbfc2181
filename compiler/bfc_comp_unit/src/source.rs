// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::path::Path;
use std::rc::Rc;

pub const SOURCE_EXTENSION: &str = "bf";

#[derive(Debug, Default, Clone)]
pub struct FileMeta {
    pub name: String,

    pub abs_path: String,
}

#[derive(Clone, Debug)]
pub struct SourceFile {
    pub content: Rc<String>,
    pub meta: FileMeta,
}

impl SourceFile {
    pub fn from_file(path: &str) -> std::io::Result<Self> {
        let file_path: &Path = Path::new(path);
        let content: String = std::fs::read_to_string(file_path)?;
        let name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            content: Rc::new(content),
            meta: FileMeta { abs_path: path.to_string(), name },
        })
    }

    pub fn from_string(name: &str, content: &str) -> Self {
        Self {
            content: Rc::new(content.to_string()),
            meta: FileMeta { name: name.to_string(), abs_path: format!("<{name}>") },
        }
    }

    pub fn has_source_extension(path: &str) -> bool {
        Path::new(path)
            .extension()
            .map(|ext| ext == SOURCE_EXTENSION)
            .unwrap_or(false)
    }

    /// Source file name without its `.bf` extension; the default stem
    /// of every derived output artifact.
    pub fn output_stem(&self) -> &str {
        self.meta
            .name
            .strip_suffix(".bf")
            .unwrap_or(&self.meta.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_check() {
        assert!(SourceFile::has_source_extension("hello.bf"));
        assert!(!SourceFile::has_source_extension("hello.b"));
        assert!(!SourceFile::has_source_extension("hello"));
    }

    #[test]
    fn test_output_stem_drops_extension() {
        let src = SourceFile::from_string("hello.bf", "+");
        assert_eq!(src.output_stem(), "hello");
    }

    #[test]
    fn test_output_stem_keeps_other_names() {
        let src = SourceFile::from_string("hello", "+");
        assert_eq!(src.output_stem(), "hello");
    }
}
