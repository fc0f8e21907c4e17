//! In-memory zip archive assembly for bundle exports.

use anyhow::{bail, Context, Result};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Builds a deflate-compressed zip archive in memory.
///
/// Entry names must be relative: names containing `..` or starting with a
/// slash or backslash are rejected before anything is written.
pub struct ArchiveBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    entries: usize,
}

impl ArchiveBuilder {
    /// Starts an empty archive.
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated)
                .unix_permissions(0o644),
            entries: 0,
        }
    }

    /// Adds one file entry.
    pub fn add_file(&mut self, name: &str, content: &[u8]) -> Result<()> {
        if name.is_empty()
            || name.contains("..")
            || name.starts_with('/')
            || name.starts_with('\\')
        {
            bail!("Invalid filename in archive: {name}");
        }

        self.zip
            .start_file(name, self.options)
            .with_context(|| format!("Failed to start archive entry {name}"))?;
        self.zip
            .write_all(content)
            .with_context(|| format!("Failed to write archive entry {name}"))?;
        self.entries += 1;

        Ok(())
    }

    /// Adds `content` under `dir/name`, or `name` alone when `dir` is empty.
    pub fn add_in(&mut self, dir: &str, name: &str, content: &str) -> Result<()> {
        if dir.is_empty() {
            self.add_file(name, content.as_bytes())
        } else {
            self.add_file(&format!("{dir}/{name}"), content.as_bytes())
        }
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Finalizes the archive and returns its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish().context("Failed to finalize archive")?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_archive_contents() {
        let mut builder = ArchiveBuilder::new();
        builder.add_file("README.md", b"# Hello").unwrap();
        builder.add_in("styles", "reset.css", "* {}").unwrap();
        assert_eq!(builder.len(), 2);

        let bytes = builder.finish().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("styles/reset.css")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "* {}");
    }

    #[test]
    fn test_rejects_unsafe_names() {
        let mut builder = ArchiveBuilder::new();
        for name in ["../evil.txt", "/etc/passwd", "\\windows", "a/../b", ""] {
            assert!(builder.add_file(name, b"x").is_err(), "accepted {name:?}");
        }
        assert!(builder.is_empty());
    }
}
