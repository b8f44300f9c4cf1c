//! Guarded page reading
//!
//! A rewrite tool must never splice into bytes it cannot faithfully write
//! back, so reading is strict: oversized files, binary files, and invalid
//! UTF-8 are all skipped with a reason instead of being decoded lossily.

use std::fs;
use std::path::Path;

/// Default maximum file size in bytes (8 MB) - pages are hand-written TSX,
/// anything bigger is generated output we should not touch
pub const DEFAULT_MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Result of reading a page file
#[derive(Debug, Clone)]
pub struct FileReadResult {
    /// The file content (if successfully read)
    pub content: Option<String>,

    /// Whether the file was skipped
    pub skipped: bool,

    /// Reason for skipping (if skipped)
    pub skip_reason: Option<String>,

    /// Warning code (if skipped)
    pub code: Option<WarningCode>,
}

impl FileReadResult {
    /// Create a successful read result
    pub fn success(content: String) -> Self {
        Self {
            content: Some(content),
            skipped: false,
            skip_reason: None,
            code: None,
        }
    }

    /// Create a skipped result
    pub fn skipped(code: WarningCode, reason: impl Into<String>) -> Self {
        Self {
            content: None,
            skipped: true,
            skip_reason: Some(reason.into()),
            code: Some(code),
        }
    }
}

/// Warning codes for file reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    /// File metadata could not be read
    Unreadable,
    /// File was skipped due to size
    FileSkippedSize,
    /// File appears to be binary
    BinaryFile,
    /// File contains invalid UTF-8
    InvalidUtf8,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::Unreadable => "UNREADABLE",
            WarningCode::FileSkippedSize => "FILE_SKIPPED_SIZE",
            WarningCode::BinaryFile => "BINARY_FILE",
            WarningCode::InvalidUtf8 => "INVALID_UTF8",
        }
    }
}

/// Read a page file with the given size limit
pub fn read_page_with_limit(path: &Path, max_file_size: u64) -> FileReadResult {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            return FileReadResult::skipped(
                WarningCode::Unreadable,
                format!("cannot read metadata: {}", e),
            );
        }
    };

    let file_size = metadata.len();
    if file_size > max_file_size {
        return FileReadResult::skipped(
            WarningCode::FileSkippedSize,
            format!("file size {} exceeds limit {}", file_size, max_file_size),
        );
    }

    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            return FileReadResult::skipped(
                WarningCode::Unreadable,
                format!("cannot read file: {}", e),
            );
        }
    };

    // Binary check: null bytes in the first 8KB
    let check_len = std::cmp::min(8192, bytes.len());
    if bytes[..check_len].contains(&0) {
        return FileReadResult::skipped(
            WarningCode::BinaryFile,
            "file appears to be binary (contains null bytes)",
        );
    }

    match String::from_utf8(bytes) {
        Ok(content) => FileReadResult::success(content),
        Err(_) => FileReadResult::skipped(
            WarningCode::InvalidUtf8,
            "file contains invalid UTF-8 sequences",
        ),
    }
}

/// Convenience function with the default size limit
pub fn read_page(path: &Path) -> FileReadResult {
    read_page_with_limit(path, DEFAULT_MAX_FILE_SIZE)
}
