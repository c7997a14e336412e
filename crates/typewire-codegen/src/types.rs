//! Output value types for code synthesis.
//!
//! A generation run produces a [`GeneratedCode`] bundle: one
//! [`GeneratedFile`] per emitted module, in a deterministic order, ready to
//! be written under the caller's output directory.
//!
//! # Examples
//!
//! ```
//! use typewire_codegen::{GeneratedCode, GeneratedFile};
//!
//! let file = GeneratedFile {
//!     path: "services.rs".to_string(),
//!     content: "pub struct ProductService;".to_string(),
//! };
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(file);
//!
//! assert_eq!(code.file_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Result of a generation run containing all emitted files.
///
/// Files appear in the order they were generated, which follows the order
/// of declarations in the source schema. Regenerating from an unchanged
/// schema reproduces the bundle byte for byte.
///
/// # Examples
///
/// ```
/// use typewire_codegen::GeneratedCode;
///
/// let code = GeneratedCode::new();
/// assert_eq!(code.file_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Emitted files with module-relative paths and contents
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates an empty bundle.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::GeneratedCode;
    ///
    /// let code = GeneratedCode::new();
    /// assert_eq!(code.file_count(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Appends a file to the bundle.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile {
    ///     path: "mod.rs".to_string(),
    ///     content: "mod services;".to_string(),
    /// });
    ///
    /// assert_eq!(code.file_count(), 1);
    /// ```
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of emitted files.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::GeneratedCode;
    ///
    /// let code = GeneratedCode::new();
    /// assert_eq!(code.file_count(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the emitted files.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile {
    ///     path: "raw.rs".to_string(),
    ///     content: String::new(),
    /// });
    ///
    /// for file in code.files() {
    ///     println!("emitted {}", file.path);
    /// }
    /// ```
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Looks up an emitted file by its module-relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile {
    ///     path: "client.rs".to_string(),
    ///     content: "pub struct ApiClient;".to_string(),
    /// });
    ///
    /// assert!(code.file("client.rs").is_some());
    /// assert!(code.file("missing.rs").is_none());
    /// ```
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.path == path)
    }
}

impl Default for GeneratedCode {
    fn default() -> Self {
        Self::new()
    }
}

/// A single emitted file with its module-relative path and content.
///
/// Paths are relative to the generated module root, so `mod.rs` is the
/// module entry point and `services.rs` a sibling source file.
///
/// # Examples
///
/// ```
/// use typewire_codegen::GeneratedFile;
///
/// let file = GeneratedFile {
///     path: "raw.rs".to_string(),
///     content: "use std::sync::Arc;".to_string(),
/// };
///
/// assert_eq!(file.path(), "raw.rs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path relative to the generated module root
    pub path: String,
    /// Rust source text
    pub content: String,
}

impl GeneratedFile {
    /// Returns the module-relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::GeneratedFile;
    ///
    /// let file = GeneratedFile {
    ///     path: "services.rs".to_string(),
    ///     content: String::new(),
    /// };
    ///
    /// assert_eq!(file.path(), "services.rs");
    /// ```
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::GeneratedFile;
    ///
    /// let file = GeneratedFile {
    ///     path: "mod.rs".to_string(),
    ///     content: "mod raw;".to_string(),
    /// };
    ///
    /// assert_eq!(file.content(), "mod raw;");
    /// ```
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
