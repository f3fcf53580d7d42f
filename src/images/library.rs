//! # Image Library
//!
//! Read-only lookups over the static asset tree. Every query is an
//! independent snapshot read of one directory under `<public_root>/images`:
//! no cache, no write path, no state beyond the filesystem itself.
//!
//! ## Lookup Pipeline
//!
//! All listing queries share one pipeline:
//! 1. Enumerate the directory
//! 2. Keep regular files whose extension is allow-listed
//! 3. Sort lexicographically (byte order, case-sensitive)
//! 4. Map filenames to public `/images/...` URL paths
//!
//! A missing or unreadable directory degrades to an empty result. The
//! consuming pages carry hardcoded fallback lists, so an empty answer is
//! always safe to return; only the operator needs to hear about the
//! failure, via the log.

use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions served as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// The two fixed top-level image categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedFolder {
    Professional,
    Personal,
}

impl NamedFolder {
    /// Parse the `folder` query parameter. Anything outside the fixed set
    /// is `None` and ends up reported as a caller error.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "professional" => Some(Self::Professional),
            "personal" => Some(Self::Personal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Personal => "personal",
        }
    }
}

/// Lookup core for the image discovery API.
///
/// Holds the public asset root and answers collection, project, and
/// background queries against the `images/` tree beneath it.
///
/// # Example
/// ```ignore
/// let library = ImageLibrary::new("public");
/// let slides = library.collection(NamedFolder::Professional);
/// let shots = library.project_gallery("terminal_site");
/// let backdrop = library.background();
/// ```
#[derive(Debug, Clone)]
pub struct ImageLibrary {
    /// Static-assets root; all enumerated directories live beneath it
    public_root: PathBuf,
}

impl ImageLibrary {
    pub fn new(public_root: impl Into<PathBuf>) -> Self {
        Self {
            public_root: public_root.into(),
        }
    }

    /// List a named folder (`professional` or `personal`).
    ///
    /// # Returns
    /// Sorted public paths of every allow-listed image in
    /// `images/<folder>`, or an empty list if the directory is missing or
    /// unreadable.
    pub fn collection(&self, folder: NamedFolder) -> Vec<String> {
        let dir = self.public_root.join("images").join(folder.as_str());
        self.scan_sorted(&dir)
            .into_iter()
            .map(|file| format!("/images/{}/{}", folder.as_str(), file))
            .collect()
    }

    /// List the screenshot gallery of one project.
    ///
    /// The slug names a subdirectory of `images/projects`. It is validated
    /// against the slug alphabet before any filesystem access, so a
    /// traversal attempt (`../...`, separators, anything a display name
    /// would not normalize to) behaves exactly like a project that does
    /// not exist: an empty list.
    pub fn project_gallery(&self, slug: &str) -> Vec<String> {
        if !is_valid_slug(slug) {
            warn!("Rejected project slug {:?}", slug);
            return Vec::new();
        }
        let dir = self.public_root.join("images").join("projects").join(slug);
        self.scan_sorted(&dir)
            .into_iter()
            .map(|file| format!("/images/projects/{}/{}", slug, file))
            .collect()
    }

    /// Pick the single background image, if any.
    ///
    /// Returns the lexicographically first allow-listed file in
    /// `images/backgrounds`, so the pick is deterministic even when more
    /// than one background is deployed. `None` when the directory is
    /// missing, unreadable, or holds no allow-listed file.
    pub fn background(&self) -> Option<String> {
        let dir = self.public_root.join("images").join("backgrounds");
        self.scan_sorted(&dir)
            .into_iter()
            .next()
            .map(|file| format!("/images/backgrounds/{}", file))
    }

    /// Shared enumerate/filter/sort step. Non-file entries and non-UTF-8
    /// names are skipped; they cannot appear in the JSON contract.
    fn scan_sorted(&self, dir: &Path) -> Vec<String> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Could not read image directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| has_image_extension(name))
            .collect();
        names.sort();
        names
    }
}

/// True when the name's final extension is on the image allow-list.
pub fn has_image_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Slug alphabet check: non-empty, `[a-z0-9_-]` only. This is the output
/// alphabet of [`project_slug`], so every slug a caller can legitimately
/// derive passes, and nothing that could leave the projects directory does.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

/// Derive a project's gallery directory name from its display name:
/// lowercase, runs of non-alphanumerics collapse to a single `_`, and
/// leading/trailing separators are dropped.
///
/// ```ignore
/// assert_eq!(project_slug("My Cool App!"), "my_cool_app");
/// ```
pub fn project_slug(display_name: &str) -> String {
    let mut slug = String::with_capacity(display_name.len());
    let mut pending_sep = false;
    for ch in display_name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(ch);
        } else {
            pending_sep = true;
        }
    }
    slug
}
