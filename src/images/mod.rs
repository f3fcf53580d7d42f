//! # Image Discovery
//!
//! Translates image-collection queries into lists of publicly servable
//! asset paths by observing the filesystem at request time.
//!
//! ## Modules
//!
//! - [`library`]: the [`ImageLibrary`] lookup core (named folders, project
//!   galleries, background selection) plus slug derivation

pub mod library;

// Re-export for convenience
pub use library::{project_slug, ImageLibrary, NamedFolder};
