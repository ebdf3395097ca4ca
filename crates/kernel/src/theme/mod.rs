//! Theme engine and page shell rendering.
//!
//! Provides the Tera-based page shell that wraps rendered blocks with the
//! `<head>` metadata, navigation bar and footer.

mod engine;

pub use engine::{PageView, ThemeEngine};
