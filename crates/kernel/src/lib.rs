//! Vetrina Kernel Library
//!
//! Page-builder block rendering, CMS schema definitions, and the site server.
//! The main entry point for running the server is the `vetrina` binary.

pub mod cache;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod routes;
pub mod schema;
pub mod seo;
pub mod state;
pub mod theme;

pub use config::Config;
pub use content::{Block, BlockRegistry, BlockRenderer, PageDocument};
pub use error::{AppError, AppResult};
pub use state::AppState;
