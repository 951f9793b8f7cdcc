#[macro_use]
extern crate log;

pub mod config;
mod customize;
mod directories;
mod error;
mod icons;
mod styles;
mod summary;

pub use customize::{customize, Plan, Targets};
pub use directories::{clean_previous, ensure_directories, write_ignore_file, Layout};
pub use error::{ConfigError, DownloadError, Error};
pub use icons::generate_icons;
pub use styles::{generate_styles, is_hex_color};
pub use summary::Summary;

/// Log target rendered as a section header by the console logger.
pub const HEADER: &str = "branding::header";
