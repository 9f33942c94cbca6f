pub mod excerpt;
pub mod keywords;

pub use excerpt::{char_window, write_numbered_excerpt};
pub use keywords::{scan_file, scan_lines, KeywordHit};
