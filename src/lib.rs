pub mod error;
pub mod models;
pub mod parser;
pub mod printer;
pub mod sorter;

pub use crate::error::ParseError;
pub use crate::models::TagEntry;
pub use crate::printer::render_entries;
pub use crate::sorter::{sort_by_count, sorted_by_count};

use crate::parser::{parse_rows, split_rows};

use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Parses a tag frequency table. The first line is a header and is ignored.
pub fn parse_string(s: &str) -> Result<Vec<TagEntry>, ParseError> {
    parse_rows(&split_rows(s))
}

/// Parses the tag table stored at `path`.
///
/// The file is memory-mapped and parsed in place. A zero-length file has no
/// header and therefore no entries; it is answered without mapping, since
/// mapping zero bytes fails on some platforms.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<TagEntry>, ParseError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        debug!("{} is empty", path.display());
        return Ok(Vec::new());
    }
    let mmap = unsafe { Mmap::map(&file)? };
    debug!("Mapped {} ({} bytes)", path.display(), mmap.len());
    let text = std::str::from_utf8(&mmap)?;
    parse_string(text)
}

/// Reads the tag table at `path` and returns its entries sorted by count,
/// highest first.
pub fn sort_tags_file<P: AsRef<Path>>(path: P) -> Result<Vec<TagEntry>, ParseError> {
    parse_file(path).map(sorted_by_count)
}
