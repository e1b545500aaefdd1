use std::fmt;

#[derive(Debug, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source text. The header is line 1.
    pub line: usize,
    /// The comma separated fields of the line, verbatim.
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// The tag label, taken verbatim from the first column.
    pub tag: String,
    /// How many times the tag was observed.
    pub count: i128,
}

impl TagEntry {
    pub fn new(tag: impl Into<String>, count: i128) -> Self {
        Self {
            tag: tag.into(),
            count,
        }
    }
}

impl fmt::Display for TagEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tag, self.count)
    }
}
