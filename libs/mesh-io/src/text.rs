//! Line-oriented helpers shared by the text format readers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::IoError;

/// Reads a whole file, mapping failures to [`IoError::Read`].
pub(crate) fn read_text(path: &Path) -> Result<String, IoError> {
    std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))
}

/// Non-blank lines with `#` comments stripped, paired with 1-based numbers.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();
        (!line.is_empty()).then_some((i + 1, line))
    })
}

/// Parses one token, naming what was expected on failure.
pub(crate) fn parse_token<T: FromStr>(
    token: &str,
    path: &Path,
    line: usize,
    what: &str,
) -> Result<T, IoError> {
    token
        .parse()
        .map_err(|_| IoError::parse(path, line, format!("expected {}, found '{}'", what, token)))
}

/// Creates `path` and hands a buffered writer to `body`, flushing at the end.
pub(crate) fn write_text<F>(path: &Path, body: F) -> Result<(), IoError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| IoError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| IoError::write(path, e))
}
