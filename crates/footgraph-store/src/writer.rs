//! Shared gzip CSV plumbing for the node and relationship files.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use flate2::write::GzEncoder;
use flate2::Compression;

pub(crate) type GzCsvWriter = csv::Writer<GzEncoder<BufWriter<File>>>;

/// Escape character used inside quoted cells.
pub(crate) const ESCAPE: u8 = b'\\';

/// Path of the header file published next to a payload file:
/// `out/nodes.csv.gz` → `out/nodes_header.csv`.
pub fn header_path(payload: &Path) -> PathBuf {
    let name = payload
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name
        .strip_suffix(".csv.gz")
        .or_else(|| name.strip_suffix(".gz"))
        .or_else(|| name.strip_suffix(".csv"))
        .unwrap_or(&name);
    payload.with_file_name(format!("{stem}_header.csv"))
}

/// Write the single-line column header file.
pub(crate) fn write_header(path: &Path, columns: &[String]) -> io::Result<()> {
    std::fs::write(path, format!("{}\n", columns.join(",")))
}

/// Open a gzip payload writer: every cell quoted, quotes escaped with a
/// backslash rather than doubled.
pub(crate) fn open_payload(path: &Path) -> io::Result<GzCsvWriter> {
    let file = File::create(path)?;
    let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    Ok(WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .double_quote(false)
        .escape(ESCAPE)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(encoder))
}

/// Flush the CSV buffer, finish the gzip stream and flush the file.
pub(crate) fn finish(writer: GzCsvWriter) -> io::Result<()> {
    let encoder = writer.into_inner().map_err(|e| e.into_error())?;
    let mut file = encoder.finish()?;
    file.flush()
}

/// Double every backslash so string values survive the escape character.
pub(crate) fn escape_backslashes(value: &str) -> Cow<'_, str> {
    if value.contains('\\') {
        Cow::Owned(value.replace('\\', "\\\\"))
    } else {
        Cow::Borrowed(value)
    }
}
