// src/csv.rs
use std::io::{self, Write};

use crate::config::options::Quoting;

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. Always ends with '\n'.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], quoting: Quoting) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        match quoting {
            // Spreadsheet-friendly wrapping; contents are not escaped
            Quoting::Always => write!(w, "\"{}\"", cell)?,
            Quoting::Minimal if needs_quotes(cell) => {
                let escaped = cell.replace('"', "\"\"");
                write!(w, "\"{}\"", escaped)?;
            }
            Quoting::Minimal => write!(w, "{}", cell)?,
        }
    }
    writeln!(w)
}

/// Build a whole file's contents: optional header line, then rows.
pub fn to_export_string(
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    quoting: Quoting,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, quoting);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, quoting);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
