//! Lua table emitter.
//!
//! Serializes a ranked trigram list as a Lua table literal that a language
//! identifier can `require` directly:
//!
//! ```text
//! return {
//!     "_th",
//!     "the",
//!     "he_",
//! }
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use memchr::memchr2;
use tracing::debug;
use trigram_types::Trigram;

use crate::error::WriteError;

/// First line of every table.
pub const TABLE_OPEN: &str = "return {";

/// Last line of every table.
pub const TABLE_CLOSE: &str = "}";

const INDENT: &str = "    ";

/// Where a rendered table goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output, followed by a line terminator.
    Stdout,
    /// A file, created or truncated, written without a trailing newline.
    File(PathBuf),
}

impl Destination {
    /// Maps an optional output path to a destination, defaulting to stdout.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Destination::File(path),
            None => Destination::Stdout,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "standard output"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Appends `s` to `out`, escaping characters that would end a double-quoted
/// Lua string early.
#[inline]
pub fn escape_lua_string(s: &str, out: &mut String) {
    if memchr2(b'"', b'\\', s.as_bytes()).is_none() {
        out.push_str(s);
        return;
    }

    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Renders the table text. No trailing newline.
pub fn render_table(trigrams: &[Trigram]) -> String {
    // open + close + per entry: indent, quotes, comma, newline, up to 12 bytes of text
    let mut out =
        String::with_capacity(TABLE_OPEN.len() + TABLE_CLOSE.len() + 1 + trigrams.len() * 20);
    let mut text = String::with_capacity(12);

    out.push_str(TABLE_OPEN);
    for trigram in trigrams {
        text.clear();
        trigram.push_to(&mut text);

        out.push('\n');
        out.push_str(INDENT);
        out.push('"');
        escape_lua_string(&text, &mut out);
        out.push_str("\",");
    }
    out.push('\n');
    out.push_str(TABLE_CLOSE);

    out
}

/// Writes the rendered table to `writer` and flushes it.
pub fn write_table<W: Write>(trigrams: &[Trigram], mut writer: W) -> io::Result<()> {
    writer.write_all(render_table(trigrams).as_bytes())?;
    writer.flush()
}

/// Writes the rendered table plus a line terminator to `writer` and flushes it.
///
/// This is the terminal form of the table.
pub fn write_table_line<W: Write>(trigrams: &[Trigram], mut writer: W) -> io::Result<()> {
    writer.write_all(render_table(trigrams).as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Delivers the table to `destination`.
///
/// # Errors
///
/// Returns `WriteError::Io` if the destination cannot be created or written.
pub fn emit(trigrams: &[Trigram], destination: &Destination) -> Result<(), WriteError> {
    let result = match destination {
        Destination::Stdout => write_table_line(trigrams, io::stdout().lock()),
        Destination::File(path) => {
            File::create(path).and_then(|file| write_table(trigrams, BufWriter::new(file)))
        }
    };

    result.map_err(|source| WriteError::Io {
        destination: destination.clone(),
        source,
    })?;

    debug!(%destination, trigrams = trigrams.len(), "Wrote trigram table");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tri(s: &str) -> Trigram {
        s.parse().expect("three characters")
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("trigram-emit-{}-{}", std::process::id(), name))
    }

    #[test]
    fn renders_entries_in_order() {
        let table = render_table(&[tri("_th"), tri("the"), tri("he_")]);
        assert_eq!(
            table,
            "return {\n    \"_th\",\n    \"the\",\n    \"he_\",\n}"
        );
    }

    #[test]
    fn renders_empty_table() {
        assert_eq!(render_table(&[]), "return {\n}");
    }

    #[test]
    fn renders_multibyte() {
        let table = render_table(&[tri("жир")]);
        assert_eq!(table, "return {\n    \"жир\",\n}");
    }

    #[test]
    fn escapes_delimiter_and_backslash() {
        let mut out = String::new();
        escape_lua_string("a\"b", &mut out);
        assert_eq!(out, "a\\\"b");

        out.clear();
        escape_lua_string("\\_x", &mut out);
        assert_eq!(out, "\\\\_x");

        let table = render_table(&[tri("\"a\"")]);
        assert_eq!(table, "return {\n    \"\\\"a\\\"\",\n}");
    }

    #[test]
    fn plain_text_is_untouched() {
        let mut out = String::from(">");
        escape_lua_string("it's _ok_", &mut out);
        assert_eq!(out, ">it's _ok_");
    }

    #[test]
    fn write_table_to_buffer() {
        let mut buf = Vec::new();
        write_table(&[tri("cat")], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "return {\n    \"cat\",\n}");
    }

    #[test]
    fn stdout_form_ends_with_newline() {
        let mut buf = Vec::new();
        write_table_line(&[tri("cat")], &mut buf).unwrap();
        assert_eq!(buf, b"return {\n    \"cat\",\n}\n");

        buf.clear();
        write_table_line(&[], &mut buf).unwrap();
        assert_eq!(buf, b"return {\n}\n");
    }

    #[test]
    fn stdout_and_file_forms_differ_only_by_newline() {
        let trigrams = [tri("_ab"), tri("ab_")];
        let mut file_form = Vec::new();
        let mut stdout_form = Vec::new();
        write_table(&trigrams, &mut file_form).unwrap();
        write_table_line(&trigrams, &mut stdout_form).unwrap();

        file_form.push(b'\n');
        assert_eq!(stdout_form, file_form);
    }

    #[test]
    fn emit_to_file_overwrites() {
        let path = temp_path("table.lua");
        fs::write(&path, "stale contents that are much longer than the table").unwrap();

        emit(&[tri("_ab"), tri("ab_")], &Destination::File(path.clone())).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "return {\n    \"_ab\",\n    \"ab_\",\n}");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn emit_to_missing_directory_fails() {
        let path = temp_path("no-such-dir").join("table.lua");
        let destination = Destination::File(path);

        match emit(&[tri("abc")], &destination) {
            Err(WriteError::Io {
                destination: d,
                source,
            }) => {
                assert_eq!(d, destination);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            Ok(()) => panic!("expected write to fail"),
        }
    }

    #[test]
    fn destination_from_path() {
        assert_eq!(Destination::from_path(None), Destination::Stdout);
        assert_eq!(
            Destination::from_path(Some(PathBuf::from("eo.lua"))),
            Destination::File(PathBuf::from("eo.lua"))
        );
        assert_eq!(Destination::Stdout.to_string(), "standard output");
    }
}
