//! Interactive session plumbing - transcript recording and line I/O.
//!
//! The original tool kept a process-wide log buffer; here the transcript
//! is an explicit object owned by the [`Session`], which wraps the input
//! and output streams so every prompt and response flows through one
//! place. The session is generic over `BufRead`/`Write`, so tests drive
//! the full loop with in-memory buffers.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Append-only record of every prompt and response in a session.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    fn record(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the transcript verbatim, one entry per line, creating or
    /// overwriting the file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut file = File::create(path)?;
        for entry in &self.entries {
            writeln!(file, "{entry}")?;
        }
        Ok(())
    }
}

/// Line-oriented console owned by the interactive session.
///
/// Everything printed with [`Session::say`] and every line read with
/// [`Session::read_line`] lands in the transcript. Decorative output goes
/// through [`Session::notice`] and stays out of it.
#[derive(Debug)]
pub struct Session<R, W> {
    reader: R,
    writer: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            transcript: Transcript::default(),
        }
    }

    /// Print a line and record it.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        self.transcript.record(line.to_string());
        Ok(())
    }

    /// Print a line without recording it.
    pub fn notice(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }

    /// Read one line, trimmed of surrounding whitespace.
    ///
    /// Responses are recorded with a `"> "` marker so they are
    /// distinguishable from prompts in a saved log. End of input is an
    /// `UnexpectedEof` error; the caller unwinds on it rather than
    /// retrying.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        let line = buf.trim().to_string();
        self.transcript.record(format!("> {line}"));
        Ok(line)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_say_prints_and_records() {
        let mut s = session("");
        s.say("The card:").unwrap();
        assert_eq!(s.transcript().entries(), ["The card:"]);
    }

    #[test]
    fn test_read_line_trims_and_records_with_marker() {
        let mut s = session("  France  \n");
        let line = s.read_line().unwrap();
        assert_eq!(line, "France");
        assert_eq!(s.transcript().entries(), ["> France"]);
    }

    #[test]
    fn test_read_line_eof() {
        let mut s = session("");
        let err = s.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn test_notice_is_not_recorded() {
        let mut s = session("");
        s.notice("Unknown action").unwrap();
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn test_transcript_preserves_order() {
        let mut s = session("add\n");
        s.say("Input the action:").unwrap();
        s.read_line().unwrap();
        s.say("The card:").unwrap();
        assert_eq!(
            s.transcript().entries(),
            ["Input the action:", "> add", "The card:"]
        );
    }

    #[test]
    fn test_transcript_save_one_entry_per_line() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.log");

        let mut s = session("answer\n");
        s.say("prompt").unwrap();
        s.read_line().unwrap();
        s.transcript().save(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "prompt\n> answer\n");
    }
}
