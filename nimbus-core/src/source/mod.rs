//! Input acquisition: readers, files, and remote documents.
//!
//! Every loader here reduces its source to a list of text lines and hands
//! them to [`FrequencyAnalyzer::load`], so the pipeline semantics are
//! identical no matter where the bytes came from. Byte sources are decoded
//! with the analyzer's configured [`TextEncoding`]; remote documents that
//! announce an HTML content type are reduced to their visible text first.

pub mod html;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;
use nimbus_types::encoding::DecodeError;
use nimbus_types::WordFrequency;
use thiserror::Error;

use crate::frequency::FrequencyAnalyzer;

/// Error produced while acquiring text from an external source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading from a file or stream failed.
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
    /// Raw bytes could not be decoded with the configured encoding.
    #[error("failed to decode source: {0}")]
    Decode(#[from] DecodeError),
    /// The remote server could not be reached or answered with an error.
    #[error("failed to fetch document: {0}")]
    Fetch(#[source] reqwest::Error),
    /// The remote fetch exceeded the configured timeout.
    #[error("timed out fetching document: {0}")]
    Timeout(#[source] reqwest::Error),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LoadError::Timeout(err)
        } else {
            LoadError::Fetch(err)
        }
    }
}

impl FrequencyAnalyzer {
    /// Reads the full stream, decodes it with the configured encoding, and
    /// analyzes it line by line.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the read fails, or
    /// [`LoadError::Decode`] if the bytes are invalid for the configured
    /// encoding.
    pub fn load_reader<R: Read>(&mut self, mut reader: R) -> Result<Vec<WordFrequency>, LoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.load_bytes(&bytes)
    }

    /// Reads a file from disk and analyzes its contents.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be opened or read, or
    /// [`LoadError::Decode`] if its bytes are invalid for the configured
    /// encoding.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<WordFrequency>, LoadError> {
        let path = path.as_ref();
        debug!("loading file {}", path.display());
        self.load_reader(File::open(path)?)
    }

    /// Fetches a remote document and analyzes its text.
    ///
    /// The request honors the configured URL load timeout. Documents served
    /// with an HTML content type are reduced to their visible text before
    /// analysis.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Timeout`] if the fetch exceeds the configured
    /// timeout, [`LoadError::Fetch`] for any other transport or HTTP
    /// failure, or [`LoadError::Decode`] if the body is invalid for the
    /// configured encoding.
    pub fn load_url(&mut self, url: &str) -> Result<Vec<WordFrequency>, LoadError> {
        debug!("fetching {url}");
        let client = reqwest::blocking::Client::builder()
            .timeout(self.config().url_load_timeout)
            .build()?;
        let response = client.get(url).send()?.error_for_status()?;

        let is_html = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("text/html"));

        let body = response.bytes()?;
        let text = self.config().encoding.decode(&body)?;
        let text = if is_html { html::extract_text(&text) } else { text };
        Ok(self.load(&text.lines().collect::<Vec<_>>()))
    }

    fn load_bytes(&mut self, bytes: &[u8]) -> Result<Vec<WordFrequency>, LoadError> {
        let text = self.config().encoding.decode(bytes)?;
        Ok(self.load(&text.lines().collect::<Vec<_>>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use nimbus_types::encoding::TextEncoding;

    #[test]
    fn load_reader_counts_words() {
        let mut analyzer = FrequencyAnalyzer::new();
        let result = analyzer
            .load_reader("cat dog\ncat bird\n".as_bytes())
            .unwrap();

        assert_eq!(result[0], WordFrequency::new("cat", 2));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn load_reader_rejects_invalid_utf8() {
        let mut analyzer = FrequencyAnalyzer::new();
        let err = analyzer.load_reader(&[b'h', b'i', 0xFF][..]).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn load_reader_latin1_decodes_any_bytes() {
        let mut analyzer = FrequencyAnalyzer::new();
        analyzer.set_character_encoding(TextEncoding::Latin1);

        // "café café" in ISO-8859-1
        let bytes = b"caf\xE9 caf\xE9";
        let result = analyzer.load_reader(&bytes[..]).unwrap();
        assert_eq!(result, vec![WordFrequency::new("café", 2)]);
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha beta alpha").unwrap();
        writeln!(file, "beta alpha gamma").unwrap();

        let mut analyzer = FrequencyAnalyzer::new();
        let result = analyzer.load_file(file.path()).unwrap();

        assert_eq!(result[0], WordFrequency::new("alpha", 3));
        assert_eq!(result[1], WordFrequency::new("beta", 2));
        assert_eq!(result[2], WordFrequency::new("gamma", 1));
    }

    #[test]
    fn load_file_missing_is_io_error() {
        let mut analyzer = FrequencyAnalyzer::new();
        let err = analyzer
            .load_file("/nonexistent/corpus.txt")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn load_file_updates_metrics() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "one two three").unwrap();

        let mut analyzer = FrequencyAnalyzer::new();
        analyzer.load_file(file.path()).unwrap();
        assert_eq!(analyzer.metrics().runs_executed, 1);
        assert_eq!(analyzer.metrics().words_counted, 3);
    }

    #[test]
    fn load_error_messages_name_the_stage() {
        let io_err: LoadError = io::Error::other("boom").into();
        assert!(io_err.to_string().contains("read source"));

        let decode_err: LoadError = DecodeError::InvalidUtf8 { valid_up_to: 4 }.into();
        assert!(decode_err.to_string().contains("decode source"));
    }
}
