use std::borrow::Cow;
use std::fmt;

use encoding_rs::{Encoding, UTF_8};

use crate::error::Error;

/// Labels of ISO-8859-1.
///
/// The WHATWG Encoding Standard maps these labels to windows-1252, which
/// assigns printable characters to the C1 range. They are resolved to
/// ISO-8859-1 proper instead.
const LATIN1_LABELS: &[&str] = &[
    "cp819",
    "csisolatin1",
    "ibm819",
    "iso-8859-1",
    "iso-ir-100",
    "iso8859-1",
    "iso88591",
    "iso_8859-1",
    "iso_8859-1:1987",
    "l1",
    "latin-1",
    "latin1",
];

/// Output character encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputEncoding {
    /// ISO-8859-1, one byte per code point up to U+00FF.
    Latin1,

    /// An encoding of the WHATWG Encoding Standard.
    Whatwg(&'static Encoding),
}

impl Default for OutputEncoding {
    fn default() -> Self {
        OutputEncoding::Whatwg(UTF_8)
    }
}

impl OutputEncoding {
    /// Look up an encoding by its label, e.g. `utf-8` or `latin-1`.
    ///
    /// Labels are matched case-insensitively, surrounding whitespace is
    /// ignored.
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim();

        if LATIN1_LABELS
            .iter()
            .any(|latin1| latin1.eq_ignore_ascii_case(label))
        {
            return Some(OutputEncoding::Latin1);
        }

        Encoding::for_label(label.as_bytes()).map(OutputEncoding::Whatwg)
    }

    /// Get the canonical name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            OutputEncoding::Latin1 => "ISO-8859-1",
            OutputEncoding::Whatwg(encoding) => encoding.name(),
        }
    }

    /// Encode `text`.
    ///
    /// Returns an error for the first character that the encoding cannot
    /// represent.
    pub fn encode(self, text: &str) -> Result<Cow<[u8]>, Error> {
        match self {
            OutputEncoding::Latin1 => {
                if text.is_ascii() {
                    return Ok(Cow::Borrowed(text.as_bytes()));
                }

                text.chars()
                    .map(|c| match c as u32 {
                        code @ 0..=0xff => Ok(code as u8),
                        _ => Err(self.unencodable(c)),
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Cow::Owned)
            }
            OutputEncoding::Whatwg(encoding) => {
                let (bytes, _, had_errors) = encoding.encode(text);
                if !had_errors {
                    return Ok(bytes);
                }

                let mut buf = [0; 4];
                let c = text
                    .chars()
                    .find(|c| encoding.encode(c.encode_utf8(&mut buf)).2)
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(self.unencodable(c))
            }
        }
    }

    fn unencodable(self, character: char) -> Error {
        Error::Unencodable {
            character,
            encoding: self.name(),
        }
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
