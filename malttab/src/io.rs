//! MALT-Tab writers.

use std::io;

use depgraph::graph::Sentence;
use crate::display::{TabSentence, TableOptions};
use crate::encoding::OutputEncoding;
use crate::error::Error;

/// A trait for objects that can write `Sentence`s.
pub trait WriteSentence {
    /// Write a sentence into this object.
    ///
    /// # Errors
    ///
    /// A call to `write_sentence` may generate an error to indicate that
    /// the operation could not be completed.
    fn write_sentence(&mut self, sentence: &Sentence) -> Result<(), Error>;
}

/// A writer for MALT-Tab sentences.
///
/// This writer will write sentences to the embedded writer in tabular
/// format, encoded in the output encoding (UTF-8 by default). A sentence
/// with a character that the output encoding cannot represent is not
/// written.
pub struct Writer<W> {
    write: W,
    options: TableOptions,
    encoding: OutputEncoding,
}

impl<W: io::Write> Writer<W> {
    /// Construct a new writer from an object that implements the `io::Write`
    /// trait.
    pub fn new(write: W) -> Writer<W> {
        Writer::with_options(write, TableOptions::default())
    }

    /// Construct a new writer that renders tables with the given options.
    pub fn with_options(write: W, options: TableOptions) -> Writer<W> {
        Writer {
            write,
            options,
            encoding: OutputEncoding::default(),
        }
    }

    /// Set the output encoding by its label, e.g. `utf-8` or `latin-1`.
    ///
    /// Returns an error when the label does not name a known encoding.
    pub fn encoding(mut self, label: &str) -> Result<Writer<W>, Error> {
        self.encoding = OutputEncoding::for_label(label).ok_or_else(|| {
            Error::UnknownEncoding {
                label: label.to_owned(),
            }
        })?;

        Ok(self)
    }

    /// Get the output encoding.
    pub fn get_encoding(&self) -> OutputEncoding {
        self.encoding
    }

    /// Get the table options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Borrow the embedded writer. Getting the underlying writer is often
    /// useful when the writer writes to a memory object.
    pub fn get_ref(&self) -> &W {
        &self.write
    }

    /// Flush the embedded writer.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.write.flush()?;
        Ok(())
    }

    /// Unwrap the embedded writer.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W: io::Write> WriteSentence for Writer<W> {
    fn write_sentence(&mut self, sentence: &Sentence) -> Result<(), Error> {
        let table = TabSentence::new(sentence, &self.options).to_string();
        let bytes = self.encoding.encode(&table)?;
        self.write.write_all(&bytes)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str;

    use depgraph::graph::{DepTriple, Sentence};
    use depgraph::token::TokenBuilder;

    use super::{WriteSentence, Writer};
    use crate::display::TableOptions;
    use crate::encoding::OutputEncoding;
    use crate::error::Error;
    use crate::tests::TEST_SENTENCES;

    fn write_all(writer: &mut Writer<Vec<u8>>, sentences: &[Sentence]) {
        for sentence in sentences {
            writer.write_sentence(sentence).unwrap();
        }
    }

    #[test]
    fn writes_sentences_consecutively() {
        let mut writer = Writer::new(Vec::new());
        write_all(&mut writer, &*TEST_SENTENCES);

        let output = str::from_utf8(writer.get_ref()).unwrap();
        assert_eq!(output.matches("<sentence>\n").count(), 2);
        assert_eq!(output.matches("</sentence>\n").count(), 2);
        assert!(output.contains("</sentence>\n<sentence>\n"));
        assert!(output.contains("5\tSão\t_\t_\t4\tapp\t_\t_\n"));
    }

    #[test]
    fn uses_table_options() {
        let options = TableOptions::default().terminator("\n");
        let mut writer = Writer::with_options(Vec::new(), options);
        write_all(&mut writer, &TEST_SENTENCES[..1]);

        let output = writer.into_inner();
        assert!(output.ends_with(b"_\n\n</sentence>\n"));
    }

    #[test]
    fn encodes_latin1() {
        let mut writer = Writer::new(Vec::new()).encoding("latin-1").unwrap();
        assert_eq!(writer.get_encoding(), OutputEncoding::Latin1);
        write_all(&mut writer, &TEST_SENTENCES[1..]);

        let output = writer.get_ref();
        assert!(str::from_utf8(output).is_err());
        assert!(output
            .windows(5)
            .any(|window| window == &b"S\xe3o\t_"[..]));
    }

    #[test]
    fn skips_sentence_with_unencodable_character() {
        let mut sentence = Sentence::new();
        sentence.push(TokenBuilder::new("€5").into());
        sentence.push(TokenBuilder::new("\u{100}").into());
        sentence
            .dep_graph_mut()
            .add_deprel(DepTriple::new(0, Some("ROOT"), 1))
            .unwrap();

        let mut writer = Writer::new(Vec::new()).encoding("iso-8859-1").unwrap();
        assert!(matches!(
            writer.write_sentence(&sentence),
            Err(Error::Unencodable { character: '€', .. })
        ));
        assert!(writer.get_ref().is_empty());

        write_all(&mut writer, &TEST_SENTENCES[..1]);
        assert!(writer.get_ref().starts_with(b"<sentence>\n1\tJan"));
    }

    #[test]
    fn defaults_to_utf8() {
        let writer = Writer::new(Vec::new());
        assert_eq!(writer.get_encoding().name(), "UTF-8");
    }

    #[test]
    #[should_panic(expected = "UnknownEncoding")]
    fn rejects_unknown_encoding() {
        Writer::new(Vec::new()).encoding("klingon").unwrap();
    }

    #[test]
    fn unknown_encoding_keeps_label() {
        match Writer::new(Vec::new()).encoding("klingon") {
            Err(Error::UnknownEncoding { label }) => assert_eq!(label, "klingon"),
            _ => panic!("expected an unknown encoding error"),
        }
    }
}
