use std::borrow::Cow;
use std::fmt;

use depgraph::graph::{DepGraph, Node, Sentence};
use depgraph::token::{Token, EMPTY_TOKEN};
use itertools::Itertools;

/// Options for rendering sentences as tables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableOptions {
    word_count: bool,
    lemma: bool,
    projective: bool,
    blanks: bool,
    terminator: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            word_count: true,
            lemma: true,
            projective: true,
            blanks: false,
            terminator: String::new(),
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        TableOptions::default()
    }

    /// Emit the token position column.
    pub fn word_count(mut self, word_count: bool) -> Self {
        self.word_count = word_count;
        self
    }

    /// Emit the lemma column.
    pub fn lemma(mut self, lemma: bool) -> Self {
        self.lemma = lemma;
        self
    }

    /// Emit the two (empty) projective head and relation columns.
    pub fn projective(mut self, projective: bool) -> Self {
        self.projective = projective;
        self
    }

    /// Pad columns with spaces rather than separating them with tabs.
    pub fn blanks(mut self, blanks: bool) -> Self {
        self.blanks = blanks;
        self
    }

    /// String that is written after the last row of a sentence.
    pub fn terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    pub fn get_word_count(&self) -> bool {
        self.word_count
    }

    pub fn get_lemma(&self) -> bool {
        self.lemma
    }

    pub fn get_projective(&self) -> bool {
        self.projective
    }

    pub fn get_blanks(&self) -> bool {
        self.blanks
    }

    pub fn get_terminator(&self) -> &str {
        &self.terminator
    }
}

/// Tabular rendering of a sentence.
///
/// Every token is rendered as a row with the position, form, lemma,
/// part-of-speech tag, head, and head relation of the token. Absent
/// fields are rendered as `_`. The rows are wrapped in a `sentence`
/// element.
pub struct TabSentence<'a> {
    sentence: &'a Sentence,
    options: &'a TableOptions,
}

impl<'a> TabSentence<'a> {
    pub fn new(sentence: &'a Sentence, options: &'a TableOptions) -> Self {
        TabSentence { sentence, options }
    }
}

impl<'a> fmt::Display for TabSentence<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        writeln!(fmt, "<sentence>")?;

        let graph = self.sentence.dep_graph();
        for i in 1..self.sentence.len() {
            let token = match self.sentence[i] {
                Node::Token(ref token) => token,
                Node::Root => unreachable!(),
            };

            let row = Row::new(&graph, i, token);
            if self.options.blanks {
                row.write_padded(fmt, self.options)?;
            } else {
                row.write_tabbed(fmt, self.options)?;
            }
        }

        write!(fmt, "{}", self.options.terminator)?;
        writeln!(fmt, "</sentence>")
    }
}

struct Row<'a> {
    position: usize,
    form: &'a str,
    lemma: Cow<'a, str>,
    pos: &'a str,
    head: Cow<'a, str>,
    relation: Cow<'a, str>,
}

impl<'a> Row<'a> {
    fn new(graph: &DepGraph<'a>, position: usize, token: &'a Token) -> Self {
        let triple = graph.head(position);

        Row {
            position,
            form: token.form(),
            lemma: token
                .lemma()
                .map(|lemma| Cow::Owned(lemma.split_whitespace().join("_")))
                .unwrap_or(Cow::Borrowed(EMPTY_TOKEN)),
            pos: token.pos().unwrap_or(EMPTY_TOKEN),
            head: triple
                .as_ref()
                .map(|triple| Cow::Owned(triple.head().to_string()))
                .unwrap_or(Cow::Borrowed(EMPTY_TOKEN)),
            relation: triple
                .and_then(|triple| triple.relation().map(ToOwned::to_owned))
                .map(Cow::Owned)
                .unwrap_or(Cow::Borrowed(EMPTY_TOKEN)),
        }
    }

    fn write_tabbed(&self, fmt: &mut fmt::Formatter, options: &TableOptions) -> fmt::Result {
        let mut fields = Vec::with_capacity(8);

        let position = self.position.to_string();
        if options.word_count {
            fields.push(position.as_str());
        }
        fields.push(self.form);
        if options.lemma {
            fields.push(&*self.lemma);
        }
        fields.push(self.pos);
        fields.push(&*self.head);
        fields.push(&*self.relation);
        if options.projective {
            fields.push(EMPTY_TOKEN);
            fields.push(EMPTY_TOKEN);
        }

        writeln!(fmt, "{}", fields.iter().join("\t"))
    }

    fn write_padded(&self, fmt: &mut fmt::Formatter, options: &TableOptions) -> fmt::Result {
        if options.word_count {
            write!(fmt, "{:<4}", self.position)?;
        }
        write!(fmt, "{:<20}  ", self.form)?;
        if options.lemma {
            write!(fmt, "{:<20}  ", self.lemma)?;
        }
        write!(fmt, "{:<10}  ", self.pos)?;
        write!(fmt, "{:<4}{:<10}  ", self.head, self.relation)?;
        if options.projective {
            write!(fmt, "  _  _")?;
        }
        writeln!(fmt)
    }
}
