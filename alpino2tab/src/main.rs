//! Convert dependency trees in Alpino XML format to tabular format.

use std::fs;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use alpino::{ConvertOptions, Converter};
use clap::Parser;
use log::{debug, error, LevelFilter};
use malttab::io::{WriteSentence, Writer};
use malttab::TableOptions;

#[derive(Parser)]
#[command(name = "alpino2tab", version)]
#[command(about = "Convert dependency trees in Alpino XML format to tabular format")]
struct Args {
    /// Also warn about head fallbacks in multi-word units and conjunctions
    #[arg(short, long)]
    all_warnings: bool,

    /// Pad columns with blanks instead of separating them with tabs
    #[arg(short, long)]
    blanks: bool,

    /// Keep the parts of multi-word units as separate tokens
    #[arg(short = 'c', long)]
    no_concat_mwu: bool,

    /// Output character encoding
    #[arg(short, long, value_name = "LABEL", default_value = "utf-8")]
    encoding: String,

    /// Attach the daughters of discourse units to the root
    #[arg(short = 'l', long)]
    no_link_du: bool,

    /// Mark multi-word units as [_@mwu_..._] instead of joining with underscores
    #[arg(short, long)]
    mark_mwu_alpino: bool,

    /// Omit the dummy projective head and relation columns
    #[arg(short = 'p', long)]
    no_projective: bool,

    /// Omit the lemma (root) column
    #[arg(short = 'r', long)]
    no_lemma: bool,

    /// String written at the end of every table, `\n` is a newline
    #[arg(short, long, value_name = "STRING", default_value = "")]
    terminator: String,

    /// Omit the word count column
    #[arg(short = 'w', long)]
    no_word_count: bool,

    /// Write the tables to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log every conversion step
    #[arg(short, long)]
    verbose: bool,

    /// Trees in Alpino XML format, `-` reads a tree from standard input
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,
}

impl Args {
    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .concat_mwu(!self.no_concat_mwu)
            .link_du(!self.no_link_du)
            .mark_mwu_alpino(self.mark_mwu_alpino)
            .all_warnings(self.all_warnings)
    }

    fn table_options(&self) -> TableOptions {
        TableOptions::new()
            .word_count(!self.no_word_count)
            .lemma(!self.no_lemma)
            .projective(!self.no_projective)
            .blanks(self.blanks)
            .terminator(self.terminator.replace("\\n", "\n"))
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(true) => (),
        Ok(false) => {
            error!("none of the inputs could be converted");
            process::exit(1);
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

/// Convert all inputs, returns `false` when no input was converted.
fn run(args: &Args) -> Result<bool, malttab::Error> {
    let converter = Converter::new(args.convert_options());

    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    let mut writer = Writer::with_options(output, args.table_options()).encoding(&args.encoding)?;

    let mut converted = 0;
    for path in &args.files {
        let xml = match read_input(path) {
            Ok(xml) => xml,
            Err(err) => {
                error!("cannot read {}: {}", path.display(), err);
                continue;
            }
        };

        let sentence = match converter.convert(&xml) {
            Ok(sentence) => sentence,
            Err(err) => {
                error!("skipping {}: {}", path.display(), err);
                continue;
            }
        };

        match writer.write_sentence(&sentence) {
            Ok(()) => (),
            Err(err @ malttab::Error::Unencodable { .. }) => {
                error!("skipping {}: {}", path.display(), err);
                continue;
            }
            Err(err) => return Err(err),
        }

        debug!("converted {}", path.display());
        converted += 1;
    }

    writer.flush()?;

    Ok(converted > 0)
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut xml = String::new();
        io::stdin().read_to_string(&mut xml)?;
        Ok(xml)
    } else {
        fs::read_to_string(path)
    }
}
