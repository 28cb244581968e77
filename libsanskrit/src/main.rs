use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use libsanskrit::{Converter, SanskritConfig, Transliterator};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    /// Latin (in --scheme) to Devanagari
    Deva,
    /// Devanagari to Latin (in --scheme)
    Latin,
}

/// Transliterate Sanskrit between Latin romanizations and Devanagari.
#[derive(Parser)]
#[command(name = "sanscript", version)]
struct Args {
    /// Romanization scheme: iast, iso15919, hk
    #[arg(long, alias = "from-scheme")]
    scheme: Option<String>,

    /// Output script
    #[arg(long, value_enum, default_value_t = Target::Deva)]
    to: Target,

    /// Convert Latin text from --scheme into this scheme instead
    #[arg(long)]
    to_scheme: Option<String>,

    /// Warn about input the scheme does not recognize
    #[arg(long)]
    strict: bool,

    /// Units exempt from --strict warnings (repeatable)
    #[arg(long)]
    allow: Vec<String>,

    /// TOML file with scheme, strict, allow and case_sensitive
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text to convert; stdin is read line by line when omitted
    text: Vec<String>,
}

enum Pipeline {
    Script(Converter, Target),
    Scheme(Transliterator),
}

impl Pipeline {
    fn run(&self, line: &str) -> String {
        match self {
            Pipeline::Script(conv, Target::Deva) => conv.to_devanagari(line),
            Pipeline::Script(conv, Target::Latin) => conv.to_latin(line),
            Pipeline::Scheme(t) => t.convert(line),
        }
    }
}

fn build(args: &Args) -> Result<Pipeline> {
    let mut cfg = match &args.config {
        Some(path) => SanskritConfig::load_toml(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SanskritConfig::default(),
    };
    if let Some(scheme) = &args.scheme {
        cfg.scheme = scheme.clone();
    }
    cfg.strict |= args.strict;
    cfg.allow.extend(args.allow.iter().cloned());

    let from = cfg.converter().context("building source converter")?;
    match &args.to_scheme {
        Some(name) => {
            let to = SanskritConfig {
                scheme: name.clone(),
                ..SanskritConfig::default()
            }
            .converter()
            .context("building target converter")?;
            Ok(Pipeline::Scheme(Transliterator::from_converters(from, to)))
        }
        None => Ok(Pipeline::Script(from, args.to)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let pipeline = build(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.text.is_empty() {
        writeln!(out, "{}", pipeline.run(&args.text.join(" ")))?;
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        writeln!(out, "{}", pipeline.run(&line))?;
    }
    Ok(())
}
