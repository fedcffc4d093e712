#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! `slugline` command-line tool.
//!
//! Text comes from the trailing arguments (joined with spaces) or, when there
//! are none, from stdin.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};

use slugline::{Config, Locale, Normalization, Transliterator, linkify, shortify, urlify};

#[derive(Parser)]
#[command(name = "slugline", version, about = "Slugify, transliterate, truncate and auto-link text")]
struct Cli {
    /// TOML file with default options
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a URL slug
    Urlify {
        #[arg(long)]
        max_length: Option<usize>,
        #[arg(long)]
        locale: Option<String>,
        /// Remove the short fixed stop-word list instead of the full one
        #[arg(long)]
        exclude_builtin: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Transliterate to printable ASCII
    Asciify {
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        charset: Option<String>,
        /// none, lower or upper
        #[arg(long)]
        case: Option<Normalization>,
        #[command(flatten)]
        input: Input,
    },
    /// Strip tags and truncate at a word boundary
    Shortify {
        #[arg(long)]
        length: Option<usize>,
        #[arg(long)]
        tail: Option<String>,
        #[command(flatten)]
        input: Input,
    },
    /// Wrap URLs in nofollow anchors
    Linkify {
        /// Add target="_blank" to every anchor
        #[arg(long)]
        new_window: bool,
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args)]
struct Input {
    /// Text to process (read from stdin if omitted)
    text: Vec<String>,
}

impl Input {
    fn read(self) -> Result<String> {
        self.read_from(io::stdin().lock())
    }

    /// Joined arguments, or everything from `reader` minus the final line break.
    fn read_from(self, mut reader: impl Read) -> Result<String> {
        if !self.text.is_empty() {
            return Ok(self.text.join(" "));
        }
        let mut buf = String::new();
        reader.read_to_string(&mut buf).context("while reading stdin")?;
        let len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(len);
        Ok(buf)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            Config::load(path).with_context(|| format!("while loading config {}", path.display()))?
        },
        None => Config::default(),
    };
    debug!("effective config: {config:?}");

    let output = run(cli.command, &config)?;
    println!("{output}");
    Ok(())
}

fn run(command: Command, config: &Config) -> Result<String> {
    Ok(match command {
        Command::Urlify {
            max_length,
            locale,
            exclude_builtin,
            input,
        } => {
            let locale = locale.unwrap_or_else(|| config.urlify.locale.clone());
            let excluded: Option<&[&str]> = if exclude_builtin { Some(&[]) } else { None };
            urlify(
                input.read()?.trim(),
                max_length.unwrap_or(config.urlify.max_length),
                &locale,
                excluded,
            )
        },
        Command::Asciify {
            locale,
            charset,
            case,
            input,
        } => {
            let locale = Locale::parse(locale.as_deref().unwrap_or(&config.asciify.locale));
            let charset = charset.unwrap_or_else(|| config.asciify.charset.clone());
            let text = Transliterator::new().asciify(&input.read()?, &locale, &charset);
            case.unwrap_or(config.asciify.case).apply(&text).into_owned()
        },
        Command::Shortify { length, tail, input } => shortify(
            &input.read()?,
            length.unwrap_or(config.shortify.length),
            tail.as_deref().unwrap_or(&config.shortify.tail),
        ),
        Command::Linkify { new_window, input } => linkify(&input.read()?, new_window || config.linkify.new_window),
    })
}
