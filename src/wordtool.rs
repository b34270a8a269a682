//! Offline word-list tool.
//!
//! `filter` streams the words the dictionary filter would accept; `max`
//! computes the minimal letter multiset covering every accepted word
//! (the smallest tile bag that could spell any of them). Not on the
//! request path.

use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lexgrid::core::multiset::LetterCounts;
use lexgrid::words::dict::{DictOptions, PlayableWords};

const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "filter".to_string());
    let mut files: Vec<String> = args.collect();
    if files.is_empty() {
        files.push(DEFAULT_WORD_LIST.to_string());
    }

    match mode.as_str() {
        "filter" => {
            for word in accepted_words(&files)? {
                println!("{}", word?);
            }
        }
        "max" => {
            let mut cover = LetterCounts::default();
            for word in accepted_words(&files)? {
                let counts = LetterCounts::from_word(&word?);
                cover = LetterCounts::max([&cover, &counts]);
            }
            println!("Max: {} (length={})", cover, cover.total());
        }
        other => anyhow::bail!("unknown mode {other:?} (expected \"filter\" or \"max\")"),
    }
    Ok(())
}

fn accepted_words(
    files: &[String],
) -> anyhow::Result<impl Iterator<Item = std::io::Result<String>>> {
    let mut streams = Vec::new();
    for path in files {
        info!(path = %path, "reading word list");
        let file = File::open(path).with_context(|| format!("opening {path}"))?;
        streams.push(PlayableWords::new(
            Box::new(BufReader::new(file)) as Box<dyn BufRead>,
            DictOptions::default(),
        ));
    }
    Ok(streams.into_iter().flatten())
}
