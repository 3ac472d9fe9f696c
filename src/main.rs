mod loader;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, info_span};
use tracing_subscriber::EnvFilter;

use wordchain_engine::accumulator::{Accumulator, HeapAccumulator};
use wordchain_engine::config::host;
use wordchain_engine::enumerator::{find_longest, HeapPathBuffer};
use wordchain_engine::index::{HeapSignatureIndex, SignatureIndex};
use wordchain_engine::render::{format_chain, format_summary};
use wordchain_engine::store::{HeapWordStore, WordStore};

/// Enumerates the longest derived-anagram chains reachable from a
/// starting word in a dictionary.
#[derive(clap::Parser, Debug)]
#[command(author, version, about = "wordchain", long_about = None)]
#[command(after_help = "Example:\n  wordchain words.txt abck")]
struct Args {
    /// Dictionary file path (one word per line)
    dictionary: PathBuf,

    /// Starting word to search chains from
    start_word: String,

    /// Output file; prints to stdout when omitted
    #[arg(short = 'o', long = "out")]
    output_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut store = HeapWordStore::create(1 << 16);
    let words_added = {
        let _span = info_span!("load", dictionary = %args.dictionary.display()).entered();
        let added = loader::load_dictionary(&mut store, &args.dictionary)?;
        info!(added, "dictionary loaded");
        added
    };

    let index = {
        let _span = info_span!("build_index", words = words_added).entered();
        let index = HeapSignatureIndex::build(&store)?;
        info!("signature index built");
        index
    };

    let mut path = HeapPathBuffer::new();
    let mut acc = HeapAccumulator::with_host_defaults();
    {
        let _span = info_span!("search", start_word = %args.start_word).entered();
        find_longest(
            &store,
            &index,
            args.start_word.as_bytes(),
            host::MAX_CHAIN_DEPTH,
            &mut path,
            &mut acc,
        );
        info!(max_length = acc.max_length(), chains = acc.chains().len(), "search complete");
    }

    let rendered = render_result(&store, &acc);
    match args.output_file {
        Some(out_path) => std::fs::write(out_path, rendered)?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render_result<S: WordStore>(store: &S, acc: &HeapAccumulator) -> String {
    let chains = acc.chains();
    let mut out = format_summary(chains.len(), acc.max_length());
    out.push('\n');
    for chain in chains {
        let words: Vec<&[u8]> = chain
            .iter()
            .map(|&id| store.word(id).expect("emitted chain ids are always live"))
            .collect();
        out.push_str(&format_chain(&words));
        out.push('\n');
    }
    out
}
