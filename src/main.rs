use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

use svo_prep::{config, reader::bracketed, run};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE: &str = "usage: svo-extract [FILE|-] [--save DIR]

Reads bracketed parse trees (one per line) from FILE or stdin, extracts
subject-verb-object triples, and prints them as JSON. With --save, also
writes triples.jsonl + summary.json under DIR/svo_data/<timestamp>/.";

fn main() -> Result<(), Box<dyn Error>> {
    // Optional .env file for SVO_CONFIG / SVO_DEBUG_TREE / RUST_LOG.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,svo_prep=info"))
        .unwrap();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut input: Option<PathBuf> = None;
    let mut save: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--save" => {
                let dir = args.next().ok_or("--save requires a directory")?;
                save = Some(PathBuf::from(dir));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    let text = match &input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let cfg = config::load_from_env_or_default()?;
    let trees = bracketed::read_trees(&text)?;

    let mut triples = Vec::new();
    for tree in &trees {
        triples.extend(run::process_tree(tree, &cfg)?);
    }

    serde_json::to_writer_pretty(std::io::stdout().lock(), &triples)?;
    println!();

    if let Some(dir) = save {
        run::persist_triples(&dir, &triples)?;
    }

    Ok(())
}
