use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use collection_ops::{
    load_records, sample_pets, timed, write_records, Config, MapOps, MapScenario, QueueOps,
    SequenceOps, SetOps,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Collection {
    All,
    List,
    Queue,
    Set,
    Map,
}

/// Run search, sort and min/max operations over the standard collections.
#[derive(Debug, Parser)]
#[command(name = "collection-ops", version)]
struct Args {
    /// Record file, one signed byte per line
    #[arg(long = "data")]
    data_path: Option<PathBuf>,

    /// Value to search for in the list, queue and set
    #[arg(long = "search", allow_negative_numbers = true)]
    search_value: Option<i8>,

    /// Which collection demo to run
    #[arg(long, value_enum, default_value_t = Collection::All)]
    collection: Collection,
}

impl Args {
    fn into_config(self) -> (Config, Collection) {
        let mut config = Config::default();
        if let Some(path) = self.data_path {
            config.data_path = path;
        }
        if let Some(value) = self.search_value {
            config.search_value = value;
        }
        (config, self.collection)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("collection_ops=info")),
        )
        .init();

    let (config, collection) = Args::parse().into_config();
    match run(&config, collection) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, collection: Collection) -> collection_ops::Result<()> {
    let wants = |c: Collection| collection == Collection::All || collection == c;

    if wants(Collection::List) || wants(Collection::Queue) || wants(Collection::Set) {
        let records = timed("load records", || load_records(&config.data_path))?;
        tracing::info!(
            path = %config.data_path.display(),
            count = records.len(),
            "loaded records"
        );

        if wants(Collection::List) {
            tracing::info!("===== list =====");
            let mut list = SequenceOps::new(config.search_value, records.clone());
            list.run();
            write_records(list.as_slice(), config.sorted_output_path())?;
        }

        if wants(Collection::Queue) {
            tracing::info!("===== priority queue =====");
            QueueOps::new(config.search_value, records.iter().copied()).run();
        }

        if wants(Collection::Set) {
            tracing::info!("===== hash set =====");
            SetOps::new(config.search_value, records).run();
        }
    }

    if wants(Collection::Map) {
        let scenario = MapScenario::pets();

        tracing::info!("===== HashMap =====");
        let mut hashed: MapOps<HashMap<_, _>> = MapOps::new(sample_pets().into_iter().collect());
        hashed.run(&scenario);

        tracing::info!("===== BTreeMap =====");
        let mut ordered: MapOps<BTreeMap<_, _>> = MapOps::new(sample_pets().into_iter().collect());
        ordered.run(&scenario);
    }

    Ok(())
}
