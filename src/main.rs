use std::error::Error;

use fuzzmatch::{FuzzConfig, FuzzyMatcher};
use tracing_subscriber::EnvFilter;

const TEST_MSG: &str = "Hi first time in your how room miss muffet, are you new? old are you?";
const FUZZY_ARGS: &str = "how firts muffet giraffe lights";

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    if std::env::var_os("FUZZMATCH_LOG_JSON").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    let cfg = match std::env::args().nth(1) {
        Some(path) => FuzzConfig::from_file(path)?,
        None => FuzzConfig::default(),
    };
    let matcher = FuzzyMatcher::new(&cfg)?;

    let queries: Vec<&str> = FUZZY_ARGS.split(' ').collect();
    let series = matcher.run_batch(TEST_MSG, &queries, true)?;
    let report = matcher.analyze(&series)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
