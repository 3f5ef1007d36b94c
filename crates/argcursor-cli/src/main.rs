use anyhow::Result;
use argcursor_config::Config;
use argcursor_engine::{HostString, Representation};
use std::{env, process};

mod plan;

const USAGE: &str = "usage: argcursor-cli [--host] <plan> [token...]

plan: comma-separated steps, each `kind[:flag...]`
  kinds: int u64 u32 i32 double str stop skip
  flags: noadvance ge0 ge1 coalesce";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (host_flag, rest) = match args.split_first() {
        Some((first, rest)) if first == "--host" => (true, rest),
        _ => (false, args.as_slice()),
    };
    let Some((plan, tokens)) = rest.split_first() else {
        eprintln!("{USAGE}");
        process::exit(2);
    };

    let config = match Config::load()? {
        Some(config) => config,
        None => {
            log::debug!("No config file at {}", Config::config_path().display());
            Config::default()
        }
    };
    let stopwords = config.stopword_list()?;
    let representation = if host_flag {
        Representation::Host
    } else {
        config.representation
    };

    let steps = plan::parse_plan(plan)?;
    log::debug!(
        "Running {} steps over {} {:?} tokens",
        steps.len(),
        tokens.len(),
        representation
    );

    let lines = match representation {
        Representation::Raw => plan::run_plan(&steps, tokens, &stopwords),
        Representation::Host => {
            let host: Vec<HostString> = tokens
                .iter()
                .map(|token| HostString::from(token.as_str()))
                .collect();
            plan::run_plan(&steps, &host, &stopwords)
        }
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}
