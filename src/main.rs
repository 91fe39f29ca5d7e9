mod cache;
mod config;
mod error;
mod replace;
mod stats;
mod system;
mod trace;

use std::{ffi::OsString, fs, path::PathBuf, process::ExitCode};

use anyhow::Context;

use crate::{
    config::{Mapping, Organization, SimConfig},
    error::SimError,
    trace::TraceReader,
};

const USAGE: &str = "Usage: cache_sim [-t <trace file>] [--json <path>] \
    <cache size: 128-4096> <cache mapping: dm|fa> <cache organization: uc|sc>";

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_env();
    let trace_path: PathBuf = args
        .opt_value_from_str("-t")?
        .unwrap_or_else(|| PathBuf::from("mem_trace.txt"));
    let json_path: Option<PathBuf> = args.opt_value_from_str("--json")?;
    let config = parse_config(args.finish()).map_err(|err| {
        eprintln!("{USAGE}");
        err
    })?;

    let mut system = config.build()?;
    let mut reader = TraceReader::open(&trace_path)
        .with_context(|| format!("cannot open trace {}", trace_path.display()))?;

    while let Some(access) = reader.next_access()? {
        let result = system.access(&access)?;
        log::debug!("{} {:#010x} {:?}", access.kind, access.address, result);
    }

    let report = system.report();
    print!("{report}");

    if let Some(path) = json_path {
        let file = fs::File::create(&path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)?;
    }
    Ok(())
}

fn parse_config(free: Vec<OsString>) -> Result<SimConfig, SimError> {
    let [size, mapping, organization]: [OsString; 3] = free
        .try_into()
        .map_err(|_| SimError::Config("expected exactly three arguments".into()))?;

    let size = size
        .to_str()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| {
            SimError::Config(format!("invalid cache size `{}`", size.to_string_lossy()))
        })?;
    let mapping: Mapping = mapping.to_string_lossy().parse()?;
    let organization: Organization = organization.to_string_lossy().parse()?;

    Ok(SimConfig::new(size, mapping, organization))
}
