use phase_fill::{PhaseSetFillConfig, StatusSource};
use psfill_cli::error::CliError;
use psfill_cli::pipeline::{self, FillOptions, PipelineConfig};
use psfill_cli::table_io::parse_separator;
use std::path::Path;
#[macro_use]
extern crate log;

fn main() {
    let matches = psfill_cli::commands::psfill_parser().get_matches();
    let result = match matches.subcommand() {
        Some(("pipeline", sub_m)) => pipeline_profile(sub_m),
        Some(("fill", sub_m)) => fill(sub_m),
        _ => unreachable!(),
    };
    if let Err(why) = result {
        eprintln!("{}", why);
        std::process::exit(1);
    }
}

fn pipeline_profile(matches: &clap::ArgMatches) -> Result<(), CliError> {
    let path: &String = matches.get_one("profile").unwrap();
    let profile = std::fs::read_to_string(path)?;
    let config = PipelineConfig::from_toml(&profile)?;
    pipeline::run_pipeline(&config).map(|_| ())
}

fn fill(matches: &clap::ArgMatches) -> Result<(), CliError> {
    pipeline::init_logger(matches.get_count("verbose") as usize);
    if let Some(&threads) = matches.get_one::<usize>("threads") {
        pipeline::set_threads(threads);
    }
    debug!("START\tFill");
    let input: &String = matches.get_one("file_path").unwrap();
    let layout = definitions::FieldLayout::new(
        *matches.get_one("coordinate_column").unwrap(),
        *matches.get_one("schema_column").unwrap(),
        *matches.get_one("data_column").unwrap(),
    );
    let suffix: &String = matches.get_one("suffix").unwrap();
    let status_source = match matches.get_flag("legacy_schema_check") {
        true => StatusSource::Schema,
        false => StatusSource::Data,
    };
    let config = PhaseSetFillConfig::new(layout, suffix, status_source);
    let mut options = FillOptions::new(Path::new(input), config);
    let sep = |name: &str| {
        matches
            .get_one::<String>(name)
            .map(|s| parse_separator(s))
            .transpose()
    };
    options.separator = sep("column_separator")?;
    options.output_separator = sep("output_separator")?;
    options.result_file_name = matches
        .get_one::<String>("result_file_name")
        .unwrap()
        .clone();
    options.comment_prefix = matches.get_one::<String>("comment_prefix").unwrap().clone();
    options.summary = matches.get_one::<String>("summary").map(|x| x.into());
    let summary = pipeline::run_fill(&options)?;
    debug!("END\tFill\t{}", summary.filled);
    Ok(())
}
