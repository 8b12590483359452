//! Pipelines -- load, fill, and write a table.
//!
//! [run_fill] is shared by the `fill` subcommand and the TOML-driven `pipeline` subcommand.
use crate::error::CliError;
use crate::table_io;
use log::*;
use phase_fill::{FillSummary, PhaseSetFill, PhaseSetFillConfig};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Everything a single run needs.
#[derive(Clone, Debug, PartialEq)]
pub struct FillOptions {
    pub input_file: PathBuf,
    pub result_file_name: String,
    pub separator: Option<char>,
    pub output_separator: Option<char>,
    pub comment_prefix: String,
    pub summary: Option<PathBuf>,
    pub config: PhaseSetFillConfig,
}

impl FillOptions {
    pub fn new(input_file: &Path, config: PhaseSetFillConfig) -> Self {
        Self {
            input_file: input_file.to_path_buf(),
            result_file_name: default_result_file_name(),
            separator: None,
            output_separator: None,
            comment_prefix: default_comment_prefix(),
            summary: None,
            config,
        }
    }
}

/// The configuration of the pipeline, read from a TOML profile.
/// Only `input_file` is required. The `[fill]` table takes the fields of
/// [PhaseSetFillConfig]; missing ones get their defaults.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PipelineConfig {
    input_file: PathBuf,
    #[serde(default = "default_result_file_name")]
    result_file_name: String,
    #[serde(default)]
    column_separator: Option<String>,
    #[serde(default)]
    output_separator: Option<String>,
    #[serde(default = "default_comment_prefix")]
    comment_prefix: String,
    #[serde(default)]
    verbose: usize,
    #[serde(default)]
    threads: Option<usize>,
    #[serde(default)]
    summary: Option<PathBuf>,
    #[serde(default)]
    fill: PhaseSetFillConfig,
}

fn default_result_file_name() -> String {
    "joined".to_string()
}

fn default_comment_prefix() -> String {
    "#".to_string()
}

impl PipelineConfig {
    pub fn from_toml(profile: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(profile)?)
    }
    pub fn verbose(&self) -> usize {
        self.verbose
    }
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }
    pub fn to_options(&self) -> Result<FillOptions, CliError> {
        let parse = |sep: &Option<String>| match sep {
            Some(sep) => table_io::parse_separator(sep).map(Some),
            None => Ok(None),
        };
        Ok(FillOptions {
            input_file: self.input_file.clone(),
            result_file_name: self.result_file_name.clone(),
            separator: parse(&self.column_separator)?,
            output_separator: parse(&self.output_separator)?,
            comment_prefix: self.comment_prefix.clone(),
            summary: self.summary.clone(),
            config: self.fill.clone(),
        })
    }
}

pub fn init_logger(verbose: usize) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        debug!("Logger was already initialized.");
    }
}

pub fn set_threads(threads: usize) {
    debug!("Set Threads\t{}", threads);
    if let Err(why) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        debug!("{:?} If the global pool is already set, this is Harmless.", why);
    }
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<FillSummary, CliError> {
    init_logger(config.verbose());
    if let Some(threads) = config.threads() {
        set_threads(threads);
    }
    let options = config.to_options()?;
    run_fill(&options)
}

pub fn run_fill(options: &FillOptions) -> Result<FillSummary, CliError> {
    let input = options.input_file.as_path();
    if !matches!(input.try_exists(), Ok(true)) {
        error!("File path does not exist");
        return Err(CliError::MissingInput(input.to_path_buf()));
    }
    debug!("Opening {:?}", input);
    let reader = std::fs::File::open(input).map(BufReader::new)?;
    let name = input.to_string_lossy();
    let (mut table, separator) =
        table_io::read_table(reader, &name, options.separator, &options.comment_prefix)?;
    let summary = table.fill_phase_set(&options.config)?;
    let output = table_io::output_path(input, &options.result_file_name);
    debug!("Writing {:?}", output);
    let mut wtr = std::fs::File::create(&output).map(BufWriter::new)?;
    let out_sep = options.output_separator.unwrap_or(separator);
    table_io::write_table(&mut wtr, &table, out_sep)?;
    if let Some(path) = options.summary.as_ref() {
        let mut wtr = std::fs::File::create(path).map(BufWriter::new)?;
        serde_json::ser::to_writer_pretty(&mut wtr, &summary)?;
    }
    Ok(summary)
}

#[cfg(test)]
mod test {
    use super::*;
    use phase_fill::StatusSource;
    use std::io::Write;
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("psfill_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
    #[test]
    fn parse_example_profile() {
        let profile = include_str!("../../example.toml");
        let config = PipelineConfig::from_toml(profile).unwrap();
        assert_eq!(config.verbose(), 1);
        let options = config.to_options().unwrap();
        assert_eq!(options.separator, Some('\t'));
        assert_eq!(options.config.suffix, ":PS");
        assert_eq!(options.config.layout, definitions::FieldLayout::new(1, 8, 9));
    }
    #[test]
    fn minimal_profile() {
        let profile = r#"
input_file = "in.tsv"
[fill]
status_source = "Schema"
[fill.layout]
data = 10
"#;
        let config = PipelineConfig::from_toml(profile).unwrap();
        let options = config.to_options().unwrap();
        assert_eq!(options.result_file_name, "joined");
        assert_eq!(options.comment_prefix, "#");
        assert_eq!(options.separator, None);
        assert_eq!(options.config.status_source, StatusSource::Schema);
        assert_eq!(options.config.layout.data, 10);
        assert_eq!(options.config.layout.schema, 8);
    }
    #[test]
    fn bad_profile() {
        assert!(PipelineConfig::from_toml("result_file_name = 3").is_err());
        let config = PipelineConfig::from_toml("input_file = \"a\"\ncolumn_separator = \"ab\"").unwrap();
        assert!(matches!(config.to_options(), Err(CliError::InvalidSeparator(_))));
    }
    #[test]
    fn missing_input() {
        let options = FillOptions::new(Path::new("/no/such/file.tsv"), PhaseSetFillConfig::default());
        assert!(matches!(run_fill(&options), Err(CliError::MissingInput(_))));
    }
    #[test]
    fn fill_file() {
        let dir = scratch_dir("fill_file");
        let input = dir.join("calls.tsv");
        let mut wtr = std::fs::File::create(&input).unwrap();
        writeln!(wtr, "##fileformat=VCFv4.2").unwrap();
        writeln!(wtr, "chr1\t5\t.\tA\tT\t.\tPASS\t.\tGT:GQ:DP:AD:VAF:PL:AF\ta:b:c:d:e:f:g").unwrap();
        writeln!(wtr, "chr1\t20\t.\tA\tT\t.\tPASS\t.\tGT:GQ:DP:AD:VAF:PL:AF:PS\ta:b:c:d:e:f:g:99").unwrap();
        writeln!(wtr, "chr1\t35\t.\tA\tT\t.\tPASS\t.\tGT:GQ:DP:AD:VAF:PL:AF\tx:y:z:w:v:u:t").unwrap();
        drop(wtr);
        let mut options = FillOptions::new(&input, PhaseSetFillConfig::default());
        options.result_file_name = dir.join("joined").to_string_lossy().to_string();
        options.summary = Some(dir.join("summary.json"));
        let summary = run_fill(&options).unwrap();
        assert_eq!(summary.filled, 2);
        let output = std::fs::read_to_string(dir.join("joined.tsv")).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "##fileformat=VCFv4.2");
        assert!(lines[1].ends_with("GT:GQ:DP:AD:VAF:PL:AF:PS\ta:b:c:d:e:f:g:99"));
        assert!(lines[3].ends_with("GT:GQ:DP:AD:VAF:PL:AF:PS\tx:y:z:w:v:u:t:99"));
        let summary_json = std::fs::read_to_string(dir.join("summary.json")).unwrap();
        let parsed: FillSummary = serde_json::from_str(&summary_json).unwrap();
        assert_eq!(parsed, summary);
        std::fs::remove_dir_all(&dir).unwrap();
    }
    #[test]
    fn invalid_coordinate_is_reported() {
        let dir = scratch_dir("invalid_coordinate");
        let input = dir.join("calls.csv");
        std::fs::write(&input, "c,1,GT,0|1\nc,two,GT,0|1\n").unwrap();
        let config = PhaseSetFillConfig::default().with_layout(definitions::FieldLayout::new(1, 2, 3));
        let mut options = FillOptions::new(&input, config);
        options.result_file_name = dir.join("out").to_string_lossy().to_string();
        match run_fill(&options) {
            Err(CliError::Fill(phase_fill::FillError::InvalidCoordinate { row, .. })) => {
                assert_eq!(row, 1)
            }
            x => panic!("{:?}", x),
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
