use clap::{value_parser, Arg, ArgAction, Command};
fn subcommand_fill() -> Command {
    Command::new("fill")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Fill missing PS values from the nearest row carrying PS.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Debug mode"),
        )
        .arg(
            Arg::new("file_path")
                .value_name("FILE")
                .required(true)
                .help("Input table (VCF body or any delimited file). No header row."),
        )
        .arg(
            Arg::new("result_file_name")
                .short('f')
                .long("result_file_name")
                .value_name("NAME")
                .default_value("joined")
                .help("The name of the resulting file. Without an extension, the input's extension is used."),
        )
        .arg(
            Arg::new("column_separator")
                .short('s')
                .long("column_separator")
                .value_name("SEP")
                .help("Column separator. Guessed from the first lines if not given."),
        )
        .arg(
            Arg::new("output_separator")
                .long("output_separator")
                .value_name("SEP")
                .help("Column separator of the output. Same as the input by default."),
        )
        .arg(
            Arg::new("comment_prefix")
                .long("comment_prefix")
                .default_value("#")
                .help("Leading lines starting with this prefix are copied as-is. Empty to disable."),
        )
        .arg(
            Arg::new("coordinate_column")
                .long("coordinate_column")
                .value_parser(value_parser!(usize))
                .default_value("1")
                .help("0-based index of the position column."),
        )
        .arg(
            Arg::new("schema_column")
                .long("schema_column")
                .value_parser(value_parser!(usize))
                .default_value("8")
                .help("0-based index of the FORMAT column."),
        )
        .arg(
            Arg::new("data_column")
                .long("data_column")
                .value_parser(value_parser!(usize))
                .default_value("9")
                .help("0-based index of the SAMPLE column."),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .default_value(":PS")
                .help("Token appended to the FORMAT column of filled rows."),
        )
        .arg(
            Arg::new("legacy_schema_check")
                .long("legacy_schema_check")
                .action(ArgAction::SetTrue)
                .help("Decide which rows to fill by the FORMAT column instead of the SAMPLE column."),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .value_name("JSON")
                .help("Write the number of filled rows to this file."),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_parser(value_parser!(usize))
                .default_value("1")
                .help("number of threads"),
        )
}

fn subcommand_pipeline() -> Command {
    Command::new("pipeline")
        .version("0.1")
        .author("BanshoMasutani")
        .about("Run fill based on the given TOML file.")
        .arg(
            Arg::new("profile")
                .short('p')
                .required(true)
                .help("TOML configuration file. See example.toml for an example."),
        )
}

pub fn psfill_parser() -> Command {
    Command::new("psfill")
        .version("0.1")
        .author("Bansho Masutani <ban-m@g.ecc.u-tokyo.ac.jp>")
        .about("Phase-set filler for VCF-like tables")
        .arg_required_else_help(true)
        .subcommand(subcommand_fill())
        .subcommand(subcommand_pipeline())
}
