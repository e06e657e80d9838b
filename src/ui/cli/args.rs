use clap::Parser;
use std::path::PathBuf;

use crate::evaluation::CurveFormat;

#[derive(Debug, Parser)]
#[command(
    name = "expmax",
    version,
    about = "Calculate the expected maximum validation performance (Dodge et al., 2019; Tang et al., 2020)",
    after_help = "If neither file nor numbers are given, interactive mode is used: enter a number \
on each line and an empty line to end. The numbers option is preferred over the file option."
)]
pub struct Cli {
    /// Read values from file (one value per line)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Values
    #[arg(
        short = 'n',
        long,
        value_name = "NUM",
        num_args = 0..,
        allow_negative_numbers = true
    )]
    pub numbers: Vec<f64>,

    /// Use the original biased estimator (sampling with replacement)
    #[arg(short = 'b', long)]
    pub biased: bool,

    /// Print the results, one number per line
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Also write the curve to this file
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Layout of the exported curve: csv, tsv or json
    #[arg(long, default_value_t = CurveFormat::Csv, requires = "output")]
    pub format: CurveFormat,
}
