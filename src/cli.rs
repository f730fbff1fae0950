use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Concentrator setup time vs. morning/evening charging energy")]
pub struct Args {
    /// Computation to run: TIMES or NCONCS (case-insensitive); anything else does nothing
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Irradiance table to read for TIMES (default: solposdata.csv)
    #[arg(allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, env = "CONCSETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write the energy-vs-setup-time table (default: energyVSetupTime.csv)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Extra arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}
