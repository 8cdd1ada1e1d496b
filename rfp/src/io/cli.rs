use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize training layouts, fit the geometry model and write it out with a report
    Train {
        /// Folder for the model, the report and a sample prediction
        #[arg(short, long, value_name = "FOLDER")]
        output_folder: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        config_file: Option<PathBuf>,
        /// Also export every synthetic layout as `layout_<i>.json` into this folder
        #[arg(long, value_name = "FOLDER")]
        layout_folder: Option<PathBuf>,
    },
    /// Predict a repaired layout for a plot using a trained model
    Predict {
        #[arg(short, long, value_name = "FILE")]
        model_file: PathBuf,
        /// Folder for the layout JSON and SVG
        #[arg(short, long, value_name = "FOLDER")]
        output_folder: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        config_file: Option<PathBuf>,
        #[arg(long, value_name = "REAL")]
        plot_width: f64,
        #[arg(long, value_name = "REAL")]
        plot_depth: f64,
        /// Comma-separated room kinds, e.g. "living_room,kitchen,bedroom,bathroom"
        #[arg(short, long, value_name = "KIND,KIND,...", value_delimiter = ',')]
        rooms: Vec<String>,
    },
}
