use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rfp::config::RfpConfig;
use rfp::io;
use rfp::io::cli::{Cli, Command};
use rfp::io::output::TrainingReport;
use rfp::model::dataset::Dataset;
use rfp::model::predictor::{LayoutRequest, predict_layout};
use rfp::model::trainer::{self, GeometryModel};
use rfp::synth::LayoutSampler;
use roomgen::entities::RoomKind;
use roomgen::io::export::export_layout;
use roomgen::io::svg::layout_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    match args.command {
        Command::Train {
            output_folder,
            config_file,
            layout_folder,
        } => {
            let config = load_config(config_file.as_deref())?;
            main_train(config, output_folder, layout_folder)
        }
        Command::Predict {
            model_file,
            output_folder,
            config_file,
            plot_width,
            plot_depth,
            rooms,
        } => {
            let config = load_config(config_file.as_deref())?;
            main_predict(
                config,
                model_file,
                output_folder,
                plot_width,
                plot_depth,
                rooms,
            )
        }
    }
}

fn load_config(config_file: Option<&Path>) -> Result<RfpConfig> {
    let config = match config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RfpConfig::default()
        }
        Some(path) => io::read_json(path).context("incorrect config file format")?,
    };
    info!("[MAIN] Successfully parsed RfpConfig: {config:?}");
    Ok(config)
}

fn main_train(
    config: RfpConfig,
    output_folder: PathBuf,
    layout_folder: Option<PathBuf>,
) -> Result<()> {
    fs::create_dir_all(&output_folder)
        .with_context(|| format!("could not create output folder: {output_folder:?}"))?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut sampler = LayoutSampler::new(config.synth, rng);
    let layouts = sampler.sample();

    if let Some(layout_folder) = &layout_folder {
        fs::create_dir_all(layout_folder)
            .with_context(|| format!("could not create layout folder: {layout_folder:?}"))?;
        for (i, layout) in layouts.iter().enumerate() {
            let path = layout_folder.join(format!("layout_{i}.json"));
            let file = File::create(&path)
                .with_context(|| format!("could not create layout file: {}", path.display()))?;
            serde_json::to_writer(BufWriter::new(file), &export_layout(layout))
                .with_context(|| format!("could not write layout file: {}", path.display()))?;
        }
        info!(
            "[MAIN] exported {} layouts to {:?}",
            layouts.len(),
            fs::canonicalize(layout_folder)?
        );
    }

    let dataset = Dataset::from_layouts(&layouts);
    let (model, scores) = trainer::train(&dataset, &config, &mut sampler.rng);

    model.save(&output_folder.join("model.json"))?;
    let report = TrainingReport {
        config,
        n_layouts: layouts.len(),
        n_rows: dataset.n_rows(),
        scores,
    };
    io::write_json(&report, &output_folder.join("report.json"))?;

    //one sample prediction as a smoke artifact of the freshly trained model
    let request = LayoutRequest::try_new(
        50.0,
        40.0,
        vec![
            RoomKind::LivingRoom,
            RoomKind::Kitchen,
            RoomKind::Bedroom,
            RoomKind::Bathroom,
        ],
    )?;
    let sample = predict_layout(&model, &request, &config.repair)?;
    io::write_json(
        &export_layout(&sample),
        &output_folder.join("sample_layout.json"),
    )?;
    io::write_svg(
        &layout_to_svg(&sample, config.svg_draw_options),
        &output_folder.join("sample_layout.svg"),
    )?;

    Ok(())
}

fn main_predict(
    config: RfpConfig,
    model_file: PathBuf,
    output_folder: PathBuf,
    plot_width: f64,
    plot_depth: f64,
    rooms: Vec<String>,
) -> Result<()> {
    fs::create_dir_all(&output_folder)
        .with_context(|| format!("could not create output folder: {output_folder:?}"))?;

    let model = GeometryModel::load(&model_file)?;
    let kinds = rooms
        .iter()
        .map(|tag| tag.parse())
        .collect::<Result<Vec<RoomKind>>>()?;
    let request = LayoutRequest::try_new(plot_width, plot_depth, kinds)?;

    let layout = predict_layout(&model, &request, &config.repair)?;
    match layout.is_overlap_free() {
        true => info!("[MAIN] predicted layout is overlap-free"),
        false => warn!(
            "[MAIN] repair left overlapping pair(s): {:?}",
            layout.overlapping_pairs()
        ),
    }

    io::write_json(&export_layout(&layout), &output_folder.join("layout.json"))?;
    io::write_svg(
        &layout_to_svg(&layout, config.svg_draw_options),
        &output_folder.join("layout.svg"),
    )?;

    Ok(())
}
