use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use plate_rs::entities::Instance;
use plate_rs::io::ext_repr::ExtSolution;
use plate_rs::util::PlateConfig;
use serde::Serialize;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;
pub mod plate_to_svg;

/// Reads the order list at `path` and imports it into an [`Instance`]
pub fn read_instance(path: &Path, config: &PlateConfig) -> Result<Instance> {
    let file = File::open(path)
        .with_context(|| format!("could not open order file: {}", path.display()))?;
    let orders = plate_rs::io::read_orders(BufReader::new(file))
        .with_context(|| format!("could not parse order file: {}", path.display()))?;
    let instance = plate_rs::io::import(&orders, config)?;
    info!(
        "[IO] imported {} items ({} parts) from {}",
        instance.items().len(),
        instance.total_part_qty(),
        path.display()
    );
    Ok(instance)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution JSON written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_csv(solution: &ExtSolution, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    plate_rs::io::write_csv(solution, BufWriter::new(file))
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution CSV written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!(
        "[IO] svg written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!(
        "[MAIN] epoch: {}",
        jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S %Z")
    );
    Ok(())
}
