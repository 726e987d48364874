use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use plate_rs::entities::{Instance, Solution};
use plateopt::config::PlateOptConfig;
use plateopt::io;
use plateopt::io::cli::{Algorithm, Cli};
use plateopt::io::output::PlateOptOutput;
use plateopt::io::plate_to_svg::plate_to_svg;
use plateopt::opt::baseline::baseline_solution;
use plateopt::opt::ga::GAOptimizer;
use plateopt::opt::sa::SAOptimizer;
use plateopt::report::ImprovementReport;
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlateOptConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed PlateOptConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_string();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let instance = io::read_instance(&args.input_file, &config.plate)?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let (solution, report) = match args.algorithm {
        Algorithm::Genetic => {
            let outcome = GAOptimizer::new(instance.clone(), config.plate, config.ga, rng)
                .solve()
                .context("genetic optimization failed")?;
            (outcome.solution, outcome.report)
        }
        Algorithm::Annealing => {
            let (solution, _) =
                SAOptimizer::new(instance.clone(), config.plate, config.sa, rng).solve();
            let baseline = baseline_solution(instance.items(), &config.plate);
            let report = ImprovementReport::new(&baseline, &solution, &config.plate)?;
            (solution, report)
        }
    };

    report.log(match args.algorithm {
        Algorithm::Genetic => "GA",
        Algorithm::Annealing => "SA",
    });

    write_outputs(
        &instance,
        &solution,
        report,
        config,
        args.algorithm,
        &input_file_stem,
        &args.solution_folder,
    )
}

fn write_outputs(
    instance: &Instance,
    solution: &Solution,
    report: ImprovementReport,
    config: PlateOptConfig,
    algorithm: Algorithm,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    let ext_solution = plate_rs::io::export(instance, solution, &config.plate);

    {
        let csv_path = output_folder.join(format!("sol_{input_stem}.csv"));
        io::write_csv(&ext_solution, &csv_path)?;
    }

    {
        let output = PlateOptOutput {
            algorithm: format!("{algorithm:?}"),
            solution: ext_solution,
            report,
            config,
        };
        let json_path = output_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &json_path)?;
    }

    {
        for (i, plate) in solution.plates.iter().enumerate() {
            let svg_path = output_folder.join(format!("sol_{input_stem}_{}.svg", i + 1));
            let svg = plate_to_svg(plate, instance, &config.plate, &format!("plate {}", i + 1));
            io::write_svg(&svg, &svg_path)?;
        }
    }

    Ok(())
}
