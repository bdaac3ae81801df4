use anyhow::{bail, Context};
use tracing::info;

use crate::cli::args::{Cli, Commands};
use crate::logging;
use crate::models::record::format_timestamp;
use crate::processors::IntegrityChecker;
use crate::readers::{Fm128Reader, ObservationReader};
use crate::settings::EncoderSettings;
use crate::writers::Fm128Writer;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Encode {
            input,
            output_file,
            point_mode,
            missing_data,
            config,
        } => {
            let settings = EncoderSettings::load(config.as_deref())
                .context("failed to load encoder settings")?
                .with_point_mode(point_mode)
                .with_missing_data_policy(missing_data)
                .with_output_file(output_file);

            println!("Encoding radar observations...");
            println!("Input file: {}", input.display());
            println!("Output file: {}", settings.output_file.display());
            println!(
                "Point mode: {:?}, missing data: {:?}",
                settings.point_mode, settings.missing_data_policy
            );

            let radars = ObservationReader::new()
                .read_file(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            info!("Loaded {} radar observation set(s)", radars.len());

            if let Some(parent) = settings.output_file.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            let writer = Fm128Writer::from_settings(&settings);
            let summary = writer
                .write_file(&radars, &settings.output_file)
                .with_context(|| {
                    format!(
                        "encoding failed, discard {}",
                        settings.output_file.display()
                    )
                })?;

            println!("\n{}", summary.summary());
            println!("Encoding complete!");
        }

        Commands::Validate { file } => {
            println!("Validating FM-128 file: {}", file.display());

            let document = Fm128Reader::new().read_file(&file)?;
            let checker = IntegrityChecker::new();
            let report = checker.check_document(&document);

            println!("\n{}", checker.generate_summary(&report));

            if !report.is_consistent() {
                bail!("found {} integrity violation(s)", report.violations.len());
            }
            println!("All declared counts match the records");
        }

        Commands::Info { file, sample } => {
            println!("Analyzing FM-128 file: {}", file.display());

            let document = Fm128Reader::new().read_file(&file)?;

            println!("\nRadars: {}", document.radars.len());
            println!("Points: {}", document.total_points());
            println!("Measurements: {}", document.total_measurements());

            for radar in &document.radars {
                let h = &radar.header;
                println!(
                    "\n{} at ({:.3}, {:.3}), {:.1} m, {}: {} points, max {} levels",
                    h.name,
                    h.latitude,
                    h.longitude,
                    h.elevation,
                    format_timestamp(&h.timestamp),
                    h.point_count,
                    h.max_levels
                );

                for (i, point) in radar.points.iter().take(sample).enumerate() {
                    let first = point.measurements.first();
                    println!(
                        "  {}. ({:.3}, {:.3}) {} levels, lowest {}",
                        i + 1,
                        point.header.latitude,
                        point.header.longitude,
                        point.header.level_count,
                        first.map_or("none".to_string(), |m| format!(
                            "{:.1} m: {:.1} dBZ, {:.2} m/s",
                            m.elevation, m.reflectivity, m.radial_velocity
                        ))
                    );
                }
            }
        }
    }

    Ok(())
}
