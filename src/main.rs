//! seeksim CLI entry point

use anyhow::{Context, Result};
use seeksim::config::{cli::Cli, cli_convert, interactive, toml, validator, Config, GeometryConfig, OutputConfig, QueueConfig};
use seeksim::output::csv::CsvWriter;
use seeksim::output::{json, plot, text};
use seeksim::{runner, workload};

fn main() -> Result<()> {
    println!("seeksim v{}", env!("CARGO_PKG_VERSION"));
    println!("Disk head-scheduling simulator");
    println!();

    // Parse CLI arguments
    let cli = Cli::parse_args();
    cli.validate()?;

    // Resolve configuration: interactive dialogue, TOML file, or flags
    let config = if cli.interactive {
        let mut config = interactive::prompt_config()?;
        config.output = output_config_from_cli(&cli);
        config
    } else if let Some(ref path) = cli.config {
        let file_config = toml::parse_toml_file(path)?;
        toml::merge_cli_with_config(&cli, file_config)?
    } else {
        build_config_from_cli(&cli)?
    };

    // Validate configuration
    validator::validate_config(&config)
        .context("Configuration validation failed")?;

    // The interactive dialogue already echoed any derived timings
    if !cli.interactive {
        if cli.rpm.is_some() {
            println!(
                " -> Calculated Avg Rotational Latency: {:.2} ms",
                config.disk.rotational_latency_ms
            );
        }
        if cli.transfer_rate_mbps.is_some() {
            println!(
                " -> Calculated Transfer Time per Request: {:.2} ms",
                config.disk.transfer_time_per_request_ms
            );
        }
    }

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    // Resolve the request queue (explicit or generated)
    let generated = config.queue.requests.is_none();
    let requests = match config.queue.requests {
        Some(ref requests) => requests.clone(),
        None => {
            let mut pattern = workload::create_pattern(
                config.queue.pattern,
                config.queue.clusters,
                config.queue.seed,
            );
            pattern.generate(config.geometry.max_cylinder, config.queue.count)
        }
    };

    if generated {
        println!();
        println!("{}", text::queue_preview(&requests));
        if !config.output.no_plot {
            if let Some(scatter) = plot::scatter_plot(&requests, config.geometry.max_cylinder) {
                println!();
                println!("{}", scatter);
            }
        }
    }

    println!();
    println!("{}", text::configuration_block(&config, &requests));

    // Run every policy over the same queue
    let reports = runner::compare_all(
        config.geometry.start_head,
        config.geometry.max_cylinder,
        &requests,
        &config.disk,
    );

    println!();
    println!("{}", text::summary_table(&reports, requests.len()));
    println!();
    println!("{}", text::notes_block(requests.len()));

    if config.output.show_sequences {
        println!();
        println!("{}", text::sequence_dump(&reports));
    }

    if config.output.json_output.is_some() || config.output.csv_output.is_some() {
        println!();
    }

    if let Some(ref path) = config.output.json_output {
        let summary = json::JsonRunSummary::new(&config, &requests, &reports);
        json::write_json_summary(path, &summary)?;
        println!("JSON summary written to {}", path.display());
    }

    if let Some(ref path) = config.output.csv_output {
        let mut writer = CsvWriter::new(path)?;
        for report in &reports {
            writer.append_report(report)?;
        }
        println!("CSV report written to {}", path.display());
    }

    Ok(())
}

/// Build configuration from CLI arguments
fn build_config_from_cli(cli: &Cli) -> Result<Config> {
    let start_head = cli
        .start_head
        .context("--start-head is required unless --config or --interactive is used")?;
    let max_cylinder = cli
        .max_cylinder
        .context("--max-cylinder is required unless --config or --interactive is used")?;

    // Parse the explicit queue if one was given
    let requests = match cli.queue.as_deref() {
        Some(list) => Some(cli_convert::parse_queue(list)?),
        None => None,
    };

    let defaults = QueueConfig::default();
    let queue = QueueConfig {
        requests,
        pattern: cli
            .pattern
            .map(cli_convert::convert_pattern)
            .unwrap_or(defaults.pattern),
        count: cli.requests.unwrap_or(defaults.count),
        clusters: cli.clusters.unwrap_or(defaults.clusters),
        seed: cli.seed,
    };

    Ok(Config {
        geometry: GeometryConfig {
            start_head,
            max_cylinder,
        },
        disk: cli_convert::disk_params_from_cli(cli),
        queue,
        output: output_config_from_cli(cli),
    })
}

/// Build output settings from CLI arguments
fn output_config_from_cli(cli: &Cli) -> OutputConfig {
    OutputConfig {
        json_output: cli.json_output.clone(),
        csv_output: cli.csv_output.clone(),
        show_sequences: cli.show_sequences,
        no_plot: cli.no_plot,
    }
}
