//! Interactive configuration prompts
//!
//! Walks the user through geometry, disk timing and queue setup on the
//! terminal. Every reader retries on bad input instead of failing, so a
//! typo never loses the answers already given.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};

use crate::config::{cli_convert, Config, GeometryConfig, OutputConfig, QueueConfig};
use crate::metrics::DiskParams;
use crate::workload::PatternType;
use crate::Result;

/// Prompt for a full simulation setup on stdin/stdout.
pub fn prompt_config() -> Result<Config> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    prompt_config_with(&mut input, &mut output)
}

/// Drive the dialogue over arbitrary streams.
pub fn prompt_config_with<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Config> {
    let start_head = read_u32(input, output, "Enter Start Head Position: ", 0, None)?;
    let max_cylinder = read_u32(input, output, "Enter Max Cylinder: ", 0, None)?;

    writeln!(output, "\n--- Enter Disk Performance Parameters ---")?;
    let seek_time = read_f64(input, output, "Average Seek Time per Cylinder (ms): ", 0.0)?;
    let rpm = read_f64(input, output, "Disk Rotational Speed (RPM): ", 1.0)?;
    let transfer_rate = read_f64(input, output, "Disk Transfer Rate (MB/s): ", 0.001)?;
    let request_size = read_f64(input, output, "Average Request Size (KB): ", 0.1)?;

    let rotational_latency_ms = cli_convert::rotational_latency_from_rpm(rpm);
    let transfer_time_ms = cli_convert::transfer_time_from_rate(transfer_rate, request_size);
    writeln!(
        output,
        " -> Calculated Avg Rotational Latency: {:.2} ms",
        rotational_latency_ms
    )?;
    writeln!(
        output,
        " -> Calculated Transfer Time per Request: {:.2} ms",
        transfer_time_ms
    )?;

    let queue = prompt_queue(input, output)?;

    Ok(Config {
        geometry: GeometryConfig {
            start_head,
            max_cylinder,
        },
        disk: DiskParams {
            seek_time_per_cylinder_ms: seek_time,
            rotational_latency_ms,
            transfer_time_per_request_ms: transfer_time_ms,
        },
        queue,
        output: OutputConfig::default(),
    })
}

/// Manual entry or generation choice, looping until a usable queue setup
/// comes back.
fn prompt_queue<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<QueueConfig> {
    loop {
        write!(
            output,
            "\nEnter 'm' for manual queue entry or 'g' to generate queue: "
        )?;
        output.flush()?;
        let mode = read_line(input)?;
        match mode.as_str() {
            "m" | "M" => {
                write!(output, "Enter Request Queue (comma-separated): ")?;
                output.flush()?;
                let line = read_line(input)?;
                match cli_convert::parse_queue(&line) {
                    Ok(requests) if requests.is_empty() => {
                        writeln!(
                            output,
                            "Warning: Manual queue entry resulted in an empty queue. Retrying."
                        )?;
                    }
                    Ok(requests) => {
                        return Ok(QueueConfig {
                            requests: Some(requests),
                            ..QueueConfig::default()
                        });
                    }
                    Err(err) => {
                        writeln!(output, "Warning: {}. Retrying.", err)?;
                    }
                }
            }
            "g" | "G" => {
                writeln!(output, "\n--- Generate Request Queue ---")?;
                writeln!(output, "Select generation pattern:")?;
                writeln!(output, "  1) Uniform Random")?;
                writeln!(output, "  2) Sequential")?;
                writeln!(output, "  3) Clustered (with density)")?;
                writeln!(output, "  4) Mixed (Random + Clustered)")?;
                let pattern = read_pattern_choice(input, output)?;
                let count =
                    read_u32(input, output, "Number of Requests to Generate: ", 1, None)? as usize;

                let mut queue = QueueConfig {
                    requests: None,
                    pattern,
                    count,
                    ..QueueConfig::default()
                };
                if pattern == PatternType::Clustered {
                    queue.clusters = read_u32(
                        input,
                        output,
                        "Desired Number of Clusters: ",
                        1,
                        Some(count as u32),
                    )? as usize;
                }
                return Ok(queue);
            }
            _ => {
                writeln!(output, "Invalid choice. Please enter 'm' or 'g'.")?;
            }
        }
    }
}

fn read_pattern_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PatternType> {
    loop {
        write!(output, "Generation Choice (1-4): ")?;
        output.flush()?;
        match read_line(input)?.as_str() {
            "1" => return Ok(PatternType::Uniform),
            "2" => return Ok(PatternType::Sequential),
            "3" => return Ok(PatternType::Clustered),
            "4" => return Ok(PatternType::Mixed),
            _ => writeln!(output, "Invalid input. Please enter 1, 2, 3, or 4.")?,
        }
    }
}

fn read_u32<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: u32,
    max: Option<u32>,
) -> Result<u32> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;
        let line = read_line(input)?;
        if let Ok(value) = line.parse::<u32>() {
            if value >= min && max.map_or(true, |m| value <= m) {
                return Ok(value);
            }
        }
        match max {
            Some(m) => writeln!(
                output,
                "Invalid input. Please enter an integer between {} and {}.",
                min, m
            )?,
            None if min > 0 => writeln!(output, "Invalid input. Please enter an integer >= {}.", min)?,
            None => writeln!(output, "Invalid input. Please enter an integer.")?,
        }
    }
}

fn read_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: f64,
) -> Result<f64> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;
        let line = read_line(input)?;
        if let Ok(value) = line.parse::<f64>() {
            if value.is_finite() && value >= min {
                return Ok(value);
            }
        }
        writeln!(output, "Invalid input. Please enter a number >= {}.", min)?;
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        bail!("Input ended unexpectedly");
    }
    Ok(line.trim().to_string())
}
