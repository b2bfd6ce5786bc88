//! Human-readable text output
//!
//! Every formatter returns the finished block as a `String` so the
//! binary decides where it goes and tests can assert on exact layout.

use crate::config::Config;
use crate::metrics::PolicyReport;

const CONFIG_QUEUE_PREVIEW: usize = 50;
const GENERATED_QUEUE_PREVIEW: usize = 100;

/// Configuration block printed before the comparison runs
pub fn configuration_block(config: &Config, requests: &[u32]) -> String {
    let mut lines = vec!["--- Configuration ---".to_string()];
    lines.push(format!("{:<15}{}", "Start Head:", config.geometry.start_head));
    lines.push(format!("{:<15}{}", "Max Cylinder:", config.geometry.max_cylinder));
    lines.push(format!(
        "{:<15}{:.2} ms",
        "Seek Time/Cyl:", config.disk.seek_time_per_cylinder_ms
    ));
    lines.push(format!(
        "{:<15}{:.2} ms",
        "Avg Rot Latency:", config.disk.rotational_latency_ms
    ));
    lines.push(format!(
        "{:<15}{:.2} ms",
        "Avg Xfer Time:", config.disk.transfer_time_per_request_ms
    ));

    let shown = requests
        .iter()
        .take(CONFIG_QUEUE_PREVIEW)
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let ellipsis = if requests.len() > CONFIG_QUEUE_PREVIEW {
        "..."
    } else {
        ""
    };
    lines.push(format!(
        "Initial Queue ({} requests): {}{}",
        requests.len(),
        shown,
        ellipsis
    ));
    lines.join("\n")
}

/// One-line preview of a generated queue
pub fn queue_preview(queue: &[u32]) -> String {
    let shown = queue
        .iter()
        .take(GENERATED_QUEUE_PREVIEW)
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let ellipsis = if queue.len() > GENERATED_QUEUE_PREVIEW {
        "..."
    } else {
        ""
    };
    format!("Generated Queue: {}{} ({} requests)", shown, ellipsis, queue.len())
}

/// The comparison table, one row per policy.
///
/// The lowest total head movement earns a `[BEST]` tag; several rows can
/// share it on a tie.
pub fn summary_table(reports: &[PolicyReport], request_count: usize) -> String {
    let min_movement = reports.iter().map(|r| r.total_movement).min().unwrap_or(0);

    let mut lines = Vec::with_capacity(reports.len() + 3);
    lines.push("--- Algorithm Comparison Summary ---".to_string());
    lines.push(format!(
        "{:<11}| {:>10} | {:>10} | {:>10} | {:>11} | {:>10} |{:>14}",
        "Algorithm", "Total Move", "Avg Seek", "Max Seek", "StdDev Seek", "Throughput", "Avg Resp(ms)"
    ));
    lines.push(
        "-----------|------------|------------|------------|-------------|------------|--------------"
            .to_string(),
    );

    for report in reports {
        let mut name = report.policy.name().to_string();
        if request_count > 0 && report.total_movement == min_movement {
            name.push_str(" [BEST]");
        }
        let throughput = if report.throughput.is_infinite() {
            format!("{:>10}", "Inf")
        } else {
            format!("{:>10.4}", report.throughput)
        };
        lines.push(format!(
            "{:<11}| {:>10} | {:>10.2} | {:>10} | {:>11.2} | {} |{:>14.2}",
            name,
            report.total_movement,
            report.avg_seek,
            report.max_seek,
            report.std_dev_seek,
            throughput,
            report.avg_response_time_ms
        ));
    }
    lines.join("\n")
}

/// Footnotes explaining how to read the table
pub fn notes_block(request_count: usize) -> String {
    [
        "Note: [BEST] indicates the algorithm with the lowest Total Head Movement.".to_string(),
        format!(
            "Note: Avg Seek, StdDev Seek, and Throughput are relative to the number of requests serviced ({}).",
            request_count
        ),
        "Note: Avg Resp(ms) = Avg(Seek Time + Rotational Latency + Transfer Time) per request service."
            .to_string(),
        "Note: Queueing Delay (time before scheduling) is not included in Avg Response Time."
            .to_string(),
    ]
    .join("\n")
}

/// Full visit sequence per policy, one line each
pub fn sequence_dump(reports: &[PolicyReport]) -> String {
    let mut lines = Vec::with_capacity(reports.len() + 1);
    lines.push("--- Visit Sequences ---".to_string());
    for report in reports {
        let sequence = report
            .sequence
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        lines.push(format!("{:<8}{}", format!("{}:", report.policy.name()), sequence));
    }
    lines.join("\n")
}
