//! ASCII scatter plot of the request queue
//!
//! Cylinder runs across the page, request index down it, so streaks and
//! clusters in a generated queue are visible at a glance.

const PLOT_WIDTH: usize = 80;
const MAX_PLOT_HEIGHT: usize = 40;

/// Render the queue as a scatter plot. Returns `None` for an empty
/// queue.
pub fn scatter_plot(queue: &[u32], max_cylinder: u32) -> Option<String> {
    if queue.is_empty() {
        return None;
    }

    let height = queue.len().min(MAX_PLOT_HEIGHT);
    let mut grid = vec![vec!['.'; PLOT_WIDTH]; height];

    let y_scale = if queue.len() > 1 {
        (height - 1) as f64 / (queue.len() - 1) as f64
    } else {
        1.0
    };
    let x_scale = if max_cylinder > 0 {
        (PLOT_WIDTH - 1) as f64 / f64::from(max_cylinder)
    } else {
        0.0
    };

    for (i, &cylinder) in queue.iter().enumerate() {
        let row = ((i as f64 * y_scale).round() as usize).min(height - 1);
        let col = ((f64::from(cylinder) * x_scale).round() as usize).min(PLOT_WIDTH - 1);
        grid[row][col] = '*';
    }

    let mut lines = Vec::with_capacity(height + 4);
    lines.push(format!(
        "ASCII Scatter Plot (x=cyl 0..{}, y=request index approx.)",
        max_cylinder
    ));

    let mut rail = String::with_capacity(PLOT_WIDTH + 2);
    rail.push_str(" |");
    for i in 0..PLOT_WIDTH {
        rail.push(if i == 0 {
            '0'
        } else if i == PLOT_WIDTH - 1 {
            'M'
        } else {
            '-'
        });
    }
    lines.push(rail);

    for row in &grid {
        lines.push(format!(" |{}", row.iter().collect::<String>()));
    }
    lines.push(format!(" |{}", "-".repeat(PLOT_WIDTH)));
    lines.push(format!(" (M={})", max_cylinder));

    Some(lines.join("\n"))
}
