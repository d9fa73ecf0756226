//! Output formatting module

use parking_app::app::LoadSummary;
use parking_domain::model::Vehicle;
use parking_domain::service::DashboardSummary;
use parking_types::{OutputFormat, Result};

use crate::terminal::Colorize;

/// Print the vehicle list in the requested format
pub fn output_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
    } else {
        print!("{}", render_vehicle_table(vehicles));
    }
    Ok(())
}

/// Print the dashboard in the requested format
pub fn output_dashboard(output_format: OutputFormat, summary: &DashboardSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", render_dashboard(summary));
    }
    Ok(())
}

pub fn render_vehicle_table(vehicles: &[Vehicle]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "===== Vehicle List =====".heading()));

    if vehicles.is_empty() {
        out.push_str(&format!("{}\n", "No vehicles to display.".warning()));
        return out;
    }

    out.push_str(&format!(
        "{:>3}  {:>6}  {:<14} {:<10} {:>10} {:>10}\n",
        "#", "ID", "Plate", "Type", "Duration", "Charge"
    ));
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for (index, vehicle) in vehicles.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:>6}  {:<14} {:<10} {:>6.2} hrs {:>10}\n",
            index + 1,
            vehicle.id,
            truncate_str(&vehicle.plate, 14),
            truncate_str(&vehicle.vehicle_type, 10),
            vehicle.duration_hours,
            format_money(vehicle.charge),
        ));
    }
    out
}

/// Detail block for a single search hit
pub fn render_vehicle(vehicle: &Vehicle) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n{} {:.2} hrs\n{} {}\n",
        "ID:".label(),
        vehicle.id,
        "Plate Number:".label(),
        vehicle.plate,
        "Type:".label(),
        vehicle.vehicle_type,
        "Duration:".label(),
        vehicle.duration_hours,
        "Charge:".label(),
        format_money(vehicle.charge),
    )
}

pub fn render_dashboard(summary: &DashboardSummary) -> String {
    let counts = &summary.count_by_type;
    format!(
        "\n{}\n{} {}\n{} {}\n{} {}\n{} {} | {} {} | {} {}\n",
        "==== Dashboard Summary ====".heading(),
        "Total Vehicles:".label(),
        summary.total,
        "Total Income:".label(),
        format_money(summary.total_charge),
        "Average Charge:".label(),
        format_money(summary.average_charge),
        "Cars:".label(),
        counts.car,
        "Bikes:".label(),
        counts.bike,
        "Trucks:".label(),
        counts.truck,
    )
}

pub fn render_load_summary(summary: &LoadSummary) -> String {
    if !summary.source_found {
        return format!("{}\n", "No existing data file found. Starting fresh.".warning());
    }

    let mut out = format!(
        "{}\n",
        format!("Data loaded from file: {} vehicle(s).", summary.loaded).success()
    );
    let skipped = summary.skipped_count();
    if skipped > 0 {
        out.push_str(&format!(
            "{}\n",
            format!("Skipped {} line(s) from the data file.", skipped).warning()
        ));
    }
    out
}

/// Dollar amount with two decimals
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}~", truncated)
    }
}
