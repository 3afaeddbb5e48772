//! Text rendering of engine metrics.

use std::fmt;

use engine_models::{
    models::engine::{EngineConfig, EngineMetrics, PowerPoint},
    support::units::EngineSpeed,
};
use uom::si::{
    area::square_centimeter, length::millimeter, power::horsepower,
    pressure::pound_force_per_square_inch, ratio::percent, ratio::ratio,
    torque::pound_force_foot, velocity::meter_per_second, volume::cubic_centimeter,
};

const LABEL_WIDTH: usize = 45;
const VALUE_WIDTH: usize = 11;

fn line(out: &mut String, label: &str, value: &str, unit: &str) {
    let text = format!("{label:<LABEL_WIDTH$} {value:>VALUE_WIDTH$} {unit}");
    out.push_str(text.trim_end());
    out.push('\n');
}

fn fixed(value: f64) -> String {
    format!("{value:.3}")
}

/// Labeled scalar results, one per line.
pub fn summary(config: &EngineConfig, metrics: &EngineMetrics) -> String {
    let geometry = &metrics.geometry;
    let last = &metrics.final_sample;
    let range = &metrics.horsepower_range;

    let mut out = String::new();
    line(
        &mut out,
        "Thermal Efficiency:",
        &fixed(metrics.thermal_efficiency.get::<percent>()),
        "%",
    );
    line(
        &mut out,
        "Displacement:",
        &fixed(geometry.displacement.get::<cubic_centimeter>()),
        "cc",
    );
    if config.cylinders > 1 {
        line(
            &mut out,
            "Total Displacement:",
            &fixed(metrics.total_displacement.get::<cubic_centimeter>()),
            "cc",
        );
    }
    line(
        &mut out,
        "Compression Ratio:",
        &fixed(config.dimensions.compression_ratio),
        "",
    );
    line(
        &mut out,
        "Clearance Volume:",
        &fixed(geometry.clearance_volume.get::<cubic_centimeter>()),
        "cc",
    );
    line(
        &mut out,
        "Cylinder Volume:",
        &fixed(geometry.cylinder_volume.get::<cubic_centimeter>()),
        "cc",
    );
    line(
        &mut out,
        "Piston Crown Surface Area:",
        &fixed(geometry.piston_area.get::<square_centimeter>()),
        "cm^2",
    );
    line(
        &mut out,
        "Engine Configuration:",
        &geometry.configuration.to_string(),
        "",
    );
    line(
        &mut out,
        "Mean Effective Pressure:",
        &fixed(last.mep.get::<pound_force_per_square_inch>()),
        "psi",
    );
    line(&mut out, "Engine RPM:", &fixed(last.rpm.rpm()), "rpm");
    line(
        &mut out,
        "Number of Cylinders:",
        &config.cylinders.to_string(),
        "",
    );
    line(
        &mut out,
        "Horsepower Range:",
        &fixed(range.min.get::<horsepower>()),
        "to",
    );
    line(&mut out, " ", &fixed(range.max.get::<horsepower>()), "HP");
    line(
        &mut out,
        "Torque:",
        &fixed(last.torque.get::<pound_force_foot>()),
        "ft-lb",
    );
    line(
        &mut out,
        "Bore Diameter:",
        &fixed(config.dimensions.bore.get::<millimeter>()),
        "mm",
    );
    line(
        &mut out,
        "Stroke Distance:",
        &fixed(config.dimensions.stroke.get::<millimeter>()),
        "mm",
    );
    line(
        &mut out,
        "Clearance Height:",
        &fixed(geometry.clearance_height.get::<millimeter>()),
        "mm",
    );
    out
}

/// A bordered text table with centered cells.
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }
        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        let border = |f: &mut fmt::Formatter<'_>| -> fmt::Result {
            f.write_str("+")?;
            for width in &widths {
                write!(f, "{}+", "-".repeat(width + 2))?;
            }
            writeln!(f)
        };
        let row = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            f.write_str("|")?;
            for (&width, cell) in widths.iter().zip(cells) {
                write!(f, " {cell:^width$} |")?;
            }
            writeln!(f)
        };

        border(f)?;
        row(f, &self.headers)?;
        border(f)?;
        for cells in &self.rows {
            row(f, cells)?;
        }
        border(f)
    }
}

fn rpm_headers(metrics: &EngineMetrics) -> Vec<String> {
    metrics
        .horsepower
        .rpm()
        .map(|rpm| format!("{:.0} RPM", rpm.rpm()))
        .collect()
}

/// Mean piston speed, geometry, performance, and horsepower tables.
pub fn tables(config: &EngineConfig, metrics: &EngineMetrics) -> String {
    let geometry = &metrics.geometry;
    let parameter_headers = || vec!["Parameter".to_owned(), "Value".to_owned(), "Unit".to_owned()];
    let entry = |name: &str, value: String, unit: &str| vec![name.to_owned(), value, unit.to_owned()];

    let mut speed = Table::new(rpm_headers(metrics));
    speed.row(
        metrics
            .mean_piston_speed
            .iter()
            .map(|sample| fixed(sample.value.get::<meter_per_second>()))
            .collect(),
    );

    let mut geometry_table = Table::new(parameter_headers());
    for cells in [
        entry("Engine Configuration", geometry.configuration.to_string(), ""),
        entry("Bore Diameter", fixed(config.dimensions.bore.get::<millimeter>()), "mm"),
        entry("Stroke Distance", fixed(config.dimensions.stroke.get::<millimeter>()), "mm"),
        entry("Compression Ratio", fixed(config.dimensions.compression_ratio), ""),
        entry("Displacement", fixed(geometry.displacement.get::<cubic_centimeter>()), "cc"),
        entry(
            "Total Displacement",
            fixed(metrics.total_displacement.get::<cubic_centimeter>()),
            "cc",
        ),
        entry("Clearance Volume", fixed(geometry.clearance_volume.get::<cubic_centimeter>()), "cc"),
        entry("Cylinder Volume", fixed(geometry.cylinder_volume.get::<cubic_centimeter>()), "cc"),
        entry("Bore-to-Stroke Ratio", fixed(geometry.bore_stroke_ratio.get::<ratio>()), ""),
        entry(
            "Piston Crown Surface Area",
            fixed(geometry.piston_area.get::<square_centimeter>()),
            "cm^2",
        ),
        entry("Clearance Height", fixed(geometry.clearance_height.get::<millimeter>()), "mm"),
    ] {
        geometry_table.row(cells);
    }

    let mut performance = Table::new(parameter_headers());
    performance.row(entry(
        "Thermal Efficiency",
        fixed(metrics.thermal_efficiency.get::<percent>()),
        "%",
    ));
    performance.row(entry("Number of Cylinders", config.cylinders.to_string(), ""));
    performance.row(entry("Cycle", config.cycle.to_string(), ""));

    let mut hp_headers = vec!["MEP (psi)".to_owned()];
    hp_headers.extend(rpm_headers(metrics));
    let mut hp = Table::new(hp_headers);
    for row in metrics.horsepower.rows() {
        let mut cells = vec![format!("{:.0}", row.mep.get::<pound_force_per_square_inch>())];
        cells.extend(
            row.samples
                .iter()
                .map(|sample| fixed(sample.value.get::<horsepower>())),
        );
        hp.row(cells);
    }

    format!(
        "\nMean Piston Speed Table (m/s)\n{speed}\
         \nGeometry Information\n{geometry_table}\
         \nPerformance Information\n{performance}\
         \nHorsepower Table\n{hp}"
    )
}

/// The speed found for a target horsepower.
pub fn target_power(point: &PowerPoint) -> String {
    let mut out = String::new();
    let label = format!(
        "RPM for {:.3} HP at {:.0} psi:",
        point.horsepower.get::<horsepower>(),
        point.mep.get::<pound_force_per_square_inch>()
    );
    line(&mut out, &label, &fixed(point.rpm.rpm()), "rpm");
    out
}
