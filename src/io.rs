// io.rs
// Export of sampled field maps. Streamlines, contours and charge markers are
// drawn by an external renderer; this module only writes the arrays it reads.

use crate::charge::Charge;
use crate::field::FieldMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!("Unknown export format: {}", name)),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Renderer-facing document: the sampled arrays plus the charge markers that
/// produced them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldMapData {
    pub scenario: String,
    pub map: FieldMap,
    pub charges: Vec<Charge>,
}

pub fn export_field_map(
    data: &FieldMapData,
    format: ExportFormat,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Json => serde_json::to_writer_pretty(&mut writer, data)?,
        ExportFormat::Csv => writer.write_all(export_csv(data).as_bytes())?,
    }
    writer.flush()?;
    Ok(())
}

fn export_csv(data: &FieldMapData) -> String {
    let grid = &data.map.grid;
    let mut content = String::new();

    // Header
    content.push_str(&format!("# Scenario: {}\n", data.scenario));
    content.push_str(&format!(
        "# Grid: {}x{} over x [{}, {}] y [{}, {}]\n",
        grid.nx, grid.ny, grid.xmin, grid.xmax, grid.ymin, grid.ymax
    ));
    for c in &data.charges {
        content.push_str(&format!(
            "# Charge: {} q={:e} C at ({}, {})\n",
            if c.label.is_empty() { "unnamed" } else { c.label.as_str() },
            c.q,
            c.pos.x,
            c.pos.y
        ));
    }
    content.push_str("x,y,ex,ey,potential\n");

    // One row per lattice point, same order as the flattened arrays
    let points = grid.points();
    for (i, p) in points.iter().enumerate() {
        content.push_str(&format!(
            "{},{},{:e},{:e},{:e}\n",
            p.x, p.y, data.map.ex[i], data.map.ey[i], data.map.potential[i]
        ));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::scenario::Scenario;

    #[test]
    fn format_names_parse() {
        assert_eq!(ExportFormat::from_name("json"), Ok(ExportFormat::Json));
        assert_eq!(ExportFormat::from_name("csv"), Ok(ExportFormat::Csv));
        assert!(ExportFormat::from_name("vtk").is_err());
    }

    #[test]
    fn csv_has_one_row_per_lattice_point() {
        let charges = Scenario::Dipole.build_charges(1.0);
        let grid = Grid::new(-1.0, 1.0, -1.0, 1.0, 5, 4).unwrap();
        let data = FieldMapData {
            scenario: Scenario::Dipole.name().to_string(),
            map: FieldMap::sample(&charges, &grid),
            charges,
        };

        let csv = export_csv(&data);
        let lines: Vec<&str> = csv.lines().collect();
        let header_lines = lines.iter().filter(|l| l.starts_with('#')).count();
        // scenario + grid + one line per charge
        assert_eq!(header_lines, 2 + data.charges.len());
        assert_eq!(lines.len(), header_lines + 1 + grid.len());
        assert_eq!(lines[header_lines], "x,y,ex,ey,potential");
    }
}
