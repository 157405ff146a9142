// scenario.rs
// Built-in charge configurations for the educational scenarios, plus the
// custom scenario fed from the configuration file.

use crate::charge::Charge;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Charges come from the configuration file instead of a preset.
    Custom,
    /// Charged capacitor plates of a RAM cell.
    MemoryCell,
    /// Source, drain and gate of a MOSFET.
    Mosfet,
    /// Parallel signal lines over a ground plane.
    DataBus,
    /// Plate pair whose polarity alternates to steer the liquid crystal.
    LcdPixel,
    /// Plain opposite-charge pair.
    Dipole,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Custom,
        Scenario::MemoryCell,
        Scenario::Mosfet,
        Scenario::DataBus,
        Scenario::LcdPixel,
        Scenario::Dipole,
    ];

    pub fn from_name(name: &str) -> Result<Scenario, String> {
        match name {
            "custom" => Ok(Scenario::Custom),
            "memory-cell" | "memory_cell" => Ok(Scenario::MemoryCell),
            "mosfet" => Ok(Scenario::Mosfet),
            "data-bus" | "data_bus" => Ok(Scenario::DataBus),
            "lcd-pixel" | "lcd_pixel" | "lcd" => Ok(Scenario::LcdPixel),
            "dipole" => Ok(Scenario::Dipole),
            _ => Err(format!("Unknown scenario: {}", name)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Custom => "custom",
            Scenario::MemoryCell => "memory-cell",
            Scenario::Mosfet => "mosfet",
            Scenario::DataBus => "data-bus",
            Scenario::LcdPixel => "lcd-pixel",
            Scenario::Dipole => "dipole",
        }
    }

    /// One-line caption shown next to the exported map.
    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Custom => "Charges taken from the configuration file",
            Scenario::MemoryCell => {
                "Field between the two plates of a charged memory-cell capacitor"
            }
            Scenario::Mosfet => "Field between the source, drain and gate of a MOSFET",
            Scenario::DataBus => "Three charged signal lines over a ground plane",
            Scenario::LcdPixel => {
                "Alternating plate field that reorients the liquid crystal of a pixel"
            }
            Scenario::Dipole => "Opposite charge pair, the textbook dipole",
        }
    }

    /// Build the charge set for this scenario. `polarity` is the explicit sign
    /// multiplier that replaces the session-wide toggle of the old UI; only
    /// the LCD plates react to it. Every call constructs fresh charges, so
    /// flipping polarity never mutates an existing set. The custom scenario
    /// returns no charges here; those come from the configuration file.
    pub fn build_charges(&self, polarity: f64) -> Vec<Charge> {
        match self {
            Scenario::Custom => Vec::new(),
            Scenario::MemoryCell => vec![
                Charge::with_label(2.0e-9, 0.0, 1.0, "upper plate (+)"),
                Charge::with_label(-2.0e-9, 0.0, -1.0, "lower plate (-)"),
            ],
            Scenario::Mosfet => vec![
                Charge::with_label(2.0e-9, -0.8, 0.0, "source (+)"),
                Charge::with_label(-2.0e-9, 0.8, 0.0, "drain (-)"),
                Charge::with_label(1.0e-9, 0.0, 0.8, "gate (G)"),
            ],
            Scenario::DataBus => vec![
                Charge::with_label(1.0e-9, -1.0, 0.5, "line 1 (+)"),
                Charge::with_label(1.0e-9, 0.0, 0.5, "line 2 (+)"),
                Charge::with_label(1.0e-9, 1.0, 0.5, "line 3 (+)"),
                Charge::with_label(-1.0e-9, 0.0, -0.5, "ground plane (-)"),
            ],
            Scenario::LcdPixel => vec![
                Charge::with_label(2.0e-9 * polarity, 0.0, 1.0, "upper plate"),
                Charge::with_label(-2.0e-9 * polarity, 0.0, -1.0, "lower plate"),
            ],
            Scenario::Dipole => vec![
                Charge::with_label(2.0e-9, -0.5, 0.0, "q+"),
                Charge::with_label(-2.0e-9, 0.5, 0.0, "q-"),
            ],
        }
    }
}
