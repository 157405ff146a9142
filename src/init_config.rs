// init_config.rs
// Handles loading and parsing the run configuration from field_config.toml

use crate::charge::Charge;
use crate::config;
use crate::grid::Grid;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
pub struct InitConfig {
    pub scenario: Option<ScenarioConfig>,
    pub grid: Option<GridConfig>,
    #[serde(default)]
    pub charges: Vec<ChargeConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// Optional preset name. Falls back to the custom scenario when omitted.
    pub preset: Option<String>,
    /// Optional polarity multiplier for the LCD plates.
    pub polarity: Option<f64>,
}

impl ScenarioConfig {
    pub fn to_scenario(&self) -> Result<Scenario, String> {
        match &self.preset {
            Some(name) => Scenario::from_name(name),
            None => Ok(Scenario::Custom),
        }
    }

    pub fn polarity_multiplier(&self) -> f64 {
        self.polarity.unwrap_or(config::DEFAULT_POLARITY)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GridConfig {
    /// Optional evaluation window bounds. Fall back to the defaults when omitted.
    pub xmin: Option<f64>,
    pub xmax: Option<f64>,
    pub ymin: Option<f64>,
    pub ymax: Option<f64>,
    /// Optional lattice resolution
    pub nx: Option<usize>,
    pub ny: Option<usize>,
}

impl GridConfig {
    /// Return the evaluation grid, using the global defaults for omitted values.
    pub fn to_grid(&self) -> Result<Grid, String> {
        Grid::new(
            self.xmin.unwrap_or(config::DEFAULT_XMIN),
            self.xmax.unwrap_or(config::DEFAULT_XMAX),
            self.ymin.unwrap_or(config::DEFAULT_YMIN),
            self.ymax.unwrap_or(config::DEFAULT_YMAX),
            self.nx.unwrap_or(config::DEFAULT_NX),
            self.ny.unwrap_or(config::DEFAULT_NY),
        )
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChargeConfig {
    pub q: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub label: String,
}

impl ChargeConfig {
    pub fn to_charge(&self) -> Charge {
        Charge::with_label(self.q, self.x, self.y, self.label.clone())
    }
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file("field_config.toml")
    }

    pub fn to_charges(&self) -> Vec<Charge> {
        self.charges.iter().map(|c| c.to_charge()).collect()
    }
}
