use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Scenario file for `legato run`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seconds per simulated step
    #[serde(default = "default_timestep")]
    pub timestep: f64,

    /// Maximum acceleration magnitude shared by all axes
    #[serde(default = "default_acceleration")]
    pub acceleration: f64,

    /// Step budget per axis
    #[serde(default = "default_steps")]
    pub steps: u32,

    /// Axes to simulate
    #[serde(default)]
    pub axes: Vec<AxisConfig>,
}

/// One controlled axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Name used in log output
    pub name: String,

    /// Starting position
    #[serde(default)]
    pub start: f64,

    /// Target position
    pub target: f64,

    /// Starting velocity
    #[serde(default)]
    pub velocity: f64,

    /// Units per second the target drifts during the run; 0 keeps it
    /// stationary
    #[serde(default)]
    pub target_rate: f64,
}

fn default_timestep() -> f64 {
    1.0 / 60.0
}

fn default_acceleration() -> f64 {
    10.0
}

fn default_steps() -> u32 {
    600
}

impl Config {
    /// Load a scenario from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;

        // Try to determine format from extension
        let extension = path.extension().and_then(|s| s.to_str());

        match extension {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => {
                // Try TOML first (preferred), fall back to JSON
                Self::from_toml(&content).or_else(|_| Self::from_json(&content))
            }
        }
    }

    /// Parse a scenario from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse scenario as TOML")
    }

    /// Parse a scenario from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse scenario as JSON")
    }

    /// Validate the scenario
    pub fn validate(&self) -> Result<()> {
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            anyhow::bail!("timestep must be positive and finite");
        }
        if !(self.acceleration > 0.0 && self.acceleration.is_finite()) {
            anyhow::bail!("acceleration must be positive and finite");
        }
        if self.steps == 0 {
            anyhow::bail!("steps must be positive");
        }
        if self.axes.is_empty() {
            anyhow::bail!("scenario must list at least one axis");
        }
        for axis in &self.axes {
            if axis.name.is_empty() {
                anyhow::bail!("axis names cannot be empty");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_toml() {
        let toml = r#"
timestep = 0.01
acceleration = 5.0

[[axes]]
name = "x"
target = 10.0

[[axes]]
name = "y"
start = 3.0
target = -2.0
velocity = 1.0
"#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.timestep, 0.01);
        assert_eq!(config.acceleration, 5.0);
        assert_eq!(config.axes.len(), 2);
        assert_eq!(config.axes[1].start, 3.0);
        assert_eq!(config.axes[0].velocity, 0.0);
        config.validate().unwrap();
    }

    #[test]
    fn parse_json() {
        let json = r#"{
            "acceleration": 2.5,
            "axes": [
                { "name": "x", "target": 1.0, "target_rate": 0.5 }
            ]
        }"#;

        let config = Config::from_json(json).unwrap();
        assert_eq!(config.acceleration, 2.5);
        assert_eq!(config.axes[0].target_rate, 0.5);
        config.validate().unwrap();
    }

    #[test]
    fn defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.timestep, 1.0 / 60.0);
        assert_eq!(config.acceleration, 10.0);
        assert_eq!(config.steps, 600);
        assert!(config.axes.is_empty());
    }

    #[test]
    fn rejects_bad_scenarios() {
        let mut config = Config::from_toml("[[axes]]\nname = \"x\"\ntarget = 1.0").unwrap();
        config.validate().unwrap();

        config.timestep = 0.0;
        assert!(config.validate().is_err());
        config.timestep = 0.01;

        config.acceleration = -1.0;
        assert!(config.validate().is_err());
        config.acceleration = 1.0;

        config.steps = 0;
        assert!(config.validate().is_err());
        config.steps = 100;

        config.axes[0].name.clear();
        assert!(config.validate().is_err());

        config.axes.clear();
        assert!(config.validate().is_err());
    }
}
