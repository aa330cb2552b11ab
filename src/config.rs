use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::graph::ParseMode;
use crate::pricing::Carrier;
use crate::{Error, Result};

/// Allowed number of cities in a cost matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLimits {
    pub min_nodes: usize,
    /// `None` disables the upper bound
    pub max_nodes: Option<usize>,
}

impl Default for NodeLimits {
    fn default() -> Self {
        Self {
            min_nodes: 2,
            max_nodes: Some(10),
        }
    }
}

impl NodeLimits {
    /// At least two cities, no upper bound
    pub fn unbounded() -> Self {
        Self {
            min_nodes: 2,
            max_nodes: None,
        }
    }

    pub fn check(&self, count: usize) -> Result<()> {
        let min = self.min_nodes.max(2);
        let max = self.max_nodes.unwrap_or(usize::MAX);
        if count < min || count > max {
            return Err(Error::NodeCountOutOfRange { count, min, max });
        }
        Ok(())
    }
}

/// Configuration for planning queries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub parse_mode: ParseMode,
    pub limits: NodeLimits,
    /// Carriers in configuration order; ranking ties go to the earlier one
    pub carriers: Vec<Carrier>,
    /// Price carriers on the rayon thread pool
    pub parallel_pricing: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::Lenient,
            limits: NodeLimits::default(),
            carriers: default_carriers(),
            parallel_pricing: true,
        }
    }
}

impl PlannerConfig {
    /// Parses a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlannerConfig =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Checks every carrier's tariff
    pub fn validate(&self) -> Result<()> {
        for carrier in &self.carriers {
            carrier.validate()?;
        }
        Ok(())
    }

    /// Returns the carriers named in `names`, in configuration order.
    /// An empty selection means every configured carrier.
    pub fn select_carriers<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Carrier>> {
        if names.is_empty() {
            return Ok(self.carriers.clone());
        }

        if let Some(unknown) = names
            .iter()
            .map(|name| name.as_ref())
            .find(|name| !self.carriers.iter().any(|c| c.name == *name))
        {
            return Err(Error::UnknownCarrier(unknown.to_string()));
        }

        Ok(self
            .carriers
            .iter()
            .filter(|c| names.iter().any(|name| name.as_ref() == c.name))
            .cloned()
            .collect())
    }
}

/// The carriers the planner ships with
pub fn default_carriers() -> Vec<Carrier> {
    vec![
        Carrier::new_unchecked("IndiGo", 0.05, 200.0),
        Carrier::new_unchecked("Air India", 0.12, 150.0),
        Carrier::new_unchecked("SpiceJet", 0.08, 180.0),
        Carrier::new_unchecked("Vistara", 0.10, 250.0),
        Carrier::new_unchecked("GoAir", 0.06, 175.0),
    ]
}
