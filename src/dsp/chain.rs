//! Transform chain (recipes)
//!
//! Steps run in order (index 0 first); each step consumes the previous
//! step's output. A chain can be stored as JSON:
//!
//! ```json
//! { "steps": [ { "type": "reverse" },
//!              { "type": "echo", "num_echos": 2, "delay_secs": 0.2, "scale": 0.4 } ] }
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::Transform;
use crate::engine::Sound;
use crate::error::{LabError, Result};

/// Ordered list of transforms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformChain {
    steps: Vec<Transform>,
}

impl TransformChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step to the end of the chain
    pub fn push(&mut self, step: Transform) {
        self.steps.push(step);
    }

    /// Parse a chain from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the chain to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a recipe file.
    ///
    /// Relative `mix` paths are resolved against the recipe's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LabError::FileNotFound {
                path: path.display().to_string(),
                source: Some(e),
            },
            _ => LabError::Io(e),
        })?;

        let mut chain = Self::from_json(&text)?;
        if let Some(base) = path.parent() {
            for step in &mut chain.steps {
                if let Transform::Mix { with, .. } = step {
                    if with.is_relative() {
                        *with = base.join(&*with);
                    }
                }
            }
        }

        info!("Loaded recipe {} ({} steps)", path.display(), chain.len());
        Ok(chain)
    }

    /// Run every step in order
    pub fn apply(&self, sound: &Sound) -> Result<Sound> {
        let mut current = sound.clone();
        for (i, step) in self.steps.iter().enumerate() {
            current = step.apply(&current)?;
            debug!(
                "Step {} ({}): {} frames",
                i,
                step.transform_type(),
                current.len()
            );
        }
        Ok(current)
    }

    /// Get the number of steps in the chain
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over steps
    pub fn iter(&self) -> impl Iterator<Item = &Transform> {
        self.steps.iter()
    }
}

impl FromIterator<Transform> for TransformChain {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
