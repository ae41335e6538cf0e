use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Policy for sprites whose placement rectangle exceeds canvas bounds.
///
/// The shelf packer never checks that a wrapped row still fits vertically,
/// and a sprite wider than the canvas is still placed at the row start; what
/// happens to such placements is governed by this policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Record the placement as computed and clip drawing at the canvas edges.
    Clip,
    /// Fail the pack run with `OutOfSpace`.
    Error,
}

impl FromStr for OverflowPolicy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clip" => Ok(Self::Clip),
            "error" => Ok(Self::Error),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// What to do when a placement falls outside the canvas.
    #[serde(default = "default_overflow_policy")]
    pub overflow_policy: OverflowPolicy,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1024,
            canvas_height: 1024,
            overflow_policy: default_overflow_policy(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::SpritePackError;

        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(SpritePackError::InvalidDimensions {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_overflow_policy() -> OverflowPolicy {
    OverflowPolicy::Clip
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn with_canvas_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.canvas_width = w;
        self.cfg.canvas_height = h;
        self
    }
    pub fn overflow_policy(mut self, v: OverflowPolicy) -> Self {
        self.cfg.overflow_policy = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
