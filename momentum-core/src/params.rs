//! Demo parameters, defaults, and YAML presets
//!
//! Each demo reads a plain parameter struct. Values arrive from sliders or a
//! preset file and are validated before a scene is built from them.

use crate::error::{finite, non_negative, positive, positive_mass, ConfigError, ParamError};
use serde::Deserialize;
use std::path::Path;

/// Seconds advanced per animation frame
pub const TIME_STEP: f64 = 0.05;

/// Maximum number of points kept in any trail
pub const TRAIL_CAPACITY: usize = 100;

/// Pixels per meter for the 1D collision demos
pub const SCALE_1D: f64 = 50.0;
/// Pixels per meter for the 2D collision and explosion demos
pub const SCALE_2D: f64 = 15.0;
/// Pixels per meter for the rocket demo
pub const SCALE_ROCKET: f64 = 20.0;

/// Wall inset for the 1D collision demos
pub const PADDING_1D: f64 = 50.0;
/// Wall inset for the 2D collision and explosion demos
pub const PADDING_2D: f64 = 20.0;

/// Fraction of velocity a fragment keeps after hitting a wall
pub const FRAGMENT_BOUNCE: f64 = 0.9;

/// Gravitational acceleration acting on the rocket (m/s²)
pub const GRAVITY: f64 = 9.8;

/// Upper bound on the number of explosion fragments
pub const MAX_FRAGMENTS: usize = 20;

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check that a border of `padding` pixels still leaves an interior
    pub fn validate(&self, padding: f64) -> Result<(), ParamError> {
        positive("canvas width", self.width)?;
        positive("canvas height", self.height)?;
        if self.width <= 2.0 * padding || self.height <= 2.0 * padding {
            return Err(ParamError::CanvasTooSmall {
                width: self.width,
                height: self.height,
                padding,
            });
        }
        Ok(())
    }
}

/// Inputs for the two head-on collision demos
///
/// The elastic and inelastic demos have different defaults, so a preset
/// section for either must name all four fields.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Collision1dParams {
    pub mass1: f64,
    pub velocity1: f64,
    pub mass2: f64,
    pub velocity2: f64,
}

impl Collision1dParams {
    pub fn elastic_default() -> Self {
        Self {
            mass1: 2.0,
            velocity1: 3.0,
            mass2: 1.0,
            velocity2: -2.0,
        }
    }

    pub fn inelastic_default() -> Self {
        Self {
            mass1: 2.0,
            velocity1: 4.0,
            mass2: 3.0,
            velocity2: -1.0,
        }
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        positive_mass("mass1", self.mass1)?;
        positive_mass("mass2", self.mass2)?;
        finite("velocity1", self.velocity1)?;
        finite("velocity2", self.velocity2)?;
        Ok(())
    }
}

impl Default for Collision1dParams {
    fn default() -> Self {
        Self::elastic_default()
    }
}

/// Inputs for the glancing 2D collision demo; angles are in degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Collision2dParams {
    pub mass1: f64,
    pub speed1: f64,
    pub angle1: f64,
    pub mass2: f64,
    pub speed2: f64,
    pub angle2: f64,
}

impl Default for Collision2dParams {
    fn default() -> Self {
        Self {
            mass1: 2.0,
            speed1: 5.0,
            angle1: 10.0,
            mass2: 3.0,
            speed2: 3.0,
            angle2: 180.0,
        }
    }
}

impl Collision2dParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        positive_mass("mass1", self.mass1)?;
        positive_mass("mass2", self.mass2)?;
        finite("speed1", self.speed1)?;
        finite("speed2", self.speed2)?;
        finite("angle1", self.angle1)?;
        finite("angle2", self.angle2)?;
        Ok(())
    }
}

/// Inputs for the explosion demo
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplosionParams {
    pub mass: f64,
    pub fragments: usize,
    /// Impulse handed to every fragment but the last (N·s)
    pub force: f64,
    /// Fixed seed for the fragment draw; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for ExplosionParams {
    fn default() -> Self {
        Self {
            mass: 10.0,
            fragments: 5,
            force: 10.0,
            seed: None,
        }
    }
}

impl ExplosionParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        positive_mass("mass", self.mass)?;
        positive("force", self.force)?;
        if self.fragments == 0 || self.fragments > MAX_FRAGMENTS {
            return Err(ParamError::FragmentCount {
                count: self.fragments,
                max: MAX_FRAGMENTS,
            });
        }
        Ok(())
    }
}

/// Inputs for the rocket demo
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RocketParams {
    pub dry_mass: f64,
    pub propellant_mass: f64,
    /// Speed of expelled propellant relative to the rocket (m/s)
    pub exhaust_velocity: f64,
    /// Propellant consumed per second (kg/s)
    pub burn_rate: f64,
    pub gravity: f64,
    pub seed: Option<u64>,
}

impl Default for RocketParams {
    fn default() -> Self {
        Self {
            dry_mass: 50.0,
            propellant_mass: 100.0,
            exhaust_velocity: 400.0,
            burn_rate: 5.0,
            gravity: GRAVITY,
            seed: None,
        }
    }
}

impl RocketParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        positive_mass("dry_mass", self.dry_mass)?;
        non_negative("propellant_mass", self.propellant_mass)?;
        positive("exhaust_velocity", self.exhaust_velocity)?;
        positive("burn_rate", self.burn_rate)?;
        non_negative("gravity", self.gravity)?;
        Ok(())
    }

    pub fn initial_mass(&self) -> f64 {
        self.dry_mass + self.propellant_mass
    }
}

/// Full preset: every demo's parameters plus the canvas
///
/// Missing sections and fields fall back to their defaults, so a preset
/// only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub canvas: Canvas,
    pub elastic_1d: Collision1dParams,
    pub inelastic_1d: Collision1dParams,
    pub collision_2d: Collision2dParams,
    pub explosion: ExplosionParams,
    pub rocket: RocketParams,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            elastic_1d: Collision1dParams::elastic_default(),
            inelastic_1d: Collision1dParams::inelastic_default(),
            collision_2d: Collision2dParams::default(),
            explosion: ExplosionParams::default(),
            rocket: RocketParams::default(),
        }
    }
}

impl DemoConfig {
    /// Parse and validate a YAML preset
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        self.canvas.validate(PADDING_1D.max(PADDING_2D))?;
        self.elastic_1d.validate()?;
        self.inelastic_1d.validate()?;
        self.collision_2d.validate()?;
        self.explosion.validate()?;
        self.rocket.validate()?;
        Ok(())
    }
}
