//! Scene configuration resolved ahead of curve generation.
//!
//! The rendering shell owns the transport (URL parameters or equivalent) and
//! hands the recognized options here as plain key/value pairs. The crate
//! only consumes the result as explicit inputs: iteration count, step size
//! and start position. Display toggles are carried through untouched for the
//! shell to act on.

use crate::grammar::{Grammar, expand};
use crate::interpreter::PathInterpreter;
use crate::CurveError;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Color theme selection, resolved by the rendering shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl FromStr for Theme {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CurveError::InvalidParameter(format!(
                "\"theme\": \"{other}\""
            ))),
        }
    }
}

/// The recognized scene options.
///
/// Plain data with serde derive; nothing here reaches into ambient state.
/// `iterations` is stored as given and clamped into `1..=4` wherever a
/// derived value is computed, since rewrite cost grows exponentially.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub theme: Theme,
    /// Grammar rewrite passes, effective range `1..=4`.
    pub iterations: u32,
    pub no_zoom: bool,
    pub auto_rotate: bool,
    pub randomize_start_position: bool,
    pub extra_lighting: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            iterations: 3,
            no_zoom: false,
            auto_rotate: false,
            randomize_start_position: false,
            extra_lighting: false,
        }
    }
}

impl SceneConfig {
    /// Builds a configuration from key/value pairs.
    ///
    /// Recognized keys are `theme`, `iterations`, `noZoom`, `autoRotate`,
    /// `randomizeStartPosition` and `extraLighting`; unknown keys are
    /// ignored so a URL query string can be fed through wholesale. A value
    /// that fails to parse is [`CurveError::InvalidParameter`].
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            match key {
                "theme" => config.theme = value.parse()?,
                "iterations" => config.iterations = parse_value::<u32>(key, value)?.clamp(1, 4),
                "noZoom" => config.no_zoom = parse_value(key, value)?,
                "autoRotate" => config.auto_rotate = parse_value(key, value)?,
                "randomizeStartPosition" => {
                    config.randomize_start_position = parse_value(key, value)?;
                }
                "extraLighting" => config.extra_lighting = parse_value(key, value)?,
                _ => {}
            }
        }
        debug!(?config, "resolved scene configuration");
        Ok(config)
    }

    fn clamped_iterations(&self) -> u32 {
        self.iterations.clamp(1, 4)
    }

    /// Lattice step for the configured detail level: `10` for one rewrite
    /// pass, `10 / (n - 1)` above that so deeper curves stay the same size.
    pub fn step_size(&self) -> f32 {
        let n = self.clamped_iterations();
        if n > 1 { 10.0 / (n - 1) as f32 } else { 10.0 }
    }

    /// Canonical start corner: `(-d, -d, d)` with
    /// `d = step_size · (2^n - 1)`, the extent of the finished curve, so
    /// the traced cube sits against the origin.
    pub fn start_position(&self) -> Vec3 {
        let n = self.clamped_iterations();
        let d = self.step_size() * ((1u32 << n) - 1) as f32;
        Vec3::new(-d, -d, d)
    }

    /// Generates the Hilbert point path for this configuration from the
    /// canonical start position.
    pub fn curve_path(&self) -> Result<Vec<Vec3>, CurveError> {
        self.curve_path_from(self.start_position())
    }

    /// Generates the Hilbert point path from an explicit start position.
    ///
    /// This is the hook for `randomize_start_position`: the shell that owns
    /// ambient entropy picks the start and the generation itself stays
    /// deterministic.
    pub fn curve_path_from(&self, start: Vec3) -> Result<Vec<Vec3>, CurveError> {
        let grammar = Grammar::hilbert_3d();
        let sentence = expand(&grammar, self.clamped_iterations())?;
        let interpreter = PathInterpreter::for_grammar(&grammar);
        Ok(interpreter.trace_path(self.step_size(), &sentence, start))
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, CurveError> {
    value.parse().map_err(|_| {
        CurveError::InvalidParameter(format!("\"{key}\": \"{value}\""))
    })
}
