#![warn(clippy::all, rust_2018_idioms)]

/// the math side of the program: chords, torus knots, epicycloids
pub mod dance;

/// the pictures, as data for a renderer
pub mod figure;
pub use figure::{Correspondence, Parameters};

/// colors, sample counts and visible panels, loaded from RON
pub mod settings;
pub use settings::Settings;

pub mod error;
pub use error::{DanceError, DanceResult, InvalidInput};

/// general purpose 2d types
pub mod geo;

mod rand;
