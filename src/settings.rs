//! everything that would otherwise be a global constant (colors, sample counts, visible panels).
//! handed to the figures (and through them to the renderer) instead.

use std::{
    f64::consts::PI,
    fs,
    io::Write,
    path::Path,
};

use egui::Color32;

use crate::{
    dance::{DEFAULT_SAMPLE_COUNT, DEFAULT_STEP_HINT, Ratio},
    error::SettingsError,
    figure::{ChordStyle, Panel},
    rand::Lcg,
};

pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);

pub const DEFAULT_PALETTE: [Color32; 7] = [
    Color32::from_rgb(0x22, 0x7c, 0x9d), //cerulean
    Color32::from_rgb(0x17, 0xc3, 0xb2), //turquoise
    Color32::from_rgb(0xc6, 0x7b, 0x35), //copper
    Color32::from_rgb(0xa8, 0x77, 0xba), //lavender
    Color32::from_rgb(0xff, 0xcb, 0x77), //apricot
    Color32::from_rgb(0x47, 0x86, 0x5b), //fern
    Color32::from_rgb(0xfe, 0x6d, 0x73), //salmon
];

/// the format settings and figures are written in
pub fn pretty_ron<T: serde::Serialize>(value: &T) -> Result<String, ron::Error> {
    let config = ron::ser::PrettyConfig::new()
        .compact_arrays(true)
        .new_line("\n".into())
        .indentor("\t".into());
    ron::ser::to_string_pretty(value, config)
}

/// how chords of a planet dance are presented
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize, strum_macros::EnumIter)]
pub enum ChordStyleChoice {
    /// full lines if the windings have opposite signs, segments otherwise
    BySign,
    AlwaysSegment,
    AlwaysExtended,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PanelVisibility {
    pub planet_dance: bool,
    pub torus_loops: bool,
    pub epicycloid: bool,
    pub mod_table: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            planet_dance: true,
            torus_loops: true,
            epicycloid: true,
            mod_table: true,
        }
    }
}

impl PanelVisibility {
    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::PlanetDance => self.planet_dance,
            Panel::TorusLoops => self.torus_loops,
            Panel::Epicycloid => self.epicycloid,
            Panel::ModTable => self.mod_table,
        }
    }

    pub fn set(&mut self, panel: Panel, visible: bool) {
        let flag = match panel {
            Panel::PlanetDance => &mut self.planet_dance,
            Panel::TorusLoops => &mut self.torus_loops,
            Panel::Epicycloid => &mut self.epicycloid,
            Panel::ModTable => &mut self.mod_table,
        };
        *flag = visible;
    }
}

#[derive(Clone, PartialEq, Debug, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Settings {
    /// range of the epicycloid parameter
    pub period: f64,
    /// sample count of the "continuous" planet dance
    pub dance_samples: usize,
    /// base step of the epicycloid, see [`crate::dance::epicycloid_curve`]
    pub epicycloid_step: f64,
    /// chord sets larger than this are drawn with `dense_chord_opacity`
    pub dense_chord_threshold: usize,
    pub dense_chord_opacity: f32,
    pub chord_style: ChordStyleChoice,
    pub palette: Vec<Color32>,
    pub sample_color: Color32,
    pub panels: PanelVisibility,
    /// seed for knots without an explicit color
    pub color_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            period: 20.0 * PI,
            dance_samples: DEFAULT_SAMPLE_COUNT,
            epicycloid_step: DEFAULT_STEP_HINT,
            dense_chord_threshold: 800,
            dense_chord_opacity: 0.05,
            chord_style: ChordStyleChoice::BySign,
            palette: DEFAULT_PALETTE.to_vec(),
            sample_color: BLACK,
            panels: PanelVisibility::default(),
            color_seed: 0x5eed,
        }
    }
}

impl Settings {
    pub fn chord_style(&self, ratio: Ratio) -> ChordStyle {
        match self.chord_style {
            ChordStyleChoice::BySign if ratio.opposite_signs() => ChordStyle::Extended,
            ChordStyleChoice::BySign | ChordStyleChoice::AlwaysSegment => ChordStyle::Segment,
            ChordStyleChoice::AlwaysExtended => ChordStyle::Extended,
        }
    }

    pub fn chord_opacity(&self, nr_chords: usize) -> f32 {
        if nr_chords > self.dense_chord_threshold {
            self.dense_chord_opacity
        } else {
            1.0
        }
    }

    /// palette entry `i`, wrapping around. black if the palette is empty.
    pub fn palette_color(&self, i: usize) -> Color32 {
        if self.palette.is_empty() {
            return BLACK;
        }
        self.palette[i % self.palette.len()]
    }

    pub(crate) fn color_rng(&self) -> Lcg {
        Lcg::new(self.color_seed)
    }

    pub(crate) fn random_color(&self, rng: &mut Lcg) -> Color32 {
        rng.pick(&self.palette).copied().unwrap_or(BLACK)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let file_str = fs::read_to_string(path)?;
        Ok(ron::from_str(&file_str)?)
    }

    /// falls back to the defaults if the file is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("using default settings, could not load {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(pretty_ron(self)?)
    }

    pub fn store(&self, path: &Path) -> Result<(), SettingsError> {
        let as_str = self.to_ron()?;
        let mut file = fs::File::create(path)?;
        file.write_all(as_str.as_bytes())?;
        log::debug!("stored settings in {}", path.display());
        Ok(())
    }
}
