//! the pictures the program shows, assembled from the geometry engine.
//! nothing in here draws: every figure only carries the data and the presentation hints
//! (chord style, opacity, colors) a renderer needs.

use egui::Color32;

use crate::{
    dance::{self, Chord, MAX_SAMPLES, Ratio},
    error::{DanceError, DanceResult, InvalidInput},
    geo::{Pos2, Segment},
    settings::Settings,
};

/// the four pictures of the correspondence view, in reading order of the 2x2 grid
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize, strum_macros::EnumIter)]
pub enum Panel {
    PlanetDance,
    TorusLoops,
    Epicycloid,
    ModTable,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize)]
pub enum ChordStyle {
    /// only the part inside the circle
    Segment,
    /// the whole line through both endpoints
    Extended,
}

/// sample counts computed from user input have to stay allocatable
pub fn checked_count(requested: u64) -> DanceResult<usize> {
    if requested > MAX_SAMPLES {
        return Err(InvalidInput::TooManySamples {
            requested,
            limit: MAX_SAMPLES,
        }
        .into());
    }
    Ok(requested as usize)
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct ChordSet {
    pub chords: Vec<Chord>,
    pub style: ChordStyle,
    pub opacity: f32,
}

impl ChordSet {
    pub fn new(chords: Vec<Chord>, style: ChordStyle, settings: &Settings) -> Self {
        let opacity = settings.chord_opacity(chords.len());
        Self { chords, style, opacity }
    }

    /// the chords a renderer actually draws
    pub fn drawable(&self) -> impl Iterator<Item = &Chord> + '_ {
        self.chords.iter().filter(|c| !c.is_degenerate())
    }

    fn planet_dance(ratio: Ratio, samples: usize, settings: &Settings) -> Self {
        let chords = dance::planet_dance_chords(ratio.a(), ratio.b(), samples);
        Self::new(chords, settings.chord_style(ratio), settings)
    }
}

/// all strands of one torus knot in the unit square
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct Strands {
    pub ratio: Ratio,
    pub segments: Vec<Segment>,
    pub color: Color32,
}

impl Strands {
    pub fn new(ratio: Ratio, color: Color32) -> DanceResult<Self> {
        // one anchor per k up to the larger winding
        checked_count(ratio.a().unsigned_abs().max(ratio.b().unsigned_abs()))?;
        let segments = dance::torus_knot_strand_lines(ratio.a(), ratio.b())?;
        Ok(Self { ratio, segments, color })
    }
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct SamplePoints {
    pub points: Vec<Pos2>,
    pub color: Color32,
}

impl SamplePoints {
    pub fn new(ratio: Ratio, count: u64, color: Color32) -> DanceResult<Self> {
        let count = checked_count(count)?;
        let points = dance::torus_knot_sample_points(ratio.a(), ratio.b(), count);
        Ok(Self { points, color })
    }
}

#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct Curve {
    pub points: Vec<Pos2>,
    pub color: Color32,
}

impl Curve {
    pub fn epicycloid(ratio: Ratio, settings: &Settings) -> DanceResult<Self> {
        let points = dance::epicycloid_curve(
            ratio.a(),
            ratio.b(),
            settings.period,
            settings.epicycloid_step,
        )?;
        Ok(Self {
            points,
            color: settings.palette_color(3),
        })
    }
}

/// several knots sharing one torus, optionally with sample points on one of them
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct TorusLoops {
    pub strands: Vec<Strands>,
    pub samples: Option<SamplePoints>,
}

/// a panel either is switched off, could be computed, or failed for the current parameters.
/// a failed panel does not take the others down with it.
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub enum PanelState<T> {
    Hidden,
    Shown(T),
    Failed(DanceError),
}

impl<T> PanelState<T> {
    fn build(panel: Panel, settings: &Settings, f: impl FnOnce() -> DanceResult<T>) -> Self {
        if !settings.panels.is_visible(panel) {
            return Self::Hidden;
        }
        match f() {
            Ok(content) => Self::Shown(content),
            Err(e) => {
                log::warn!("skipping panel {panel:?}: {e}");
                Self::Failed(e)
            }
        }
    }

    pub fn shown(&self) -> Option<&T> {
        match self {
            Self::Shown(content) => Some(content),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DanceError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// the three numbers the user types in
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize)]
pub struct Parameters {
    pub alpha: i32,
    pub beta: i32,
    pub multiplier: i32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            alpha: 5,
            beta: 2,
            multiplier: 41,
        }
    }
}

impl Parameters {
    pub fn ratio(&self) -> DanceResult<Ratio> {
        Ratio::reduce(self.alpha.into(), self.beta.into())
    }

    pub fn sam(&self) -> u64 {
        dance::sam(self.alpha, self.beta, self.multiplier)
    }
}

/// the four pictures linked by `sam = |alpha * multiplier - beta|`:
/// - planet dance of the reduced knot `(a, b)`,
/// - the knots `(a, b)` and `(1, multiplier)` on the torus, the latter sampled `sam` times,
/// - the epicycloid of `(a, b)`,
/// - the modular multiplication table `MMT(sam, multiplier)`.
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct Correspondence {
    pub params: Parameters,
    pub ratio: Ratio,
    pub sam: u64,
    pub planet_dance: PanelState<ChordSet>,
    pub torus_loops: PanelState<TorusLoops>,
    pub epicycloid: PanelState<Curve>,
    pub mod_table: PanelState<ChordSet>,
}

impl Correspondence {
    /// fails only if `alpha` and `beta` are both zero, everything else is reported per panel
    pub fn new(params: Parameters, settings: &Settings) -> DanceResult<Self> {
        let ratio = params.ratio()?;
        let sam = params.sam();
        let mult = i64::from(params.multiplier);

        let planet_dance = PanelState::build(Panel::PlanetDance, settings, || {
            let samples = checked_count(settings.dance_samples as u64)?;
            Ok(ChordSet::planet_dance(ratio, samples, settings))
        });
        let torus_loops = PanelState::build(Panel::TorusLoops, settings, || {
            let mult_knot = Ratio::reduce(1, mult)?;
            Ok(TorusLoops {
                strands: vec![
                    Strands::new(ratio, settings.palette_color(0))?,
                    Strands::new(mult_knot, settings.palette_color(2))?,
                ],
                samples: Some(SamplePoints::new(mult_knot, sam, settings.sample_color)?),
            })
        });
        let epicycloid = PanelState::build(Panel::Epicycloid, settings, || {
            Curve::epicycloid(ratio, settings)
        });
        let mod_table = PanelState::build(Panel::ModTable, settings, || {
            let modulus = checked_count(sam)?;
            let chords = dance::mod_multiplication_chords(modulus, mult);
            Ok(ChordSet::new(chords, ChordStyle::Segment, settings))
        });

        log::debug!("correspondence for {params:?}: ratio {ratio}, sam {sam}");
        Ok(Self {
            params,
            ratio,
            sam,
            planet_dance,
            torus_loops,
            epicycloid,
            mod_table,
        })
    }

    pub fn title(&self, panel: Panel) -> String {
        let Parameters { alpha, beta, multiplier } = self.params;
        match panel {
            Panel::PlanetDance => format!("Planet Dance α = {alpha} β = {beta}"),
            Panel::TorusLoops => {
                format!("Linear Loops on Torus ({alpha}, {beta}) and (1, {multiplier})")
            }
            Panel::Epicycloid => String::from("Epicycloid"),
            Panel::ModTable => format!("MMT({}, {multiplier})", self.sam),
        }
    }
}

/// knot `(a, b)` sampled `samples` times on the torus, next to the planet dance sampled at the same rate
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct KnotAndSampleDance {
    pub ratio: Ratio,
    pub loops: TorusLoops,
    pub dance: ChordSet,
}

impl KnotAndSampleDance {
    pub fn new(alpha: i64, beta: i64, samples: u64, settings: &Settings) -> DanceResult<Self> {
        let ratio = Ratio::reduce(alpha, beta)?;
        let color = settings.random_color(&mut settings.color_rng());
        let loops = TorusLoops {
            strands: vec![Strands::new(ratio, color)?],
            samples: Some(SamplePoints::new(ratio, samples, settings.sample_color)?),
        };
        let dance = ChordSet::planet_dance(ratio, checked_count(samples)?, settings);
        Ok(Self { ratio, loops, dance })
    }
}

/// "continuous" planet dance of `(a, b)` next to its epicycloid
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct DanceAndEpicycloid {
    pub ratio: Ratio,
    pub dance: ChordSet,
    pub epicycloid: Curve,
}

impl DanceAndEpicycloid {
    pub fn new(alpha: i64, beta: i64, settings: &Settings) -> DanceResult<Self> {
        let ratio = Ratio::reduce(alpha, beta)?;
        let samples = checked_count(settings.dance_samples as u64)?;
        Ok(Self {
            ratio,
            dance: ChordSet::planet_dance(ratio, samples, settings),
            epicycloid: Curve::epicycloid(ratio, settings)?,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize)]
pub struct Knot {
    pub alpha: i64,
    pub beta: i64,
    /// picked from the palette if not given
    pub color: Option<Color32>,
}

impl Knot {
    pub const fn new(alpha: i64, beta: i64) -> Self {
        Self { alpha, beta, color: None }
    }
}

/// which of the knots of a [`knot_diagram`] is sampled, and how often
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize)]
pub struct KnotSample {
    pub knot: usize,
    pub count: u64,
}

/// builds the torus with every knot of `knots` on it.
/// knots without color get one of the palette, chosen by the seeded generator of `settings`.
pub fn knot_diagram(
    knots: &[Knot],
    sample: Option<KnotSample>,
    settings: &Settings,
) -> DanceResult<TorusLoops> {
    let mut rng = settings.color_rng();
    let strands = knots
        .iter()
        .map(|knot| {
            let ratio = Ratio::reduce(knot.alpha, knot.beta)?;
            let color = knot.color.unwrap_or_else(|| settings.random_color(&mut rng));
            Strands::new(ratio, color)
        })
        .collect::<DanceResult<Vec<_>>>()?;
    let samples = match sample {
        None => None,
        Some(KnotSample { knot, count }) => {
            let sampled = strands.get(knot).ok_or(InvalidInput::NoSuchKnot {
                index: knot,
                count: strands.len(),
            })?;
            Some(SamplePoints::new(sampled.ratio, count, settings.sample_color)?)
        }
    };
    Ok(TorusLoops { strands, samples })
}
