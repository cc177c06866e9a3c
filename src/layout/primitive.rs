//! Canvas and the drawable primitives handed to the renderer.

use crate::errors::{InvalidParameterError, Result};
use crate::math::{P2, Scalar};
use crate::params::DopingType;

/// Drawing surface size in pixels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: Scalar,
    height: Scalar,
}

impl Canvas {
    /// Creates a canvas.
    ///
    /// # Errors
    ///
    /// Fails unless both sides are finite and positive.
    pub fn new(width: Scalar, height: Scalar) -> Result<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(InvalidParameterError::InvalidCanvas { width, height })
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> Scalar {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> Scalar {
        self.height
    }

    /// Horizontal centre line.
    #[must_use]
    pub fn center_x(&self) -> Scalar {
        self.width / 2.0
    }

    /// True when `point` lies inside the canvas (edges included).
    #[must_use]
    pub fn contains(&self, point: &P2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// Lattice site species.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    /// Host silicon atom.
    Silicon,
    /// Pentavalent donor (phosphorus).
    Donor,
    /// Trivalent acceptor (boron).
    Acceptor,
}

impl AtomKind {
    /// Dopant atom for a doping type.
    #[must_use]
    pub const fn dopant(doping: DopingType) -> Self {
        match doping {
            DopingType::NType => Self::Donor,
            DopingType::PType => Self::Acceptor,
        }
    }

    /// Element symbol printed on the atom.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Silicon => "Si",
            Self::Donor => "P",
            Self::Acceptor => "B",
        }
    }
}

/// What a point stands for.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// Free electron.
    Electron,
    /// Hole.
    Hole,
    /// Electron on the side where it is the minority carrier.
    MinorityElectron,
    /// Hole on the side where it is the minority carrier.
    MinorityHole,
    /// Bound valence electron in a band diagram.
    ValenceElectron,
    /// Lattice atom.
    Atom(AtomKind),
    /// Current operating point on a characteristic curve.
    OperatingPoint,
    /// Instantaneous value marker on the input wave.
    InputMarker,
    /// Instantaneous value marker on the output wave.
    OutputMarker,
}

/// Stroke style of a polyline.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeRole {
    /// Plot axis.
    Axis,
    /// Axis tick.
    Tick,
    /// Dashed guide line.
    Guide,
    /// Characteristic curve.
    Curve,
    /// Zero line under a waveform.
    Baseline,
    /// Input waveform.
    InputWave,
    /// Output waveform.
    OutputWave,
    /// Covalent bond between lattice atoms.
    Bond,
    /// Metallurgical junction.
    Junction,
    /// Bias circuit wire.
    Wire,
}

/// Fill style of a bar.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillRole {
    /// P-type region.
    PRegion,
    /// N-type region.
    NRegion,
    /// Depletion region.
    Depletion,
    /// Bias battery terminal.
    Battery,
    /// Conduction band.
    ConductionBand,
    /// Valence band.
    ValenceBand,
    /// Empty chart track.
    Track,
    /// Temperature level.
    Temperature,
    /// Intrinsic carrier concentration level.
    Concentration,
    /// Conductivity level.
    Conductivity,
    /// Dopant density level.
    Dopant(DopingType),
    /// Electron density level.
    ElectronDensity,
    /// Hole density level.
    HoleDensity,
}

/// Geometry handed to the renderer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawablePrimitive {
    /// A marker at a position.
    Point {
        /// Pixel position.
        position: P2,
        /// Meaning of the marker.
        role: PointRole,
    },
    /// An open polyline.
    Path {
        /// Vertices in drawing order.
        points: Vec<P2>,
        /// Stroke style.
        stroke: StrokeRole,
    },
    /// An axis-aligned rectangle anchored at its top-left corner.
    Bar {
        /// Top-left corner.
        origin: P2,
        /// Width in pixels.
        width: Scalar,
        /// Height in pixels.
        height: Scalar,
        /// Fill style.
        fill: FillRole,
    },
}

impl DrawablePrimitive {
    /// Point primitive.
    #[must_use]
    pub const fn point(position: P2, role: PointRole) -> Self {
        Self::Point { position, role }
    }

    /// Path primitive.
    #[must_use]
    pub fn path(points: Vec<P2>, stroke: StrokeRole) -> Self {
        Self::Path { points, stroke }
    }

    /// Two-vertex path.
    #[must_use]
    pub fn segment(from: P2, to: P2, stroke: StrokeRole) -> Self {
        Self::Path {
            points: vec![from, to],
            stroke,
        }
    }

    /// Bar primitive.
    #[must_use]
    pub const fn bar(origin: P2, width: Scalar, height: Scalar, fill: FillRole) -> Self {
        Self::Bar {
            origin,
            width,
            height,
            fill,
        }
    }

    /// Role of a point primitive.
    #[must_use]
    pub const fn point_role(&self) -> Option<PointRole> {
        match self {
            Self::Point { role, .. } => Some(*role),
            _ => None,
        }
    }

    /// Stroke of a path primitive.
    #[must_use]
    pub const fn stroke(&self) -> Option<StrokeRole> {
        match self {
            Self::Path { stroke, .. } => Some(*stroke),
            _ => None,
        }
    }

    /// Fill of a bar primitive.
    #[must_use]
    pub const fn fill(&self) -> Option<FillRole> {
        match self {
            Self::Bar { fill, .. } => Some(*fill),
            _ => None,
        }
    }
}

/// Positions of all points with `role`.
#[must_use]
pub fn points_with_role(primitives: &[DrawablePrimitive], role: PointRole) -> Vec<P2> {
    primitives
        .iter()
        .filter_map(|p| match p {
            DrawablePrimitive::Point { position, role: r } if *r == role => Some(*position),
            _ => None,
        })
        .collect()
}

/// First bar with `fill`.
#[must_use]
pub fn bar_with_fill(primitives: &[DrawablePrimitive], fill: FillRole) -> Option<&DrawablePrimitive> {
    primitives.iter().find(|p| p.fill() == Some(fill))
}
