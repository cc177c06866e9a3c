//! Convenience re-exports for driving the lesson diagrams.

pub use crate::animation::{write_waveform_csv, FrameConfig, RectifierAnimation};
pub use crate::config::LayoutConfig;
pub use crate::constants::*;
pub use crate::errors::InvalidParameterError;
pub use crate::layout::{
    chart, layout, layout_with, AtomKind, Canvas, DrawablePrimitive, FillRole, PointRole,
    StrokeRole,
};
pub use crate::math::{p2, Scalar, P2};
pub use crate::params::{
    normalize, BandMaterial, BiasMode, DopingType, Experiment, ExperimentKind,
    ExperimentParameters, Material, RectifierType, ThermalState,
};
pub use crate::physics::{
    evaluate, BandResult, CapacitorState, CarrierResult, DiodeResult, IntrinsicResult,
    JunctionResult, PhysicsResult, Rectifier, RectifierResult, WaveSample,
};
pub use crate::pipeline::{render, render_with, Rendered};
pub use crate::sweep::{diode_characteristic, intrinsic_sweep, linspace, IvPoint};
