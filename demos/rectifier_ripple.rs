use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;
use semiviz::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let topology: RectifierType = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("half-wave")
        .parse()?;

    let mut anim = RectifierAnimation::new(topology, true, FrameConfig::standard());
    // one period to charge the capacitor, then record the settled ripple
    anim.record(60);
    let samples = anim.record(120);

    let (lo, hi) = samples
        .iter()
        .fold((Scalar::INFINITY, Scalar::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.output), hi.max(s.output))
        });
    info!(%topology, ripple = hi - lo, "settled");

    let canvas = Canvas::new(500.0, 400.0)?;
    let mut rng = StdRng::seed_from_u64(0);
    let frame = anim.frame(canvas, &LayoutConfig::default(), &mut rng)?;
    info!(primitives = frame.primitives.len(), "final frame");

    write_waveform_csv(io::stdout().lock(), &samples)?;
    Ok(())
}
