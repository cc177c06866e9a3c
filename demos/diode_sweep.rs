use semiviz::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), InvalidParameterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Operating points for both materials, same 0.1 V grid as the plotted curve.
    println!("material,voltage(V),current(mA),lamp");
    for material in Material::ALL {
        let mut conducting_from = None;
        for v in linspace(-1.0, 2.0, 31) {
            let params = ExperimentParameters::new("diode")
                .with_voltage(v)
                .with_material(material.as_str());
            let PhysicsResult::Diode(d) = evaluate(&normalize(&params)?)? else {
                continue;
            };
            if d.is_forward_conducting && conducting_from.is_none() {
                conducting_from = Some(d.voltage);
            }
            println!(
                "{},{:.2},{:.6e},{:.3}",
                material,
                d.voltage,
                d.current_milliamps(),
                d.lamp_brightness()
            );
        }
        info!(%material, threshold = ?conducting_from, "swept");
    }
    Ok(())
}
