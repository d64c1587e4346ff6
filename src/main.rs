/*

Make plots for the diatomic oscillator.

Builds the reference oscillator (μ = 1, k = 1, x₀ = 1, v₀ = 1), samples the
analytical trajectory over two periods, and writes three figures into the
output directory given as the first command-line argument (defaults to the
current directory):

- analytical_positions.png
- analytical_velocities.png
- twin_axes.png

*/

use std::path::PathBuf;

use diatomic_osc::plotting;
use diatomic_osc::sampling::time_grid;
use diatomic_osc::Diatomic;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    if out_dir.exists() {
        if !out_dir.is_dir() {
            return Err(format!("{} is not a directory", out_dir.display()).into());
        }
    } else {
        std::fs::create_dir_all(&out_dir)?;
    }

    // Same parameters as the reference figures
    let reduced_mass = 1.0;
    let force_constant = 1.0;
    let initial_separation = 1.0;
    let initial_velocity = 1.0;

    let diatomic = Diatomic::new(
        reduced_mass,
        force_constant,
        initial_separation,
        initial_velocity,
    )?;
    log::info!(
        "omega = {:.6}, amplitude = {:.6}, phi = {:.6}, E = {:.6}",
        diatomic.omega(),
        diatomic.amplitude(),
        diatomic.phi(),
        diatomic.total_energy()
    );

    let times = time_grid(2.0 * diatomic.period(), 100);
    let positions = diatomic.position_series(&times);
    let velocities = diatomic.velocity_series(&times);

    plotting::plot_positions(&out_dir.join("analytical_positions.png"), &times, &positions)?;
    plotting::plot_velocities(
        &out_dir.join("analytical_velocities.png"),
        &times,
        &velocities,
    )?;
    plotting::plot_twin_axes(
        &out_dir.join("twin_axes.png"),
        &times,
        &positions,
        &velocities,
    )?;

    log::info!("wrote plots to {}", out_dir.display());
    Ok(())
}
