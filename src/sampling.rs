/*
Time grids for evaluating the analytical trajectory.

Plotting and the turning-point checks both want a linearly spaced set of time
samples spanning a few periods; linspace gives the numpy-style inclusive grid.
*/

use itertools_num::linspace;
use ndarray::Array1;

/// `n` evenly spaced time samples over `[0, t_end]`, both endpoints included.
pub fn time_grid(t_end: f64, n: usize) -> Array1<f64> {
    linspace::<f64>(0.0, t_end, n).collect()
}
