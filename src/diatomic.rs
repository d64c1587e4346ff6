/*
A diatomic molecule modeled as a simple harmonic oscillator.

The two-body vibration problem reduces to a single particle of reduced mass mu
attached to a spring of force constant k. Given the separation x0 and velocity
v0 at the reference instant t = 0, the conserved total energy fixes the
amplitude of the motion, and the phase is chosen so the analytical position at
t = 0 reproduces x0:

    E     = 1/2 k x0^2 + 1/2 mu v0^2
    omega = sqrt(k / mu)
    A     = sqrt(2 E / k)
    phi   = acos(x0 / A)

    x(t)  = A cos(omega t + phi)
    v(t)  = -A omega sin(omega t + phi)

All four constants are derived exactly once at construction; the oscillator is
immutable afterwards, so position/velocity evaluation is pure and safe to call
from any number of threads.
*/

use ndarray::Array1;

use crate::error::DiatomicError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diatomic {
    // Input quantities (constants)
    reduced_mass: f64,
    force_constant: f64,
    initial_separation: f64,
    initial_velocity: f64,

    // Calculated quantities (constants)
    total_energy: f64,
    omega: f64,
    amplitude: f64,
    phi: f64,
}

impl Diatomic {
    /// Build an oscillator from its four physical inputs and derive the
    /// motion constants.
    ///
    /// Fails with [`DiatomicError::InvalidMass`] when the reduced mass is not
    /// a finite, strictly positive number, and with [`DiatomicError::Domain`]
    /// when a derived constant would require a square root of a negative
    /// number, a division by a zero force constant, or an arccosine outside
    /// [-1, 1]. The ratio x0 / A is never clamped; physically inconsistent
    /// inputs are rejected rather than silently propagated as NaN.
    pub fn new(
        reduced_mass: f64,
        force_constant: f64,
        initial_separation: f64,
        initial_velocity: f64,
    ) -> Result<Self, DiatomicError> {
        if !reduced_mass.is_finite() || reduced_mass <= 0.0 {
            return Err(DiatomicError::InvalidMass { reduced_mass });
        }

        let potential = 0.5 * force_constant * initial_separation.powi(2);
        let kinetic = 0.5 * reduced_mass * initial_velocity.powi(2);
        let total_energy = potential + kinetic;

        // omega = sqrt(k / mu); real only for k >= 0
        if force_constant < 0.0 {
            return Err(DiatomicError::Domain {
                quantity: "angular frequency",
                value: force_constant,
            });
        }
        let omega = (force_constant / reduced_mass).sqrt();

        // A = sqrt(2E / k); undefined for k = 0 and imaginary for 2E/k < 0
        if force_constant == 0.0 {
            return Err(DiatomicError::Domain {
                quantity: "amplitude",
                value: force_constant,
            });
        }
        let amplitude_sq = 2.0 * total_energy / force_constant;
        if amplitude_sq < 0.0 {
            return Err(DiatomicError::Domain {
                quantity: "amplitude",
                value: amplitude_sq,
            });
        }
        let amplitude = amplitude_sq.sqrt();

        // phi = acos(x0 / A); the ratio leaves [-1, 1] only when the inputs
        // are energetically inconsistent (|x0| larger than the turning point)
        let cos_phi = initial_separation / amplitude;
        if !(-1.0..=1.0).contains(&cos_phi) {
            return Err(DiatomicError::Domain {
                quantity: "phase",
                value: cos_phi,
            });
        }
        let phi = cos_phi.acos();

        Ok(Diatomic {
            reduced_mass,
            force_constant,
            initial_separation,
            initial_velocity,
            total_energy,
            omega,
            amplitude,
            phi,
        })
    }

    pub fn reduced_mass(&self) -> f64 {
        self.reduced_mass
    }

    pub fn force_constant(&self) -> f64 {
        self.force_constant
    }

    pub fn initial_separation(&self) -> f64 {
        self.initial_separation
    }

    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Conserved total energy E = V(x0) + KE(v0).
    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }

    /// Angular frequency omega = sqrt(k / mu), in radians per unit time.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Maximum displacement A = sqrt(2E / k).
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Phase offset phi = acos(x0 / A), fixing x(0) = x0.
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Period of one full vibration, T = 2 pi / omega.
    pub fn period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.omega
    }

    /// Potential energy 1/2 k x0^2 at the reference separation. This is a
    /// fixed diagnostic of the construction-time state, not a function of
    /// simulated time.
    pub fn potential_energy(&self) -> f64 {
        0.5 * self.force_constant * self.initial_separation.powi(2)
    }

    /// Kinetic energy 1/2 mu v0^2 at the reference velocity, same
    /// fixed-at-construction semantics as [`Self::potential_energy`].
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.reduced_mass * self.initial_velocity.powi(2)
    }

    /// Analytical position x(t) = A cos(omega t + phi). Accepts any real t,
    /// negative times included.
    pub fn position(&self, t: f64) -> f64 {
        self.amplitude * (self.omega * t + self.phi).cos()
    }

    /// Analytical velocity v(t) = -A omega sin(omega t + phi), the exact time
    /// derivative of [`Self::position`].
    pub fn velocity(&self, t: f64) -> f64 {
        -self.amplitude * self.omega * (self.omega * t + self.phi).sin()
    }

    /// Elementwise [`Self::position`] over a grid of time samples.
    pub fn position_series(&self, times: &Array1<f64>) -> Array1<f64> {
        times.mapv(|t| self.position(t))
    }

    /// Elementwise [`Self::velocity`] over a grid of time samples.
    pub fn velocity_series(&self, times: &Array1<f64>) -> Array1<f64> {
        times.mapv(|t| self.velocity(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::time_grid;

    // Parameters are all different so that assignment is properly tested.
    fn reference_diatomic() -> Diatomic {
        Diatomic::new(1.0, 2.0, 3.0, 4.0).unwrap()
    }

    fn reference_period() -> f64 {
        2.0 * std::f64::consts::PI * (1.0_f64 / 2.0).sqrt()
    }

    #[test]
    fn test_constructor() {
        let diatomic = reference_diatomic();

        // Values specified in the constructor.
        assert_eq!(diatomic.reduced_mass(), 1.0);
        assert_eq!(diatomic.force_constant(), 2.0);
        assert_eq!(diatomic.initial_separation(), 3.0);
        assert_eq!(diatomic.initial_velocity(), 4.0);

        // Calculated values.
        assert!((diatomic.omega() - 2.0_f64.sqrt()).abs() < 1e-9);
        assert!((diatomic.amplitude() - 17.0_f64.sqrt()).abs() < 1e-9);
        assert!((diatomic.phi() - 0.7559694104).abs() < 1e-9);
        assert!((diatomic.period() - reference_period()).abs() < 1e-9);
    }

    #[test]
    fn test_constructor_invalid_mass() {
        for bad_mass in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let result = Diatomic::new(bad_mass, 2.0, 3.0, 4.0);
            match result {
                Err(DiatomicError::InvalidMass { .. }) => {}
                other => panic!("expected InvalidMass for mu = {bad_mass}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_constructor_negative_force_constant() {
        let result = Diatomic::new(1.0, -2.0, 3.0, 4.0);
        assert_eq!(
            result,
            Err(DiatomicError::Domain {
                quantity: "angular frequency",
                value: -2.0,
            })
        );
    }

    #[test]
    fn test_constructor_zero_force_constant() {
        let result = Diatomic::new(1.0, 0.0, 3.0, 4.0);
        assert_eq!(
            result,
            Err(DiatomicError::Domain {
                quantity: "amplitude",
                value: 0.0,
            })
        );
    }

    #[test]
    fn test_constructor_resting_molecule_has_no_phase() {
        // x0 = 0 and v0 = 0 gives A = 0 and an indeterminate x0 / A.
        let result = Diatomic::new(1.0, 2.0, 0.0, 0.0);
        match result {
            Err(DiatomicError::Domain { quantity, .. }) => assert_eq!(quantity, "phase"),
            other => panic!("expected a phase domain error, got {other:?}"),
        }
    }

    #[test]
    fn test_energy_conserved() {
        let diatomic = reference_diatomic();
        // E = V(x0) + KE(v0) holds exactly, by construction.
        assert_eq!(
            diatomic.potential_energy() + diatomic.kinetic_energy(),
            diatomic.total_energy()
        );
        assert!((diatomic.potential_energy() - 9.0).abs() < 1e-12);
        assert!((diatomic.kinetic_energy() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_analytical_position() {
        let diatomic = reference_diatomic();
        let period = reference_period();

        // At time 0 the position equals the initial separation.
        assert!((diatomic.position(0.0) - 3.0).abs() < 1e-9);
        // At the negative position half a period later.
        assert!((diatomic.position(0.5 * period) + 3.0).abs() < 1e-9);
        // Back at the same position after one full period.
        assert!((diatomic.position(period) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_analytical_velocity() {
        // acos returns a phase in [0, pi], so v(0) = -A omega sin(phi) is
        // never positive; an initial velocity of -4 makes v(0) match v0.
        let diatomic = Diatomic::new(1.0, 2.0, 3.0, -4.0).unwrap();
        let period = reference_period();

        assert!((diatomic.velocity(0.0) + 4.0).abs() < 1e-9);
        assert!((diatomic.velocity(0.5 * period) - 4.0).abs() < 1e-9);
        assert!((diatomic.velocity(period) + 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_periodicity_and_half_period_antisymmetry() {
        let diatomic = reference_diatomic();
        let period = diatomic.period();

        // Negative times are past states of the same trajectory.
        for t in [-1.3, 0.0, 0.4, 2.7] {
            assert!((diatomic.position(t + period) - diatomic.position(t)).abs() < 1e-9);
            assert!((diatomic.velocity(t + period) - diatomic.velocity(t)).abs() < 1e-9);
            assert!((diatomic.position(t + 0.5 * period) + diatomic.position(t)).abs() < 1e-9);
            assert!((diatomic.velocity(t + 0.5 * period) + diatomic.velocity(t)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_velocity_is_derivative_of_position() {
        let diatomic = reference_diatomic();
        let h = 1e-6;

        for t in [-0.8, 0.0, 0.3, 1.9, 5.2] {
            let central_difference =
                (diatomic.position(t + h) - diatomic.position(t - h)) / (2.0 * h);
            assert!((diatomic.velocity(t) - central_difference).abs() < 1e-5);
        }
    }

    #[test]
    fn test_analytical_position_bounds() {
        // Max and min observed positions over a dense grid compared against
        // the theoretical turning points +-A.
        let diatomic = reference_diatomic();
        let times = time_grid(2.0 * diatomic.period(), 1000);
        let positions = diatomic.position_series(&times);

        let (min_observed, max_observed) = positions
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        assert!(max_observed <= diatomic.amplitude());
        assert!((max_observed - diatomic.amplitude()).abs() < 1e-5);

        assert!(min_observed >= -diatomic.amplitude());
        assert!((min_observed + diatomic.amplitude()).abs() < 1e-5);
    }

    #[test]
    fn test_series_matches_scalar_evaluation() {
        let diatomic = reference_diatomic();
        let times = time_grid(diatomic.period(), 17);
        let positions = diatomic.position_series(&times);
        let velocities = diatomic.velocity_series(&times);

        for (i, &t) in times.iter().enumerate() {
            assert_eq!(positions[i], diatomic.position(t));
            assert_eq!(velocities[i], diatomic.velocity(t));
        }
    }
}
