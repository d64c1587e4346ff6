/*

=========================================================
 Diatomic Molecule - Analytical Harmonic Oscillator (Rust)
=========================================================

🔧 Oscillator Model
-------------------
The two-body vibration of a diatomic molecule reduces to a single
particle of reduced mass μ on a spring of force constant k. The
`Diatomic` struct stores the four physical inputs plus the motion
constants derived once at construction:

- Total energy:      E = ½ k x₀² + ½ μ v₀²
- Angular frequency: ω = sqrt(k / μ)
- Amplitude:         A = sqrt(2E / k)
- Phase:             φ = acos(x₀ / A)

🌡️ Equations of Motion
-----------------------
Closed form, no integration anywhere:

    x(t) = A cos(ωt + φ)
    v(t) = -A ω sin(ωt + φ)

Both are pure functions of t, valid for negative times, and are also
exposed vectorized over a time grid for plotting.

💥 Error Handling
-----------------
Construction is fail-fast: a non-positive reduced mass and any derived
constant that would leave the real domain (negative k under the root,
zero k in the amplitude, |x₀/A| > 1 in the arccosine) are rejected
explicitly instead of letting NaN leak into the trajectory.

=========================================================

*/
pub mod diatomic;
pub mod error;
pub mod plotting;
pub mod sampling;

pub use diatomic::Diatomic;
pub use error::DiatomicError;
