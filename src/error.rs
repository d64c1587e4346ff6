use std::fmt;

/// Errors surfaced while constructing a [`Diatomic`](crate::diatomic::Diatomic).
///
/// Every failure happens at construction time; once an oscillator is built,
/// evaluating its motion can no longer fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiatomicError {
    /// The reduced mass was zero, negative, or not finite.
    InvalidMass { reduced_mass: f64 },
    /// A derived constant left the real domain - a square root of a negative
    /// number, a division by a zero force constant, or an arccosine argument
    /// outside [-1, 1]. `quantity` names the constant that could not be
    /// computed and `value` carries the offending operand.
    Domain {
        quantity: &'static str,
        value: f64,
    },
}

impl fmt::Display for DiatomicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiatomicError::InvalidMass { reduced_mass } => {
                write!(f, "invalid reduced mass for diatomic: {reduced_mass}")
            }
            DiatomicError::Domain { quantity, value } => {
                write!(
                    f,
                    "{quantity} is undefined for the supplied parameters (operand {value})"
                )
            }
        }
    }
}

impl std::error::Error for DiatomicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_quantity() {
        let err = DiatomicError::Domain {
            quantity: "amplitude",
            value: -3.0,
        };
        let message = err.to_string();
        assert!(message.contains("amplitude"));
        assert!(message.contains("-3"));
    }

    #[test]
    fn test_display_invalid_mass() {
        let err = DiatomicError::InvalidMass { reduced_mass: -1.0 };
        assert!(err.to_string().contains("reduced mass"));
    }
}
