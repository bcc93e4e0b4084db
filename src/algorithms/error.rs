use thiserror::Error;

/// Errors returned by solver variants that have hard input limits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error(
        "Selection needs {required_bits} bits ({bits_per_slot} per slot) but the mask holds {available_bits}"
    )]
    SelectionTooWide {
        required_bits: u32,
        bits_per_slot: u32,
        available_bits: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_too_wide_display() {
        let e = SolverError::SelectionTooWide {
            required_bits: 140,
            bits_per_slot: 5,
            available_bits: 128,
        };
        assert_eq!(
            e.to_string(),
            "Selection needs 140 bits (5 per slot) but the mask holds 128"
        );
    }
}
