//! Board validation.

use crate::error::{ArchitectError, Result};
use crate::level::Level;

use super::{Circuit, GateKind};

/// Validate a board against the level it will be graded on.
///
/// Checks:
/// - The level's own truth table is consistent
/// - The board has exactly the level's number of switches
/// - The board has exactly the level's number of lights
///
/// Grading itself tolerates mismatches (a missing light simply fails the
/// row); this is the place that turns them into reportable errors.
pub fn validate_board(circuit: &Circuit, level: &Level) -> Result<()> {
    level.validate()?;

    let switches = circuit
        .nodes
        .iter()
        .filter(|n| n.kind == GateKind::Input)
        .count();
    if switches != level.inputs {
        return Err(ArchitectError::SwitchCountMismatch {
            expected: level.inputs,
            found: switches,
        });
    }

    let lights = circuit
        .nodes
        .iter()
        .filter(|n| n.kind == GateKind::Output)
        .count();
    if lights != level.outputs {
        return Err(ArchitectError::LightCountMismatch {
            expected: level.outputs,
            found: lights,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::builtin_level;

    #[test]
    fn test_level_board_is_valid() {
        let level = builtin_level(3).unwrap();
        let circuit = Circuit::for_level(&level);
        assert!(validate_board(&circuit, &level).is_ok());
    }

    #[test]
    fn test_missing_switch_is_reported() {
        let level = builtin_level(3).unwrap();
        let mut circuit = Circuit::for_level(&level);
        let first_switch = circuit
            .nodes
            .iter()
            .find(|n| n.kind == GateKind::Input)
            .map(|n| n.id.clone())
            .unwrap();
        circuit.delete_node(&first_switch).unwrap();

        assert!(matches!(
            validate_board(&circuit, &level),
            Err(ArchitectError::SwitchCountMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_extra_light_is_reported() {
        let level = builtin_level(1).unwrap();
        let mut circuit = Circuit::for_level(&level);
        circuit.add_node(GateKind::Output, Default::default());

        assert!(matches!(
            validate_board(&circuit, &level),
            Err(ArchitectError::LightCountMismatch { .. })
        ));
    }
}
