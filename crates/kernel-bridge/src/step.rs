//! STEP AP203 text output via truck-stepio.

use truck_stepio::out;

type TruckSolid = truck_modeling::Solid;

/// Serialize a solid into a STEP document string.
pub(crate) fn solid_to_step(solid: &TruckSolid) -> String {
    let compressed = solid.compress();
    out::CompleteStepDisplay::new(
        out::StepModel::from(&compressed),
        out::StepHeaderDescriptor {
            organization_system: "wedgeforge".to_owned(),
            ..Default::default()
        },
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives;

    #[test]
    fn step_document_has_standard_framing() {
        let solid = primitives::make_box(1.0, 1.0, 1.0);
        let step = solid_to_step(&solid);

        assert!(step.starts_with("ISO-10303-21;"), "missing STEP opener");
        assert!(step.contains("HEADER;"));
        assert!(step.contains("DATA;"));
        assert!(step.ends_with("END-ISO-10303-21;\n") || step.contains("END-ISO-10303-21;"));
    }

    #[test]
    fn step_document_contains_a_brep_solid() {
        let solid = primitives::make_box(2.0, 1.0, 1.0);
        let step = solid_to_step(&solid);
        assert!(
            step.contains("MANIFOLD_SOLID_BREP"),
            "expected a MANIFOLD_SOLID_BREP entity"
        );
    }
}
