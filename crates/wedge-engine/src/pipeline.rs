//! Generation pipeline: parameters in, validated head and report out.
//!
//! Spec validation failures abort before any kernel work. Once geometry
//! starts, only boolean/geometry failures on the primary solids abort;
//! finishing features degrade to report warnings, and target misses are
//! recorded, never fatal.

use std::path::{Path, PathBuf};

use chrono::Local;
use geometry_ops::{
    build_blade, build_hosel, build_sole, cut_grooves, effective_bounce, fuse_head, place_hosel,
    GrooveLayout, OpError, SolePosition,
};
use kernel_bridge::{Kernel, KernelError, SolidHandle, TruckKernel};
use tracing::{info, instrument, warn};
use wedge_config::ConfigError;
use wedge_types::{MaterialError, MaterialTable, SpecError, WedgeSpec};

use crate::classify::{classify, GrindInputs};
use crate::export;
use crate::metrics;
use crate::report::{BounceProfile, CgReport, GrooveSummary, QuantityCheck, ValidationReport};

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid parameter: {0}")]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Op(#[from] OpError),

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("material lookup failed: {0}")]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A generated head still held by the kernel, plus its report.
#[derive(Debug)]
pub struct Generation {
    pub solid: SolidHandle,
    pub report: ValidationReport,
}

/// Result of a file-to-file run.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub step_path: PathBuf,
    pub report: ValidationReport,
}

/// Build one wedge head through `kernel` and measure it.
#[instrument(skip_all, fields(wedge = %spec.name))]
pub fn generate(
    kernel: &mut dyn Kernel,
    spec: &WedgeSpec,
    materials: &MaterialTable,
) -> Result<Generation, GenerationError> {
    spec.validate()?;
    info!(
        loft = spec.loft,
        lie = spec.lie,
        bounce = spec.bounce,
        "generating wedge head"
    );

    let mut skipped: Vec<String> = Vec::new();

    let blade = build_blade(kernel, &spec.blade, spec.loft)?;
    skipped.extend(blade.warnings.iter().map(ToString::to_string));

    let grooved = cut_grooves(kernel, blade.solid, &spec.grooves, &spec.blade, spec.loft)?;
    skipped.extend(grooved.warnings.iter().map(ToString::to_string));

    let sole = build_sole(kernel, &spec.sole, spec.blade.length, spec.bounce)?;
    skipped.extend(sole.warnings.iter().map(ToString::to_string));

    let hosel = build_hosel(kernel, &spec.hosel)?;
    let hosel = place_hosel(kernel, hosel, &spec.blade, spec.loft, spec.lie)?;

    let head = fuse_head(kernel, grooved.solid, sole.solid, hosel)?;

    let solid_valid = kernel.is_valid(&head)?;
    if !solid_valid {
        warn!("assembled head fails the closed-shell check; metrics are best effort");
    }

    let volume = kernel.volume(&head)?;
    let centroid = kernel.center_of_mass(&head)?;
    let density = metrics::resolve_density(&spec.material, materials)?;

    let report = assemble_report(
        spec,
        volume,
        centroid,
        density,
        solid_valid,
        &grooved.layout,
        skipped,
    );
    info!(
        mass = report.mass.measured,
        volume_mm3 = volume,
        grind = %report.grind,
        passed = report.passed(),
        "generation complete"
    );

    Ok(Generation {
        solid: head,
        report,
    })
}

/// Load a parameter file, generate through the truck kernel, and write
/// the STEP artifact under `output_dir`.
pub fn generate_to_file(
    config_path: &Path,
    output_dir: &Path,
) -> Result<GenerationOutcome, GenerationError> {
    let spec = wedge_config::load_path(config_path)?;
    let mut kernel = TruckKernel::new();
    let generation = generate(&mut kernel, &spec, &MaterialTable::default())?;

    let step = kernel.export_step(&generation.solid)?;
    let file_name = export::artifact_name(&spec.name, spec.loft, spec.bounce, Local::now());
    let step_path =
        export::write_step(output_dir, &file_name, &step).map_err(|source| GenerationError::Io {
            path: output_dir.join(&file_name),
            source,
        })?;
    info!(path = %step_path.display(), bytes = step.len(), "wrote STEP artifact");

    Ok(GenerationOutcome {
        step_path,
        report: generation.report,
    })
}

fn assemble_report(
    spec: &WedgeSpec,
    volume: f64,
    centroid: [f64; 3],
    density: f64,
    solid_valid: bool,
    layout: &GrooveLayout,
    skipped_features: Vec<String>,
) -> ValidationReport {
    let mass = metrics::mass_grams(volume, density);
    let offsets = metrics::cg_offsets(centroid, spec.blade.length);
    let targets = &spec.weight;

    let cg = CgReport {
        from_face: QuantityCheck::new(
            offsets.from_face,
            targets.center_of_gravity.from_face,
            targets.cg_tolerance,
        ),
        from_heel: QuantityCheck::new(
            offsets.from_heel,
            targets.center_of_gravity.from_heel,
            targets.cg_tolerance,
        ),
        from_sole: QuantityCheck::new(
            offsets.from_sole,
            targets.center_of_gravity.from_sole,
            targets.cg_tolerance,
        ),
    };

    ValidationReport {
        name: spec.name.clone(),
        solid_valid,
        metrics_reliable: solid_valid,
        volume_mm3: volume,
        mass: QuantityCheck::new(mass, targets.target_head_weight, targets.tolerance),
        cg,
        grind: classify(&GrindInputs::from_spec(spec)),
        effective_bounce: BounceProfile {
            heel: effective_bounce(spec.bounce, &spec.sole, SolePosition::Heel),
            center: effective_bounce(spec.bounce, &spec.sole, SolePosition::Center),
            toe: effective_bounce(spec.bounce, &spec.sole, SolePosition::Toe),
        },
        grooves: GrooveSummary::from(layout),
        skipped_features,
    }
}
