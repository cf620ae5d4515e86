//! Component builder scenarios against the mock kernel.

use geometry_ops::{
    build_blade, build_hosel, build_sole, cut_grooves, fuse_head, place_hosel, OpError,
};
use kernel_bridge::{EdgeSelector, Kernel, MockKernel};
use wedge_types::{BladeParams, GrooveParams, HoselParams, SoleParams};

const LOFT: f64 = 56.0;
const BLADE_SECTION_AREA: f64 = 274.4;

// ── Blade ──────────────────────────────────────────────────────────────

#[test]
fn blade_volume_is_the_section_sweep() {
    let mut kernel = MockKernel::new();
    let params = BladeParams::default();
    let blade = build_blade(&mut kernel, &params, LOFT).unwrap();
    assert!(blade.warnings.is_empty());

    let volume = kernel.volume(&blade.solid).unwrap();
    assert!(
        (volume - BLADE_SECTION_AREA * params.length).abs() < 1e-9,
        "volume {volume}"
    );
}

#[test]
fn blade_is_centered_and_leaned_back_by_loft() {
    let mut kernel = MockKernel::new();
    let params = BladeParams::default();
    let blade = build_blade(&mut kernel, &params, LOFT).unwrap();
    let (min, max) = kernel.bounding_box(&blade.solid).unwrap();

    assert!((min[0] + params.length / 2.0).abs() < 1e-9);
    assert!((max[0] - params.length / 2.0).abs() < 1e-9);

    let loft = LOFT.to_radians();
    // Topline height drops from face_height to its cosine projection.
    assert!((max[2] - params.face_height * loft.cos()).abs() < 1e-9);
    // The back-bottom corner swings below the sole plane.
    assert!(min[2] < 0.0);
}

#[test]
fn blade_topline_gets_a_fillet_when_the_kernel_allows() {
    let mut kernel = MockKernel::new();
    build_blade(&mut kernel, &BladeParams::default(), LOFT).unwrap();
    assert_eq!(kernel.applied_finishing.len(), 1);
    let (op, selector, _) = kernel.applied_finishing[0];
    assert_eq!(op, "fillet");
    assert_eq!(selector, EdgeSelector::XParallelTopmost);
}

#[test]
fn blade_survives_a_refused_fillet() {
    let mut kernel = MockKernel::new().with_refused_finishing();
    let params = BladeParams::default();
    let blade = build_blade(&mut kernel, &params, LOFT).unwrap();

    assert_eq!(blade.warnings.len(), 1);
    assert_eq!(blade.warnings[0].feature, "topline fillet");
    let volume = kernel.volume(&blade.solid).unwrap();
    assert!((volume - BLADE_SECTION_AREA * params.length).abs() < 1e-9);
}

#[test]
fn blade_rejects_non_positive_dimensions() {
    let mut kernel = MockKernel::new();
    let params = BladeParams {
        length: 0.0,
        ..BladeParams::default()
    };
    let err = build_blade(&mut kernel, &params, LOFT).unwrap_err();
    assert!(matches!(err, OpError::InvalidParameter { .. }));
}

// ── Grooves ────────────────────────────────────────────────────────────

fn fresh_blade(kernel: &mut MockKernel) -> (kernel_bridge::SolidHandle, f64) {
    let blade = build_blade(kernel, &BladeParams::default(), LOFT).unwrap();
    let volume = kernel.volume(&blade.solid).unwrap();
    (blade.solid, volume)
}

#[test]
fn groove_cuts_scale_linearly_with_count() {
    let mut kernel = MockKernel::new();
    let blade_params = BladeParams::default();

    let (blade, before) = fresh_blade(&mut kernel);
    let one = GrooveParams {
        count: 1,
        ..GrooveParams::default()
    };
    let outcome = cut_grooves(&mut kernel, blade, &one, &blade_params, LOFT).unwrap();
    assert!(outcome.warnings.is_empty());
    let drop_one = before - kernel.volume(&outcome.solid).unwrap();
    assert!(drop_one > 0.0, "a groove must remove material");

    let (blade, before) = fresh_blade(&mut kernel);
    let outcome =
        cut_grooves(&mut kernel, blade, &GrooveParams::default(), &blade_params, LOFT).unwrap();
    assert_eq!(outcome.layout.actual, 12);
    let drop_twelve = before - kernel.volume(&outcome.solid).unwrap();
    assert!(
        (drop_twelve - 12.0 * drop_one).abs() < 1e-9,
        "expected twelve equal cuts, got {drop_twelve} vs 12 × {drop_one}"
    );
}

#[test]
fn groove_failures_keep_the_last_good_blade() {
    let mut kernel = MockKernel::new();
    let blade_params = BladeParams::default();
    let (blade, before) = fresh_blade(&mut kernel);

    // A cutter deeper than the whole head empties the base in the mock,
    // which fails every subtraction.
    let absurd = GrooveParams {
        depth: 1_000.0,
        ..GrooveParams::default()
    };
    let outcome = cut_grooves(&mut kernel, blade, &absurd, &blade_params, LOFT).unwrap();

    assert_eq!(outcome.warnings.len(), 12);
    assert_eq!(outcome.warnings[0].feature, "groove 0");
    let after = kernel.volume(&outcome.solid).unwrap();
    assert!((after - before).abs() < 1e-9, "blade must be unchanged");
}

#[test]
fn zero_groove_request_is_a_no_op() {
    let mut kernel = MockKernel::new();
    let blade_params = BladeParams::default();
    let (blade, before) = fresh_blade(&mut kernel);

    let none = GrooveParams {
        count: 0,
        ..GrooveParams::default()
    };
    let outcome = cut_grooves(&mut kernel, blade, &none, &blade_params, LOFT).unwrap();
    assert_eq!(outcome.layout.actual, 0);
    assert!(outcome.warnings.is_empty());
    assert!((kernel.volume(&outcome.solid).unwrap() - before).abs() < 1e-9);
}

// ── Sole ───────────────────────────────────────────────────────────────

#[test]
fn sole_slab_volume_and_tilt() {
    let mut kernel = MockKernel::new();
    let params = SoleParams::default();
    let sole = build_sole(&mut kernel, &params, 74.0, 8.0).unwrap();
    assert!(sole.warnings.is_empty());

    let volume = kernel.volume(&sole.solid).unwrap();
    assert!(
        (volume - 73.0 * params.width_center * 3.0).abs() < 1e-9,
        "volume {volume}"
    );

    let (min, max) = kernel.bounding_box(&sole.solid).unwrap();
    assert!(max[2] > 0.0, "bounce must lift the trailing side");
    assert!(min[2] < 0.0, "the slab hangs below the sole plane");
    assert!(min[2] > -3.001, "the leading-edge pivot holds the front down");
    assert!(max[0] < 37.0, "slab stays short of the blade ends");
}

#[test]
fn sole_finishing_sizes_follow_the_relief_angles() {
    let mut kernel = MockKernel::new();
    let params = SoleParams::default();
    build_sole(&mut kernel, &params, 74.0, 8.0).unwrap();

    assert_eq!(
        kernel.applied_finishing,
        vec![
            (
                "fillet",
                EdgeSelector::XParallelFrontmost,
                params.leading_edge_radius
            ),
            ("chamfer", EdgeSelector::MinXEnd, params.heel_relief_angle * 0.5),
            ("chamfer", EdgeSelector::MaxXEnd, params.toe_relief_angle * 0.5),
        ]
    );
}

#[test]
fn sole_relief_failures_are_independent_warnings() {
    let mut kernel = MockKernel::new().with_refused_finishing();
    let sole = build_sole(&mut kernel, &SoleParams::default(), 74.0, 8.0).unwrap();

    assert_eq!(sole.warnings.len(), 3);
    let features: Vec<&str> = sole.warnings.iter().map(|w| w.feature.as_str()).collect();
    assert_eq!(
        features,
        ["leading edge rounding", "heel relief", "toe relief"]
    );
    // Slab itself survives.
    assert!(kernel.volume(&sole.solid).unwrap() > 0.0);
}

#[test]
fn flat_grind_skips_finishing_entirely() {
    let mut kernel = MockKernel::new().with_refused_finishing();
    let params = SoleParams {
        leading_edge_radius: 0.0,
        heel_relief_angle: 0.0,
        toe_relief_angle: 0.0,
        ..SoleParams::default()
    };
    let sole = build_sole(&mut kernel, &params, 74.0, 8.0).unwrap();
    assert!(sole.warnings.is_empty());
}

// ── Hosel placement and fuse ───────────────────────────────────────────

#[test]
fn hosel_seats_on_the_lofted_face_below_the_topline() {
    let mut kernel = MockKernel::new();
    let blade_params = BladeParams::default();
    // A bare barrel keeps the centroid math exact.
    let barrel = kernel.make_cylinder(7.25, 42.0).unwrap();

    // Lie 90 keeps the barrel vertical, isolating the translation.
    let placed = place_hosel(&mut kernel, barrel, &blade_params, LOFT, 90.0).unwrap();
    let c = kernel.center_of_mass(&placed).unwrap();

    assert!((c[0] + 29.0).abs() < 1e-9, "hosel axis insets from the heel");

    let base_y = c[1];
    let base_z = c[2] - 21.0;
    assert!(
        (base_y / base_z - LOFT.to_radians().tan()).abs() < 1e-9,
        "base must sit on the lofted face ray"
    );
    let seat = (base_y * base_y + base_z * base_z).sqrt();
    assert!(
        seat > 35.0 && seat < blade_params.face_height,
        "base seats below the topline, got {seat}"
    );
}

#[test]
fn lie_tilt_swings_the_barrel_about_its_base() {
    let mut kernel = MockKernel::new();
    let blade_params = BladeParams::default();

    let vertical = kernel.make_cylinder(7.25, 42.0).unwrap();
    let vertical = place_hosel(&mut kernel, vertical, &blade_params, LOFT, 90.0).unwrap();
    let upright = kernel.center_of_mass(&vertical).unwrap();

    let tilted = kernel.make_cylinder(7.25, 42.0).unwrap();
    let tilted = place_hosel(&mut kernel, tilted, &blade_params, LOFT, 64.0).unwrap();
    let leaned = kernel.center_of_mass(&tilted).unwrap();

    let tilt = (90f64 - 64.0).to_radians();
    // Centroid sits 21 mm up the barrel axis from the shared base point.
    assert!((leaned[0] - upright[0]).abs() < 1e-9);
    assert!((leaned[1] - (upright[1] + 21.0 * tilt.sin())).abs() < 1e-9);
    assert!((leaned[2] - (upright[2] - 21.0 + 21.0 * tilt.cos())).abs() < 1e-9);
}

#[test]
fn fused_head_collects_all_three_volumes() {
    let mut kernel = MockKernel::new();
    let blade_params = BladeParams::default();

    let blade = build_blade(&mut kernel, &blade_params, LOFT).unwrap();
    let sole = build_sole(&mut kernel, &SoleParams::default(), blade_params.length, 8.0).unwrap();
    let hosel = build_hosel(&mut kernel, &HoselParams::default()).unwrap();
    let hosel = place_hosel(&mut kernel, hosel, &blade_params, LOFT, 64.0).unwrap();

    let vb = kernel.volume(&blade.solid).unwrap();
    let vs = kernel.volume(&sole.solid).unwrap();
    let vh = kernel.volume(&hosel).unwrap();

    let head = fuse_head(&mut kernel, blade.solid, sole.solid, hosel).unwrap();
    let total = kernel.volume(&head).unwrap();
    assert!(
        (total - (vb + vs + vh)).abs() < 1e-9,
        "fused volume {total} vs parts {}",
        vb + vs + vh
    );
    assert!(kernel.is_valid(&head).unwrap());
}
