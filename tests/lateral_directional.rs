mod common;

use approx::assert_relative_eq;
use dynstab::systems::lateral_directional as lat;
use dynstab::systems::{
    build_lateral_directional_control_matrix, build_lateral_directional_state_matrix,
};
use dynstab::{
    LateralDirectionalCoefficients, LateralDirectionalControlCoefficients, MassProperties,
};

use common::{reference_condition, reference_geometry, reference_mass};

fn reference_lateral() -> LateralDirectionalCoefficients {
    LateralDirectionalCoefficients {
        c_y_beta: -0.9,
        c_y_p: -0.1,
        c_y_r: 1.6,
        c_l_beta: -0.11,
        c_l_p: -0.42,
        c_l_r: 0.19,
        c_n_beta: 0.09,
        c_n_p: -0.04,
        c_n_r: -0.43,
    }
}

fn reference_controls() -> LateralDirectionalControlCoefficients {
    LateralDirectionalControlCoefficients {
        c_y_delta_a: -0.05,
        c_y_delta_r: -0.19,
        c_l_delta_a: 0.21,
        c_l_delta_r: 0.12,
        c_n_delta_a: 0.02,
        c_n_delta_r: -0.09,
    }
}

fn coupled_mass() -> MassProperties {
    MassProperties::new(15000.0, 80000.0, 120000.0, 180000.0, 4200.0)
}

#[test]
fn zero_product_of_inertia_reduces_primed_to_unprimed() {
    let cond = reference_condition();
    let geom = reference_geometry();
    let mass = reference_mass(); // ixz = 0
    let coeffs = reference_lateral();

    let a = build_lateral_directional_state_matrix(&cond, &geom, &mass, &coeffs);

    // State order [r, beta, p, phi]: row 0 holds N', row 2 holds L'.
    assert_relative_eq!(a[(0, 0)], lat::n_r(&cond, &geom, &mass, &coeffs), max_relative = 1e-12);
    assert_relative_eq!(a[(0, 1)], lat::n_beta(&cond, &geom, &mass, &coeffs), max_relative = 1e-12);
    assert_relative_eq!(a[(0, 2)], lat::n_p(&cond, &geom, &mass, &coeffs), max_relative = 1e-12);
    assert_relative_eq!(a[(2, 0)], lat::l_r(&cond, &geom, &mass, &coeffs), max_relative = 1e-12);
    assert_relative_eq!(a[(2, 1)], lat::l_beta(&cond, &geom, &mass, &coeffs), max_relative = 1e-12);
    assert_relative_eq!(a[(2, 2)], lat::l_p(&cond, &geom, &mass, &coeffs), max_relative = 1e-12);
}

#[test]
fn coupling_transform_round_trips_through_the_matrix() {
    let cond = reference_condition();
    let geom = reference_geometry();
    let mass = coupled_mass();
    let coeffs = reference_lateral();

    let (i1, i2) = mass.coupling_ratios();
    let a = build_lateral_directional_state_matrix(&cond, &geom, &mass, &coeffs);

    // A[(2,1)] is L'_beta; undoing the transform must recover L_beta.
    let l_beta = lat::l_beta(&cond, &geom, &mass, &coeffs);
    let n_beta = lat::n_beta(&cond, &geom, &mass, &coeffs);
    assert_relative_eq!(
        (1.0 - i1 * i2) * a[(2, 1)] - i1 * n_beta,
        l_beta,
        max_relative = 1e-12
    );
    // And A[(0,1)] is N'_beta.
    assert_relative_eq!(
        (1.0 - i1 * i2) * a[(0, 1)] - i2 * l_beta,
        n_beta,
        max_relative = 1e-12
    );
}

#[test]
fn sideslip_row_scales_side_force_by_airspeed() {
    let cond = reference_condition();
    let geom = reference_geometry();
    let mass = coupled_mass();
    let coeffs = reference_lateral();

    let a = build_lateral_directional_state_matrix(&cond, &geom, &mass, &coeffs);
    let u0 = cond.airspeed;

    assert_relative_eq!(
        a[(1, 0)],
        lat::y_r(&cond, &geom, &mass, &coeffs) / u0 - 1.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        a[(1, 1)],
        lat::y_beta(&cond, &geom, &mass, &coeffs) / u0,
        max_relative = 1e-12
    );
    assert_relative_eq!(a[(1, 3)], 9.8100 * cond.theta.cos() / u0, max_relative = 1e-12);
}

#[test]
fn kinematic_row_holds_bank_angle_geometry() {
    for theta in [0.0, 0.15, -0.3] {
        let mut cond = reference_condition();
        cond.theta = theta;

        let a = build_lateral_directional_state_matrix(
            &cond,
            &reference_geometry(),
            &coupled_mass(),
            &reference_lateral(),
        );

        assert_relative_eq!(a[(3, 0)], theta.tan(), max_relative = 1e-12);
        assert_eq!(a[(3, 1)], 0.0);
        assert_eq!(a[(3, 2)], 1.0);
        assert_eq!(a[(3, 3)], 0.0);
    }
}

#[test]
fn control_matrix_applies_the_same_coupling() {
    let cond = reference_condition();
    let geom = reference_geometry();
    let mass = coupled_mass();
    let ctrl = reference_controls();

    let (i1, i2) = mass.coupling_ratios();
    let b = build_lateral_directional_control_matrix(&cond, &geom, &mass, &ctrl);

    let l_da = lat::l_delta_a(&cond, &geom, &mass, &ctrl);
    let n_da = lat::n_delta_a(&cond, &geom, &mass, &ctrl);
    assert_relative_eq!(b[(0, 0)], (i2 * l_da + n_da) / (1.0 - i1 * i2), max_relative = 1e-12);
    assert_relative_eq!(b[(2, 0)], (l_da + i1 * n_da) / (1.0 - i1 * i2), max_relative = 1e-12);
    assert_relative_eq!(
        b[(1, 1)],
        lat::y_delta_r(&cond, &geom, &mass, &ctrl) / cond.airspeed,
        max_relative = 1e-12
    );
    assert_eq!(b[(3, 0)], 0.0);
    assert_eq!(b[(3, 1)], 0.0);
}
