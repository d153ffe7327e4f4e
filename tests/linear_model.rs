use dynstab::{
    linearize_sweep, AircraftModel, DynamicsError, FlightCondition, LinearModel,
};
use pretty_assertions::assert_eq;

fn cruise() -> FlightCondition {
    FlightCondition::level(1.225, 60.0, 0.18)
}

#[test]
fn twin_otter_linearizes_cleanly() {
    let model = AircraftModel::twin_otter();
    let linear = LinearModel::new(&model, &cruise()).unwrap();

    assert!(linear.a_lon.iter().all(|x| x.is_finite()));
    assert!(linear.b_lon.iter().all(|x| x.is_finite()));
    assert!(linear.a_lat.iter().all(|x| x.is_finite()));
    assert!(linear.b_lat.iter().all(|x| x.is_finite()));

    // Stable aircraft: pitch damping and roll damping are negative.
    assert!(linear.a_lon[(2, 2)] < 0.0);
    assert!(linear.a_lat[(2, 2)] < 0.0);
}

#[test]
fn repeat_linearization_is_bit_identical() {
    let model = AircraftModel::twin_otter();
    let first = LinearModel::new(&model, &cruise()).unwrap();
    let second = LinearModel::new(&model, &cruise()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rejects_non_positive_airspeed() {
    let model = AircraftModel::twin_otter();
    let grounded = FlightCondition::level(1.225, 0.0, 0.0);
    assert!(matches!(
        LinearModel::new(&model, &grounded),
        Err(DynamicsError::NonPositiveAirspeed(_))
    ));
}

#[test]
fn rejects_non_positive_mass_and_inertia() {
    let mut model = AircraftModel::twin_otter();
    model.mass.mass = -10.0;
    assert!(matches!(
        LinearModel::new(&model, &cruise()),
        Err(DynamicsError::NonPositiveMass(_))
    ));

    let mut model = AircraftModel::twin_otter();
    model.mass.iyy = 0.0;
    assert!(matches!(
        LinearModel::new(&model, &cruise()),
        Err(DynamicsError::NonPositiveInertia { axis: "Iyy", .. })
    ));
}

#[test]
fn rejects_singular_inertia_coupling() {
    let mut model = AircraftModel::twin_otter();
    // i1 * i2 = ixz^2 / (ixx * izz) = 1 makes the primed transform blow up.
    model.mass.ixx = 100.0;
    model.mass.izz = 100.0;
    model.mass.ixz = 100.0;
    assert!(matches!(
        LinearModel::new(&model, &cruise()),
        Err(DynamicsError::SingularInertiaCoupling(_))
    ));
}

#[test]
fn rejects_singular_normal_feedback() {
    let mut model = AircraftModel::twin_otter();
    // Choose cl_alpha_dot = -2 mu so that Z_wdot = 1 exactly.
    let mu = 2.0 * model.mass.mass
        / (1.225 * model.geometry.wing_area * model.geometry.mac);
    model.longitudinal.c_l_alpha_dot = -2.0 * mu;
    assert!(matches!(
        LinearModel::new(&model, &cruise()),
        Err(DynamicsError::SingularNormalFeedback(_))
    ));
}

#[test]
fn sweep_matches_individual_builds_in_order() {
    let model = AircraftModel::twin_otter();
    let conditions: Vec<FlightCondition> = (4..=10)
        .map(|v| FlightCondition::level(1.225, v as f64 * 10.0, v as f64 * 0.03))
        .collect();

    let swept = linearize_sweep(&model, &conditions);
    assert_eq!(swept.len(), conditions.len());

    for (result, condition) in swept.iter().zip(&conditions) {
        let direct = LinearModel::new(&model, condition).unwrap();
        assert_eq!(result.as_ref().unwrap(), &direct);
    }
}
