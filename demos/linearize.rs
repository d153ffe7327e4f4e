use dynstab::{linearize_sweep, AircraftModel, FlightCondition, LinearModel};

fn main() {
    println!("--- Small-Perturbation Linearization Example ---");

    let model = AircraftModel::twin_otter();
    let condition = FlightCondition::level(1.225, 60.0, 0.18);

    println!(
        "\nAircraft: {} | u0 = {:.1} m/s, q0 = {:.1} Pa, M = {:.2}",
        model.name, condition.airspeed, condition.dynamic_pressure, condition.mach
    );

    let linear = match LinearModel::new(&model, &condition) {
        Ok(linear) => linear,
        Err(e) => {
            eprintln!("Linearization failed: {}", e);
            return;
        }
    };

    println!("\nLongitudinal A matrix (states [u, w, q, theta]):\n{}", linear.a_lon);
    println!("Longitudinal B matrix (controls [deltaT, deltaE]):\n{}", linear.b_lon);
    println!("Lateral-directional A matrix (states [r, beta, p, phi]):\n{}", linear.a_lat);
    println!("Lateral-directional B matrix (controls [deltaA, deltaR]):\n{}", linear.b_lat);

    // Speed sweep: conditions are independent, so the sweep runs in parallel.
    let conditions: Vec<FlightCondition> = (4..=10)
        .map(|v| {
            let airspeed = v as f64 * 10.0;
            FlightCondition::level(1.225, airspeed, airspeed / 340.3)
        })
        .collect();

    println!("--- Speed sweep ---");
    println!("{:>8} {:>12} {:>12} {:>12}", "u0", "X_u", "M_q + kZq", "L'_p");
    for (condition, result) in conditions.iter().zip(linearize_sweep(&model, &conditions)) {
        match result {
            Ok(linear) => println!(
                "{:>8.1} {:>12.5} {:>12.5} {:>12.5}",
                condition.airspeed,
                linear.a_lon[(0, 0)],
                linear.a_lon[(2, 2)],
                linear.a_lat[(2, 2)],
            ),
            Err(e) => println!("{:>8.1} failed: {}", condition.airspeed, e),
        }
    }
}
