// demos/heading_hold.rs

use heading_hold::heading::wrap_to_pi;
use heading_hold::{HeadingHold, HeadingHoldConfig, HeadingStabilizer};

fn main() {
    let mut config = HeadingHoldConfig::<f32>::new();

    // Set the PID gains for yaw.
    config.kp = 35.0;
    config.ki = 0.05;
    config.kd = -10.0;

    // Set the operator-specified target heading: 45 degrees, in radians.
    config.target_heading = core::f32::consts::FRAC_PI_4;

    // Bound the rotation command to the actuator range.
    config.output_limit = 100.0;

    // Set the heading-hold stabilizer
    let mut stabilizer = HeadingHold::with_config(config).expect("valid configuration");

    // Simulated vehicle state
    let mut heading = -2.0_f32; // radians
    let mut heading_rate = 0.0_f32; // radians per second
    let dt = 0.1; // time step

    println!("               Heading,      Rate,  Rotation, Forward");
    let mut t = 0.0;
    for _ in 0..=20 {
        // Perform the control computation
        let command = stabilizer.control(heading, heading_rate);

        // print results
        println!(
            "t = {:4.1} {:-10.3} {:-10.3} {:-10.3}   {}",
            t, heading, heading_rate, command.rotation, command.go_forward
        );

        // simulate response
        heading_rate = command.rotation * 0.02;
        heading = wrap_to_pi(heading + heading_rate * dt);

        t += dt;
    }
}
