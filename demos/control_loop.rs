// demos/control_loop.rs

use heading_hold::control_loop::{AttitudeSample, AttitudeSource, CommandSink, ControlLoop};
use heading_hold::rc;
use heading_hold::{HeadingCommand, HeadingHold, HeadingHoldConfig};

/// Pre-recorded attitude samples standing in for the telemetry stream.
struct RecordedTelemetry {
    samples: std::vec::IntoIter<AttitudeSample<f32>>,
}

struct EndOfRecording;

impl AttitudeSource<f32> for RecordedTelemetry {
    type Error = EndOfRecording;

    fn next_sample(&mut self) -> Result<AttitudeSample<f32>, EndOfRecording> {
        self.samples.next().ok_or(EndOfRecording)
    }
}

/// Prints the override frames a real transport would transmit.
struct FramePrinter;

impl CommandSink<f32> for FramePrinter {
    type Error = rc::InvalidChannel;

    fn send(&mut self, command: HeadingCommand<f32>) -> Result<(), rc::InvalidChannel> {
        let yaw = rc::channel_frame(rc::YAW_CHANNEL, rc::rotation_to_pwm(command.rotation))?;
        println!("    yaw frame:     {:?}", yaw);
        if command.go_forward {
            let forward = rc::channel_frame(rc::FORWARD_CHANNEL, rc::forward_pwm())?;
            println!("    forward frame: {:?}", forward);
        }
        Ok(())
    }
}

fn main() {
    let mut config = HeadingHoldConfig::<f32>::new();

    // Set the PID gains for yaw.
    config.kp = 35.0;
    config.ki = 0.05;
    config.kd = -10.0;

    // Steer toward zero radians.
    config.target_heading = 0.0;

    // Bound the rotation command to the actuator range.
    config.output_limit = 100.0;

    let stabilizer = HeadingHold::with_config(config).expect("valid configuration");

    // A vehicle swinging onto the target heading.
    let samples = vec![
        AttitudeSample {
            heading: 0.785,
            heading_rate: 0.0,
        },
        AttitudeSample {
            heading: 0.524,
            heading_rate: -0.35,
        },
        AttitudeSample {
            heading: 0.262,
            heading_rate: -0.40,
        },
        AttitudeSample {
            heading: 0.087,
            heading_rate: -0.25,
        },
        AttitudeSample {
            heading: 0.017,
            heading_rate: -0.10,
        },
    ];
    let source = RecordedTelemetry {
        samples: samples.into_iter(),
    };

    let mut control_loop = ControlLoop::new(stabilizer, source, FramePrinter);

    loop {
        match control_loop.run_cycle() {
            Ok(command) => {
                println!(
                    "rotation {:8.3}, forward {}\n",
                    command.rotation, command.go_forward
                );
            }
            Err(_) => break, // recording exhausted
        }
    }
}
