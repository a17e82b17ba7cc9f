// src/rc.rs

//! # RC Channel Mapping Module
//!
//! Pulse-width arithmetic for hosts that actuate the vehicle through RC
//! channel overrides. The controller's obligation ends at the bounded
//! rotation command and the forward-thrust flag; this module maps those to
//! pulse widths and override frames, and the transport that transmits the
//! frames stays outside the crate.

use crate::Number;

/// Pulse width, in microseconds, that leaves a channel at rest.
pub const NEUTRAL_PWM_US: i16 = 1500;
/// Pulse-width microseconds added per unit of rotation power.
pub const PWM_US_PER_POWER: i16 = 5;
/// Largest rotation power the vehicle accepts in either direction.
pub const POWER_LIMIT: i16 = 100;
/// RC channel that carries the rotation command.
pub const YAW_CHANNEL: u8 = 4;
/// RC channel that carries forward thrust while aligned.
pub const FORWARD_CHANNEL: u8 = 6;
/// Fixed forward power asserted while the heading is aligned.
pub const FORWARD_POWER: i16 = 20;
/// Number of override channels in a command frame.
// MAVLink 2 override frames carry up to 18 channels:
// https://mavlink.io/en/messages/common.html#RC_CHANNELS_OVERRIDE
pub const CHANNEL_COUNT: usize = 18;
/// Sentinel pulse width meaning "leave this channel unchanged".
pub const CHANNEL_UNCHANGED: u16 = 0xFFFF;

/// A full channel-override frame; undriven slots carry
/// [`CHANNEL_UNCHANGED`].
pub type OverrideFrame = [u16; CHANNEL_COUNT];

/// The requested channel index is outside `1..=18`.
#[derive(thiserror_no_std::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("channel does not exist")]
pub struct InvalidChannel;

/// Maps a rotation power to a pulse width, clamping to the power range.
pub fn power_to_pwm(power: i16) -> u16 {
    let power = power.clamp(-POWER_LIMIT, POWER_LIMIT);
    (NEUTRAL_PWM_US + power * PWM_US_PER_POWER) as u16
}

/// Truncates a rotation command into a power step on the pulse-width scale.
///
/// Saturates to the power range; a NaN command maps to the neutral pulse
/// width.
pub fn rotation_to_pwm<T: Number>(rotation: T) -> u16 {
    let limit = T::from_f64(POWER_LIMIT as f64);
    let power = Number::clamp(rotation, -limit, limit).trunc().to_i16().unwrap_or(0);
    power_to_pwm(power)
}

/// The fixed forward-thrust pulse width asserted while aligned.
pub fn forward_pwm() -> u16 {
    power_to_pwm(FORWARD_POWER)
}

/// Builds an override frame driving a single channel, leaving every other
/// channel unchanged.
pub fn channel_frame(channel: u8, pwm: u16) -> Result<OverrideFrame, InvalidChannel> {
    if channel < 1 || channel as usize > CHANNEL_COUNT {
        return Err(InvalidChannel);
    }

    let mut frame = [CHANNEL_UNCHANGED; CHANNEL_COUNT];
    frame[channel as usize - 1] = pwm;
    Ok(frame)
}
