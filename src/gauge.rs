//! Circular BMI gauge model
//!
//! The gauge shows BMI on a 0-50 scale as a 270° arc starting at 225°
//! and sweeping clockwise, filled with a cyan→amber→coral gradient.
//! Changes animate with an ease-out-cubic curve over 800ms. Terminals get
//! a horizontal rendering of the same arc via [`render_bar`].

use colored::*;
use std::time::Duration;

use crate::bmi::DisplayColor;

/// Highest value the gauge can display
pub const MAX_GAUGE_VALUE: f64 = 50.0;

/// Arc start angle in degrees (counter-clockwise from 3 o'clock)
pub const START_ANGLE_DEG: f64 = 225.0;

/// Arc length of a full gauge in degrees
pub const SPAN_DEG: f64 = 270.0;

/// Duration of one gauge animation
pub const ANIMATION_DURATION: Duration = Duration::from_millis(800);

/// Gradient stops as (position, color)
const GRADIENT: [(f64, DisplayColor); 3] = [
    (0.0, DisplayColor::Cyan),
    (0.5, DisplayColor::Amber),
    (1.0, DisplayColor::Coral),
];

/// Clamp a BMI to the displayable range
pub fn clamp_value(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_GAUGE_VALUE)
}

/// Filled share of the arc, 0.0 to 1.0
pub fn fraction(value: f64) -> f64 {
    clamp_value(value) / MAX_GAUGE_VALUE
}

/// Signed sweep in degrees; negative is clockwise
pub fn sweep_degrees(value: f64) -> f64 {
    -SPAN_DEG * fraction(value)
}

/// Angle where the filled arc ends
pub fn end_angle(value: f64) -> f64 {
    START_ANGLE_DEG + sweep_degrees(value)
}

/// Ease-out-cubic: fast start, soft landing
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Gradient color at position `t` along the arc
pub fn gradient_at(t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    for pair in GRADIENT.windows(2) {
        let (start, from) = pair[0];
        let (end, to) = pair[1];
        if t <= end {
            let local = (t - start) / (end - start);
            return lerp_rgb(from.rgb(), to.rgb(), local);
        }
    }
    GRADIENT[GRADIENT.len() - 1].1.rgb()
}

fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    (channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// Draw the gauge as a `width`-cell bar, each filled cell colored by
/// its position in the gradient
pub fn render_bar(value: f64, width: usize) -> String {
    let filled = (fraction(value) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 4);

    for cell in 0..width {
        if cell < filled {
            let (r, g, b) = gradient_at(cell as f64 / width.max(1) as f64);
            bar.push_str(&"█".truecolor(r, g, b).to_string());
        } else {
            bar.push_str(&"░".dimmed().to_string());
        }
    }

    bar
}

/// Gauge state: the currently displayed value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gauge {
    value: f64,
}

impl Gauge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Start an animation from the current value to `target`.
    ///
    /// The gauge jumps to the clamped target immediately; the returned
    /// animation carries the in-between values for drawing.
    pub fn animate_to(&mut self, target: f64) -> GaugeAnimation {
        let animation = GaugeAnimation {
            from: self.value,
            to: clamp_value(target),
        };
        self.value = animation.to;
        animation
    }
}

/// One transition between two gauge values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeAnimation {
    pub from: f64,
    pub to: f64,
}

impl GaugeAnimation {
    /// Value at normalized time `t` (0.0 to 1.0)
    pub fn value_at(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// `count` evenly timed frames; the last one is exactly the target
    pub fn frames(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }

        (1..=count)
            .map(|i| {
                if i == count {
                    self.to
                } else {
                    self.value_at(i as f64 / count as f64)
                }
            })
            .collect()
    }

    /// Delay between frames for `count` frames across the full duration
    pub fn frame_interval(count: usize) -> Duration {
        ANIMATION_DURATION / count.max(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_fifty() {
        assert_eq!(clamp_value(72.0), 50.0);
        assert_eq!(clamp_value(-1.0), 0.0);
        assert_eq!(clamp_value(f64::NAN), 0.0);
        assert_eq!(fraction(25.0), 0.5);
    }

    #[test]
    fn test_sweep_geometry() {
        assert_eq!(sweep_degrees(0.0), 0.0);
        assert_eq!(sweep_degrees(50.0), -270.0);
        assert_eq!(end_angle(50.0), -45.0);
        assert_eq!(end_angle(25.0), 90.0);
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn test_gradient_stops() {
        assert_eq!(gradient_at(0.0), DisplayColor::Cyan.rgb());
        assert_eq!(gradient_at(0.5), DisplayColor::Amber.rgb());
        assert_eq!(gradient_at(1.0), DisplayColor::Coral.rgb());
    }

    #[test]
    fn test_animation_frames_end_on_target() {
        let mut gauge = Gauge::new();
        let animation = gauge.animate_to(22.9);
        let frames = animation.frames(16);

        assert_eq!(frames.len(), 16);
        assert_eq!(*frames.last().unwrap(), 22.9);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(gauge.value(), 22.9);
    }

    #[test]
    fn test_animation_starts_from_previous_value() {
        let mut gauge = Gauge::new();
        gauge.animate_to(40.0);
        let animation = gauge.animate_to(60.0);
        assert_eq!(animation.from, 40.0);
        assert_eq!(animation.to, 50.0);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(GaugeAnimation::frame_interval(16), Duration::from_millis(50));
        assert!(GaugeAnimation { from: 0.0, to: 1.0 }.frames(0).is_empty());
    }

    #[test]
    fn test_render_bar_fill() {
        colored::control::set_override(false);
        let bar = render_bar(25.0, 10);
        assert_eq!(bar.matches('█').count(), 5);
        assert_eq!(bar.matches('░').count(), 5);
    }
}
