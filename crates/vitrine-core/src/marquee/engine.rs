//! Marquee controller: two bands, one shared velocity, friction decay.

use crate::config::MarqueeConfig;

use super::band::Band;
use super::input::{clamp_velocity, wheel_impulse, DragTracker};

/// Below this magnitude the marquee is considered at rest and the shell
/// may drop back to its idle tick rate.
pub const VELOCITY_EPSILON: f64 = 1e-3;

/// The two band offsets produced by one frame, in columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOffsets {
    pub top: f64,
    pub bottom: f64,
}

/// Marquee physics controller
///
/// Call the input methods from event handlers and [`MarqueeEngine::advance`]
/// once per animation frame. A positive velocity (forward scroll) pushes
/// the top band left and the bottom band right; friction multiplies the
/// velocity once per frame so it approaches zero without crossing sign.
#[derive(Debug, Clone)]
pub struct MarqueeEngine {
    top: Band,
    bottom: Band,
    velocity: f64,
    drag: DragTracker,
    config: MarqueeConfig,
}

impl MarqueeEngine {
    pub fn new(config: MarqueeConfig) -> Self {
        Self {
            top: Band::new(),
            bottom: Band::new(),
            velocity: 0.0,
            drag: DragTracker::new(),
            config,
        }
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current offsets without advancing the simulation.
    pub fn offsets(&self) -> FrameOffsets {
        FrameOffsets {
            top: self.top.offset(),
            bottom: self.bottom.offset(),
        }
    }

    /// Whether the bands are still visibly moving.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.velocity.abs() > VELOCITY_EPSILON
    }

    /// Record the rendered width of the top band's duplicated content.
    pub fn measure_top(&mut self, width: f64) {
        if (width - self.top.width()).abs() > f64::EPSILON {
            tracing::debug!(width, "top band re-measured");
        }
        self.top.set_width(width);
    }

    /// Record the rendered width of the bottom band's duplicated content.
    ///
    /// The first real measurement places the band half a loop out of
    /// phase, so the two ribbons do not start column-aligned.
    pub fn measure_bottom(&mut self, width: f64) {
        let first_measure = self.bottom.width() == 0.0 && width > 0.0;
        if (width - self.bottom.width()).abs() > f64::EPSILON {
            tracing::debug!(width, "bottom band re-measured");
        }
        self.bottom.set_width(width);
        if first_measure {
            self.bottom.set_offset(-self.bottom.half_width());
        }
    }

    /// Integrate a wheel event. A positive `delta_y` is a forward scroll.
    pub fn wheel(&mut self, delta_y: f64) {
        self.inject(wheel_impulse(delta_y, self.config.wheel_gain));
    }

    /// Start a drag gesture at vertical position `y`.
    pub fn drag_begin(&mut self, y: f64) {
        self.drag.begin(y);
    }

    /// Integrate a drag movement to vertical position `y`.
    pub fn drag_move(&mut self, y: f64) {
        let delta = self.drag.update(y);
        self.inject(delta * self.config.drag_gain);
    }

    /// End the current drag gesture.
    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    fn inject(&mut self, impulse: f64) {
        self.velocity = clamp_velocity(self.velocity + impulse, self.config.max_velocity);
    }

    /// Advance one frame: move both bands, wrap, decay velocity.
    ///
    /// There is no delta-time compensation; one call is one frame, and the
    /// caller sets the frame cadence.
    pub fn advance(&mut self) -> FrameOffsets {
        let step = self.velocity * self.config.base_speed;
        self.top.shift(-step);
        self.bottom.shift(step);
        self.velocity *= self.config.friction;
        self.offsets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MarqueeEngine {
        let mut engine = MarqueeEngine::new(MarqueeConfig::default());
        engine.measure_top(200.0);
        engine.measure_bottom(200.0);
        engine
    }

    #[test]
    fn test_opposite_directions() {
        let mut engine = engine();
        engine.wheel(50.0); // positive velocity
        let before = engine.offsets();
        let after = engine.advance();
        assert!(after.top < before.top, "top band moves left");
        assert!(after.bottom > before.bottom, "bottom band moves right");
    }

    #[test]
    fn test_friction_decay() {
        let mut engine = engine();
        engine.wheel(100.0);
        let initial = engine.velocity();
        assert!(initial > 0.0);

        let friction = MarqueeConfig::default().friction;
        for n in 1..=50 {
            engine.advance();
            let expected = initial * friction.powi(n);
            assert!((engine.velocity() - expected).abs() < 1e-9, "frame {}", n);
            assert!(engine.velocity() > 0.0, "never crosses sign");
        }
    }

    #[test]
    fn test_offsets_stay_wrapped() {
        let mut engine = engine();
        engine.wheel(300.0);
        for _ in 0..200 {
            let offsets = engine.advance();
            assert!((-100.0..=0.0).contains(&offsets.top));
            assert!((-100.0..=0.0).contains(&offsets.bottom));
        }
    }

    #[test]
    fn test_large_step_wraps_fully() {
        // A single frame moving further than one modulus still lands
        // inside the wrap range.
        let mut engine = MarqueeEngine::new(MarqueeConfig::default());
        engine.measure_top(40.0);
        engine.measure_bottom(40.0);
        engine.wheel(10_000.0); // clamped velocity still steps past half width
        let offsets = engine.advance();
        assert!((-20.0..=0.0).contains(&offsets.top));
        assert!((-20.0..=0.0).contains(&offsets.bottom));
    }

    #[test]
    fn test_velocity_clamp() {
        let max = MarqueeConfig::default().max_velocity;
        let mut engine = engine();
        for _ in 0..100 {
            engine.wheel(1_000.0);
        }
        assert!(engine.velocity() <= max);

        for _ in 0..100 {
            engine.wheel(-10_000.0);
        }
        assert!(engine.velocity() >= -max);
    }

    #[test]
    fn test_unmeasured_band_stays_finite() {
        let mut engine = MarqueeEngine::new(MarqueeConfig::default());
        engine.wheel(50.0);
        let offsets = engine.advance();
        // Without a measured width the offsets drift unwrapped but must
        // not produce NaN or panic.
        assert!(offsets.top.is_finite());
        assert!(offsets.bottom.is_finite());
    }

    #[test]
    fn test_bottom_band_phase_shift() {
        let mut engine = MarqueeEngine::new(MarqueeConfig::default());
        engine.measure_bottom(200.0);
        assert!((engine.offsets().bottom + 100.0).abs() < 1e-9);
        // Re-measuring keeps the offset wrapped instead of re-phasing.
        engine.measure_bottom(80.0);
        assert!((-40.0..=0.0).contains(&engine.offsets().bottom));
    }

    #[test]
    fn test_drag_integration() {
        let mut engine = engine();
        engine.drag_begin(100.0);
        engine.drag_move(80.0); // 20 columns upward
        let expected = 20.0 * MarqueeConfig::default().drag_gain;
        assert!((engine.velocity() - expected).abs() < 1e-9);
        engine.drag_end();
        engine.drag_move(0.0); // inert without an anchor
        assert!((engine.velocity() - expected).abs() < 1e-9);
    }
}
