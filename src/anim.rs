//! Spring interpolation for animated card padding.
//!
//! The event loop ticks every 16ms; each live spring is stepped once per
//! tick with semi-implicit Euler integration. A spring retargets in place
//! when its row is toggled mid-flight, so rapid toggling stays smooth
//! instead of snapping.

/// Damping ratio for the padding animation. Under 1.0, so the spring
/// overshoots its target and bounces before settling.
pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;

/// Stiffness for the padding animation. Low, for a slow, visible settle.
pub const STIFFNESS_LOW: f32 = 200.0;

/// How close position and velocity must be to the rest state before the
/// spring counts as settled.
const SETTLE_EPSILON: f32 = 0.01;

/// A damped spring tracking a single scalar value.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping_ratio: f32,
}

impl Spring {
    /// Create a spring at `value`, heading toward `target`, using the
    /// padding animation constants.
    pub fn new(value: f32, target: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target,
            stiffness: STIFFNESS_LOW,
            damping_ratio: DAMPING_RATIO_MEDIUM_BOUNCY,
        }
    }

    /// Current position. May overshoot past the target (and below zero)
    /// while the spring is in flight; callers clamp for display.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value this spring is converging to.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Point the spring at a new target, keeping position and velocity.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance the simulation by `dt` seconds and return the new position.
    ///
    /// Snaps to the target once both displacement and velocity are inside
    /// the settle epsilon, so a settled spring reports an exact value.
    pub fn step(&mut self, dt: f32) -> f32 {
        let displacement = self.value - self.target;
        let damping = 2.0 * self.damping_ratio * self.stiffness.sqrt();
        let accel = -self.stiffness * displacement - damping * self.velocity;

        self.velocity += accel * dt;
        self.value += self.velocity * dt;

        if (self.value - self.target).abs() < SETTLE_EPSILON
            && self.velocity.abs() < SETTLE_EPSILON
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }

    /// Whether the spring has come to rest exactly at its target.
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}
