//! Damped spring used by every pointer-driven animation on the page.
//!
//! Each [`Spring::step`] advances the exact solution of the damped harmonic
//! oscillator, so large or uneven frame times stay stable and springs with a
//! damping ratio of 1.0 or more never overshoot their target.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    /// 1.0 is critically damped, below oscillates, above is sluggish.
    pub damping_ratio: f64,
    pub mass: f64,
    /// Distance and speed under which the spring counts as settled.
    pub rest_epsilon: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 150.0,
            damping_ratio: 1.0,
            mass: 0.1,
            rest_epsilon: 0.01,
        }
    }
}

impl SpringConfig {
    /// Undamped angular frequency in rad/s.
    pub fn angular_frequency(&self) -> f64 {
        (self.stiffness.max(f64::EPSILON) / self.mass.max(f64::EPSILON)).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = if target.is_finite() { target } else { 0.0 };
    }

    pub fn is_settled(&self) -> bool {
        let eps = self.config.rest_epsilon;
        (self.position - self.target).abs() <= eps && self.velocity.abs() <= eps
    }

    /// Advances the spring by `dt` seconds. Returns `true` while it is still
    /// moving; once settled it snaps onto the target and returns `false`.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        if !(dt > 0.0) {
            return true;
        }

        let x0 = self.position - self.target;
        let v0 = self.velocity;
        let (x, v) = advance(x0, v0, dt, &self.config);

        if x.is_finite() && v.is_finite() {
            self.position = self.target + x;
            self.velocity = v;
        } else {
            log::warn!("spring diverged, snapping to target");
            self.position = self.target;
            self.velocity = 0.0;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Displacement and velocity after `t` seconds, starting from `x0`, `v0`.
fn advance(x0: f64, v0: f64, t: f64, config: &SpringConfig) -> (f64, f64) {
    let w = config.angular_frequency();
    let zeta = config.damping_ratio.max(0.0);

    if (zeta - 1.0).abs() < 1e-6 {
        let decay = (-w * t).exp();
        let b = v0 + w * x0;
        let x = (x0 + b * t) * decay;
        let v = (v0 - w * b * t) * decay;
        (x, v)
    } else if zeta < 1.0 {
        let wd = w * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * w * t).exp();
        let (sin, cos) = (wd * t).sin_cos();
        let b = (v0 + zeta * w * x0) / wd;
        let x = decay * (x0 * cos + b * sin);
        let v = decay * (v0 * cos - (zeta * w * v0 + w * w * x0) / wd * sin);
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w * (zeta - root);
        let r2 = -w * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}
