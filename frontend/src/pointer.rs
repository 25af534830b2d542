//! Pointer-follow ("magnetic") motion and the derived 3D tilt.

use crate::spring::{Spring, SpringConfig};

/// Longest frame we integrate in one go; anything slower (a background tab
/// coming back) is treated as this.
pub const MAX_FRAME_DT: f64 = 1.0 / 15.0;

pub const DEFAULT_FRAME_DT: f64 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Rotation in degrees, ready for `rotateX()` / `rotateY()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerOptions {
    /// Fraction of the pointer's distance from center the element moves.
    pub strength: f64,
    pub spring: SpringConfig,
    /// Offset (in px) that produces the full tilt angle.
    pub tilt_range: f64,
    pub max_tilt_deg: f64,
}

impl Default for FollowerOptions {
    fn default() -> Self {
        Self {
            strength: 0.2,
            spring: SpringConfig::default(),
            tilt_range: 60.0,
            max_tilt_deg: 10.0,
        }
    }
}

/// What a component needs to paint one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowerFrame {
    pub offset: Vec2,
    pub tilt: Tilt,
}

/// Offset of `pointer` from the center of `rect`, scaled by `strength`.
///
/// An axis with zero or non-finite extent, or a non-finite coordinate, gives
/// zero on that axis.
pub fn relative_offset(rect: Rect, pointer: Vec2, strength: f64) -> Vec2 {
    let axis = |start: f64, extent: f64, at: f64| {
        if !(extent > 0.0) || !extent.is_finite() || !start.is_finite() || !at.is_finite() {
            return 0.0;
        }
        let value = (at - (start + extent / 2.0)) * strength;
        if value.is_finite() {
            value
        } else {
            0.0
        }
    };
    Vec2 {
        x: axis(rect.left, rect.width, pointer.x),
        y: axis(rect.top, rect.height, pointer.y),
    }
}

/// Linear map from `[in_min, in_max]` to `[out_min, out_max]`, clamped to the
/// output range.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if !value.is_finite() || in_max == in_min {
        return (out_min + out_max) / 2.0;
    }
    let t = ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

pub fn tilt_for(offset: Vec2, range: f64, max_deg: f64) -> Tilt {
    Tilt {
        // Pointer below center tips the top edge away from the viewer.
        rotate_x: map_range(offset.y, -range, range, max_deg, -max_deg),
        rotate_y: map_range(offset.x, -range, range, -max_deg, max_deg),
    }
}

pub struct PointerFollower {
    options: FollowerOptions,
    x: Spring,
    y: Spring,
    mounted: bool,
}

impl PointerFollower {
    pub fn new(options: FollowerOptions) -> Self {
        Self {
            options,
            x: Spring::new(options.spring),
            y: Spring::new(options.spring),
            mounted: true,
        }
    }

    /// Sets the spring targets from a pointer position over `rect`.
    pub fn pointer_move(&mut self, rect: Rect, pointer: Vec2) -> Vec2 {
        if !self.mounted {
            return self.target();
        }
        let target = relative_offset(rect, pointer, self.options.strength);
        self.retarget(target);
        target
    }

    pub fn pointer_leave(&mut self) {
        if self.mounted {
            self.retarget(Vec2::ZERO);
        }
    }

    fn retarget(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    /// Advances both springs by one frame. Returns `true` while another frame
    /// is needed.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.mounted {
            return false;
        }
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            DEFAULT_FRAME_DT
        };
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position())
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn tilt(&self) -> Tilt {
        tilt_for(self.offset(), self.options.tilt_range, self.options.max_tilt_deg)
    }

    pub fn frame(&self) -> FollowerFrame {
        FollowerFrame {
            offset: self.offset(),
            tilt: self.tilt(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn offset_scales_distance_from_center(
            left in -2000.0f64..2000.0,
            top in -2000.0f64..2000.0,
            width in 1.0f64..1200.0,
            height in 1.0f64..1200.0,
            dx in -600.0f64..600.0,
            dy in -600.0f64..600.0,
            strength in 0.0f64..1.0,
        ) {
            let rect = Rect::new(left, top, width, height);
            let pointer = Vec2::new(left + width / 2.0 + dx, top + height / 2.0 + dy);
            let offset = relative_offset(rect, pointer, strength);
            prop_assert!((offset.x - dx * strength).abs() < 1e-6);
            prop_assert!((offset.y - dy * strength).abs() < 1e-6);
        }

        #[test]
        fn tilt_stays_within_max_angle(x in proptest::num::f64::ANY, y in proptest::num::f64::ANY) {
            let tilt = tilt_for(Vec2::new(x, y), 60.0, 10.0);
            prop_assert!(tilt.rotate_x.abs() <= 10.0);
            prop_assert!(tilt.rotate_y.abs() <= 10.0);
        }

        #[test]
        fn release_never_overshoots(dx in -400.0f64..400.0, dy in -400.0f64..400.0) {
            let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
            let mut follower = PointerFollower::new(FollowerOptions::default());
            follower.pointer_move(rect, Vec2::new(100.0 + dx, 50.0 + dy));
            while follower.tick(DEFAULT_FRAME_DT) {}
            let start = follower.offset();
            follower.pointer_leave();
            while follower.tick(DEFAULT_FRAME_DT) {
                let now = follower.offset();
                prop_assert!(now.x.abs() <= start.x.abs() && now.x * start.x >= 0.0);
                prop_assert!(now.y.abs() <= start.y.abs() && now.y * start.y >= 0.0);
            }
            prop_assert_eq!(follower.offset(), Vec2::ZERO);
        }
    }
}
