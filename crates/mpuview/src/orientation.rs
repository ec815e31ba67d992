/// Last successfully validated orientation, in render axes, in degrees.
///
/// Starts at zero and is only ever replaced as a whole by the poller. A
/// rejected report leaves it unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationState {
    /// Rotation about the render X axis.
    pub x: f32,
    /// Rotation about the render Y axis.
    pub y: f32,
    /// Rotation about the render Z axis.
    pub z: f32,
}

impl OrientationState {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub(crate) fn replace(&mut self, next: OrientationState) {
        *self = next;
    }

    /// The three rotations as `[x, y, z]`.
    pub fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(OrientationState::default(), OrientationState::ZERO);
    }

    #[test]
    fn replace_swaps_all_fields() {
        let mut state = OrientationState::ZERO;
        state.replace(OrientationState::new(1.0, 2.0, 3.0));
        assert_eq!(state.as_array(), [1.0, 2.0, 3.0]);
    }
}
