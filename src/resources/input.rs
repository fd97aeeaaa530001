//! Host-written steering intent.
//!
//! Joystick and keyboard hardware belong to the host; the simulation only
//! sees this resource. The host writes a normalized vertical axis each
//! frame and the controls system turns it into player movement while
//! steering is enabled in the
//! [`GameConfig`](crate::resources::gameconfig::GameConfig).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ControlIntent {
    /// Vertical steering in `[-1, 1]`; positive pulls the glider up.
    pub vertical: f32,
}

impl ControlIntent {
    pub fn clamped_vertical(&self) -> f32 {
        self.vertical.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_axis_is_clamped() {
        let intent = ControlIntent { vertical: 3.0 };
        assert_eq!(intent.clamped_vertical(), 1.0);
        let intent = ControlIntent { vertical: -0.25 };
        assert_eq!(intent.clamped_vertical(), -0.25);
    }
}
