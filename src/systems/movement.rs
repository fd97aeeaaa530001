use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate gravity into velocity and velocity into position, clamping
/// falling speed where a body asks for it.
pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    for (mut position, mut body) in query.iter_mut() {
        let gravity = RigidBody::GRAVITY * body.gravity_scale;
        body.velocity += gravity * time.delta;
        body.clamp_fall();
        position.pos += body.velocity * time.delta;
    }
}
