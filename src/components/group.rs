use bevy_ecs::prelude::Component;

/// Tag component naming the organizational family an entity belongs to.
///
/// Purely bookkeeping: pooled level entities are tagged with their pool's
/// family name (`"ground_chunks"`, `"air_streams"`) so debug tooling and
/// queries can tell the populations apart.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(&'static str);

impl Group {
    pub fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}
