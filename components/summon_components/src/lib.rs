use bevy::prelude::*;

/// Marker: a summoned ally.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Ally;

/// Owned handle to the caster's single summoned ally. The previous occupant
/// is despawned before a replacement spawns, so no scene-wide search is ever
/// needed to enforce the one-ally rule.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct AllySlot(pub Option<Entity>);
