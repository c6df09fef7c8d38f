use bevy::prelude::*;

/// A spell projectile in flight. Direction, speed and range are fixed at
/// fire time; `travelled` only ever grows.
#[derive(Component, Reflect, Default, Debug, Clone)]
#[reflect(Component, Default)]
pub struct Projectile {
    /// Unit travel direction.
    pub direction: Vec3,
    /// World units per second.
    pub speed: f32,
    /// Travel distance after which the projectile expires.
    pub max_distance: f32,
    /// Euclidean distance accumulated so far.
    pub travelled: f32,
    /// Position after the previous tick's move.
    pub last_position: Vec3,
}

impl Projectile {
    pub fn new(direction: Vec3, speed: f32, max_distance: f32, origin: Vec3) -> Self {
        Self {
            direction,
            speed,
            max_distance,
            travelled: 0.0,
            last_position: origin,
        }
    }

    /// Whether the projectile has covered its allowed range. Checked at the
    /// start of a tick, before any movement.
    pub fn range_exhausted(&self) -> bool {
        self.travelled >= self.max_distance
    }

    /// Advances the position one tick and accumulates the distance actually
    /// moved. Returns the position held before the move, which is where a
    /// trail tip belongs this tick.
    pub fn advance(&mut self, translation: &mut Vec3, delta_secs: f32) -> Vec3 {
        let before = *translation;
        *translation += self.direction * self.speed * delta_secs;
        self.travelled += translation.distance(self.last_position);
        self.last_position = *translation;
        before
    }
}

/// The actor that fired the projectile. Identity only: the entity may die
/// while the projectile is still in flight.
#[derive(Component, Reflect)]
#[reflect(Component, Default)]
pub struct ProjectileSender(pub Entity);

impl Default for ProjectileSender {
    fn default() -> Self {
        Self(Entity::PLACEHOLDER)
    }
}

/// Marker: the projectile already touched its sender once and the pair has
/// been reported for suppression. Contacts with the sender never terminate.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct SenderContactIgnored;

/// On a projectile: handle to its moving trail tip. Presence of this
/// component is the trail-enabled flag, baked in at fire time.
#[derive(Component, Reflect)]
#[reflect(Component, Default)]
pub struct ProjectileTrail {
    pub tip: Entity,
}

impl Default for ProjectileTrail {
    fn default() -> Self {
        Self {
            tip: Entity::PLACEHOLDER,
        }
    }
}

/// Marker: trail anchor or tip point.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct TrailPoint;

/// Line connecting the trail's fixed start point to its moving tip.
#[derive(Component, Reflect)]
#[reflect(Component, Default)]
pub struct TrailLine {
    pub start: Entity,
    pub end: Entity,
}

impl Default for TrailLine {
    fn default() -> Self {
        Self {
            start: Entity::PLACEHOLDER,
            end: Entity::PLACEHOLDER,
        }
    }
}

/// Companion entities (points, line) owned by a projectile. Despawned with
/// their projectile on termination.
#[derive(Component, Reflect)]
#[reflect(Component, Default)]
pub struct TrailOf(pub Entity);

impl Default for TrailOf {
    fn default() -> Self {
        Self(Entity::PLACEHOLDER)
    }
}
