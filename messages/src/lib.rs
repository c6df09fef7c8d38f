use bevy::prelude::*;

pub struct MessagesPlugin;

impl Plugin for MessagesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<UnlockRequest>()
            .add_message::<CastSpellIntent>()
            .add_message::<SummonAllyIntent>()
            .add_message::<CollisionContact>()
            .add_message::<SuppressCollision>()
            .add_message::<ProjectileTerminated>()
            .register_type::<UnlockRequest>()
            .register_type::<CastSpellIntent>()
            .register_type::<SummonAllyIntent>()
            .register_type::<CollisionContact>()
            .register_type::<SuppressCollision>()
            .register_type::<ProjectileTerminated>();
    }
}

/// Request to unlock a spell for a caster. Refused silently (with a debug
/// log) when the prerequisite is not yet unlocked.
#[derive(Message, Reflect)]
#[reflect(Default)]
pub struct UnlockRequest {
    pub caster: Entity,
    pub spell_id: String,
}

impl Default for UnlockRequest {
    fn default() -> Self {
        Self {
            caster: Entity::PLACEHOLDER,
            spell_id: String::new(),
        }
    }
}

/// Fire a projectile toward a world-space target point. The point comes from
/// the host's cursor/world query layer and also bounds the travel range.
#[derive(Message, Reflect)]
#[reflect(Default)]
pub struct CastSpellIntent {
    pub caster: Entity,
    pub target_point: Vec3,
}

impl Default for CastSpellIntent {
    fn default() -> Self {
        Self {
            caster: Entity::PLACEHOLDER,
            target_point: Vec3::ZERO,
        }
    }
}

/// Summon the caster's ally at a world-space target point, replacing any
/// ally the caster already owns.
#[derive(Message, Reflect)]
#[reflect(Default)]
pub struct SummonAllyIntent {
    pub caster: Entity,
    pub target_point: Vec3,
}

impl Default for SummonAllyIntent {
    fn default() -> Self {
        Self {
            caster: Entity::PLACEHOLDER,
            target_point: Vec3::ZERO,
        }
    }
}

/// Host-reported contact between a projectile and some other entity.
#[derive(Message, Reflect)]
#[reflect(Default)]
pub struct CollisionContact {
    pub projectile: Entity,
    pub other: Entity,
}

impl Default for CollisionContact {
    fn default() -> Self {
        Self {
            projectile: Entity::PLACEHOLDER,
            other: Entity::PLACEHOLDER,
        }
    }
}

/// Tells the host physics layer to stop reporting contacts for a pair.
/// Emitted once, the first time a projectile touches its own sender.
#[derive(Message, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Default)]
pub struct SuppressCollision {
    pub projectile: Entity,
    pub other: Entity,
}

impl Default for SuppressCollision {
    fn default() -> Self {
        Self {
            projectile: Entity::PLACEHOLDER,
            other: Entity::PLACEHOLDER,
        }
    }
}

/// A projectile reached its terminal state and was despawned along with any
/// trail companions. The host reads this for impact/expiry effects.
#[derive(Message, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Default)]
pub struct ProjectileTerminated {
    pub projectile: Entity,
    pub reason: TerminationReason,
}

impl Default for ProjectileTerminated {
    fn default() -> Self {
        Self {
            projectile: Entity::PLACEHOLDER,
            reason: TerminationReason::OutOfRange,
        }
    }
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub enum TerminationReason {
    /// Accumulated travel distance reached the maximum set at fire time.
    OutOfRange,
    /// Contact with anything other than the sender.
    Impact { other: Entity },
}
