use {
    bevy::prelude::*,
    messages::SummonAllyIntent,
    spell_components::{SpellBook, spell_ids},
    summon_components::{Ally, AllySlot},
};

/// Replaces the caster's single summoned ally on each summon intent.
///
/// The slot is an owned handle: the previous occupant is despawned before
/// the replacement spawns, so at most one ally exists per caster and no
/// scene-wide lookup is needed.
pub fn summon_allies(
    mut commands: Commands,
    mut intents: MessageReader<SummonAllyIntent>,
    mut casters: Query<(&Transform, &SpellBook, &mut AllySlot)>,
) {
    for intent in intents.read() {
        let Ok((transform, book, mut slot)) = casters.get_mut(intent.caster) else {
            warn!(caster = ?intent.caster, "summon intent from entity without an ally slot");
            continue;
        };

        if !book.is_unlocked(spell_ids::SUMMON_ALLY) {
            debug!(caster = ?intent.caster, "summon refused, spell locked");
            continue;
        }

        if let Some(previous) = slot.0.take()
            && let Ok(mut occupant) = commands.get_entity(previous)
        {
            debug!(ally = ?previous, "replacing existing ally");
            occupant.despawn();
        }

        // Spawn facing back toward the caster.
        let facing = (transform.translation - intent.target_point).truncate();
        let ally = commands
            .spawn((
                Sprite {
                    color: Color::srgb(0.3, 0.8, 0.4),
                    custom_size: Some(Vec2::new(16.0, 16.0)),
                    ..default()
                },
                Transform::from_translation(intent.target_point)
                    .with_rotation(Quat::from_rotation_z(facing.y.atan2(facing.x))),
                Ally,
            ))
            .id();

        slot.0 = Some(ally);
        info!(?ally, caster = ?intent.caster, "ally summoned");
    }
}
