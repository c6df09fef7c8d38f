use {
    bevy::prelude::*,
    messages::UnlockRequest,
    spell_assets::{SpellDefinition, SpellMap},
    spell_components::{ProjectileLoadout, SpellBook, UnlockOutcome},
    spell_events::SpellUnlocked,
};

/// Resolves unlock requests against the spell catalog and each caster's book.
///
/// `SpellUnlocked` is triggered exactly once per newly unlocked spell, after
/// the book has been mutated, so observers always see the updated set.
/// Refused and repeated requests stay silent.
pub fn process_unlock_requests(
    mut commands: Commands,
    mut requests: MessageReader<UnlockRequest>,
    mut books: Query<&mut SpellBook>,
    spell_map: Res<SpellMap>,
    definitions: Res<Assets<SpellDefinition>>,
) {
    for request in requests.read() {
        let Ok(mut book) = books.get_mut(request.caster) else {
            warn!(caster = ?request.caster, "unlock request for entity without a spell book");
            continue;
        };

        let Some(definition) = spell_map.definition(&definitions, &request.spell_id) else {
            warn!(spell_id = %request.spell_id, "unlock request for unknown spell");
            continue;
        };

        match book.try_unlock(&definition.id, definition.requires.as_deref()) {
            UnlockOutcome::Unlocked => {
                info!(spell_id = %definition.id, caster = ?request.caster, "spell unlocked");
                commands.trigger(SpellUnlocked {
                    caster: request.caster,
                    spell_id: definition.id.clone(),
                });
            }
            UnlockOutcome::AlreadyUnlocked => {
                debug!(spell_id = %definition.id, "spell already unlocked");
            }
            UnlockOutcome::MissingPrerequisite => {
                debug!(
                    spell_id = %definition.id,
                    requires = ?definition.requires,
                    "prerequisite not met"
                );
            }
        }
    }
}

/// Observer: applies the projectile-speed grant carried by a freshly
/// unlocked spell to the caster's loadout.
pub fn apply_speed_grants(
    trigger: On<SpellUnlocked>,
    mut loadouts: Query<&mut ProjectileLoadout>,
    spell_map: Res<SpellMap>,
    definitions: Res<Assets<SpellDefinition>>,
) {
    let event = trigger.event();

    let Some(speed) = spell_map
        .definition(&definitions, &event.spell_id)
        .and_then(|definition| definition.projectile_speed)
    else {
        return;
    };

    if let Ok(mut loadout) = loadouts.get_mut(event.caster) {
        debug!(spell_id = %event.spell_id, %speed, "projectile speed grant applied");
        loadout.speed = speed;
    }
}
