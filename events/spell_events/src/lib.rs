use bevy::prelude::*;

pub struct SpellEventsPlugin;

impl Plugin for SpellEventsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SpellUnlocked>();
    }
}

/// Fired once per newly unlocked spell, after the caster's spell book has
/// been updated. Never fires for refused or repeated unlock requests.
#[derive(Event, Debug, Reflect)]
#[reflect(Default)]
pub struct SpellUnlocked {
    pub caster: Entity,
    pub spell_id: String,
}

impl Default for SpellUnlocked {
    fn default() -> Self {
        Self {
            caster: Entity::PLACEHOLDER,
            spell_id: String::new(),
        }
    }
}
