use {
    bevy::prelude::*,
    messages::MessagesPlugin,
    projectiles::ProjectilesPlugin,
    spell_assets::SpellAssetsPlugin,
    spell_components::{Caster, ProjectileLoadout, SpellBook},
    spell_events::SpellEventsPlugin,
    spellbook::SpellbookPlugin,
    states::GameState,
    summon_components::AllySlot,
    summons::SummonsPlugin,
    system_schedule::GameSchedule,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                Update,
                (
                    GameSchedule::ResolveIntent,
                    GameSchedule::PerformAction,
                    GameSchedule::Effect,
                )
                    .chain(),
            )
            .add_plugins((
                MessagesPlugin,
                SpellEventsPlugin,
                SpellAssetsPlugin,
                SpellbookPlugin,
                ProjectilesPlugin,
                SummonsPlugin,
            ))
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Running), spawn_player);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// The player starts with an empty spell book; the host drives progression
/// through `UnlockRequest` messages.
fn spawn_player(mut commands: Commands) {
    let player = commands
        .spawn((
            Caster,
            SpellBook::default(),
            ProjectileLoadout::default(),
            AllySlot::default(),
            Transform::default(),
        ))
        .id();
    info!(?player, "player caster spawned");
}
