pub mod systems;

#[cfg(test)]
mod tests;

use {bevy::prelude::*, system_schedule::GameSchedule};

pub struct SpellbookPlugin;

impl Plugin for SpellbookPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::process_unlock_requests.in_set(GameSchedule::ResolveIntent),
        )
        .add_observer(systems::apply_speed_grants);
    }
}
