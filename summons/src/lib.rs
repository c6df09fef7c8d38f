pub mod systems;

#[cfg(test)]
mod tests;

use {bevy::prelude::*, summon_components::*, system_schedule::GameSchedule};

pub struct SummonsPlugin;

impl Plugin for SummonsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Ally>().register_type::<AllySlot>();

        app.add_systems(
            Update,
            systems::summon_allies.in_set(GameSchedule::PerformAction),
        );
    }
}
