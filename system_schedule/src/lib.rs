use bevy::prelude::*;

/// Frame ordering for the character core: intents resolve before actions,
/// actions before their effects. `CorePlugin` chains these in `Update`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameSchedule {
    ResolveIntent,
    PerformAction,
    Effect,
}
