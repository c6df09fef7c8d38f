use bevy::prelude::*;

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the spell catalog to load.
    #[default]
    Loading,
    Running,
}
