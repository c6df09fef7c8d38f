use {
    bevy::{log::LogPlugin, prelude::*},
    emberfall_core::CorePlugin,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(LogPlugin {
                filter: "error,\
                    spell_assets=info,\
                    spellbook=debug,\
                    projectiles=debug,\
                    summons=debug,\
                    emberfall_core=info"
                    .into(),
                level: bevy::log::Level::TRACE,
                ..Default::default()
            }),
        )
        .add_plugins(CorePlugin)
        .run();
}
