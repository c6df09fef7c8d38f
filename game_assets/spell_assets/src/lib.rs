use {
    bevy::{asset::LoadedFolder, platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
    states::GameState,
};

pub struct SpellAssetsPlugin;

impl Plugin for SpellAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<SpellDefinition>::new(&["spell.ron"]))
            .init_resource::<SpellMap>()
            .add_systems(Startup, load_spell_folder)
            .add_systems(
                Update,
                index_spell_definitions.run_if(in_state(GameState::Loading)),
            );
    }
}

/// Top-level spell definition loaded from `.spell.ron`.
///
/// The prerequisite mapping lives here, shared and read-only: a spell with
/// `requires` can only be unlocked once the named spell already is.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct SpellDefinition {
    /// Unique identifier (e.g., "projectile", "summon_ally")
    pub id: String,
    /// Display name shown in UI
    pub display_name: String,
    /// Spell that must already be unlocked before this one can be
    #[serde(default)]
    pub requires: Option<String>,
    /// Projectile speed granted to the caster's loadout on unlock
    #[serde(default)]
    pub projectile_speed: Option<f32>,
}

/// Resource mapping spell ids to asset handles.
#[derive(Resource, Default)]
pub struct SpellMap {
    pub handles: HashMap<String, Handle<SpellDefinition>>,
}

impl SpellMap {
    pub fn definition<'a>(
        &self,
        definitions: &'a Assets<SpellDefinition>,
        spell_id: &str,
    ) -> Option<&'a SpellDefinition> {
        self.handles
            .get(spell_id)
            .and_then(|handle| definitions.get(handle))
    }

    /// Prerequisite of a spell, if the catalog defines one. Base spells and
    /// unknown ids have none.
    pub fn requirement_of<'a>(
        &self,
        definitions: &'a Assets<SpellDefinition>,
        spell_id: &str,
    ) -> Option<&'a str> {
        self.definition(definitions, spell_id)
            .and_then(|definition| definition.requires.as_deref())
    }
}

#[derive(Resource)]
struct SpellFolderHandle(Handle<LoadedFolder>);

fn load_spell_folder(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("loading spell definitions");
    let handle = asset_server.load_folder("spells");
    commands.insert_resource(SpellFolderHandle(handle));
}

fn index_spell_definitions(
    mut spell_map: ResMut<SpellMap>,
    mut next_state: ResMut<NextState<GameState>>,
    asset_server: Res<AssetServer>,
    folder_handle: Res<SpellFolderHandle>,
    folders: Res<Assets<LoadedFolder>>,
    definitions: Res<Assets<SpellDefinition>>,
) {
    if !asset_server.is_loaded_with_dependencies(folder_handle.0.id()) {
        return;
    }

    let Some(folder) = folders.get(folder_handle.0.id()) else {
        return;
    };

    for untyped_handle in folder.handles.iter().cloned() {
        if let Ok(handle) = untyped_handle.try_typed::<SpellDefinition>()
            && let Some(definition) = definitions.get(&handle)
        {
            debug!(spell_id = %definition.id, "indexed spell definition");
            spell_map.handles.insert(definition.id.clone(), handle);
        }
    }

    info!(count = spell_map.handles.len(), "spell catalog ready");
    next_state.set(GameState::Running);
}
