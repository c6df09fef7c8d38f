use {
    crate::*,
    bevy::prelude::*,
    messages::{MessagesPlugin, UnlockRequest},
    spell_assets::{SpellDefinition, SpellMap},
    spell_components::{ProjectileLoadout, SpellBook, UnlockOutcome, spell_ids},
    spell_events::{SpellEventsPlugin, SpellUnlocked},
};

/// Spawned by the spy observer, one per notification.
#[derive(Component)]
struct Notified {
    spell_id: String,
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(AssetPlugin::default())
        .add_plugins((MessagesPlugin, SpellEventsPlugin, SpellbookPlugin))
        .init_resource::<SpellMap>()
        .init_resource::<Assets<SpellDefinition>>();

    app.add_observer(|trigger: On<SpellUnlocked>, mut commands: Commands| {
        commands.spawn(Notified {
            spell_id: trigger.event().spell_id.clone(),
        });
    });

    seed_catalog(&mut app);
    app
}

fn seed_catalog(app: &mut App) {
    let definitions = vec![
        SpellDefinition {
            id: spell_ids::PROJECTILE.to_string(),
            display_name: "Arcane Bolt".to_string(),
            requires: None,
            projectile_speed: Some(10.0),
        },
        SpellDefinition {
            id: spell_ids::PROJECTILE_UPGRADE.to_string(),
            display_name: "Greater Arcane Bolt".to_string(),
            requires: Some(spell_ids::PROJECTILE.to_string()),
            projectile_speed: Some(20.0),
        },
        SpellDefinition {
            id: spell_ids::PROJECTILE_TRAIL.to_string(),
            display_name: "Trailing Bolt".to_string(),
            requires: Some(spell_ids::PROJECTILE.to_string()),
            projectile_speed: None,
        },
        SpellDefinition {
            id: spell_ids::SUMMON_ALLY.to_string(),
            display_name: "Summon Ally".to_string(),
            requires: None,
            projectile_speed: None,
        },
    ];

    let mut handles = Vec::new();
    {
        let mut assets = app.world_mut().resource_mut::<Assets<SpellDefinition>>();
        for definition in definitions {
            let id = definition.id.clone();
            handles.push((id, assets.add(definition)));
        }
    }

    let mut map = app.world_mut().resource_mut::<SpellMap>();
    for (id, handle) in handles {
        map.handles.insert(id, handle);
    }
}

fn spawn_caster(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((SpellBook::default(), ProjectileLoadout::default()))
        .id()
}

fn request_unlock(app: &mut App, caster: Entity, spell_id: &str) {
    app.world_mut().write_message(UnlockRequest {
        caster,
        spell_id: spell_id.to_string(),
    });
    app.update();
}

fn book(app: &App, caster: Entity) -> &SpellBook {
    app.world().get::<SpellBook>(caster).expect("caster has a spell book")
}

fn notification_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&Notified>();
    query.iter(app.world()).count()
}

fn notified_ids(app: &mut App) -> Vec<String> {
    let mut query = app.world_mut().query::<&Notified>();
    let mut ids: Vec<String> = query
        .iter(app.world())
        .map(|notified| notified.spell_id.clone())
        .collect();
    ids.sort();
    ids
}

#[test]
fn catalog_exposes_prerequisites() {
    let mut app = test_app();

    let map = app.world().resource::<SpellMap>();
    let definitions = app.world().resource::<Assets<SpellDefinition>>();

    assert_eq!(
        map.requirement_of(definitions, spell_ids::PROJECTILE_UPGRADE),
        Some(spell_ids::PROJECTILE)
    );
    assert_eq!(
        map.requirement_of(definitions, spell_ids::PROJECTILE_TRAIL),
        Some(spell_ids::PROJECTILE)
    );
    assert_eq!(map.requirement_of(definitions, spell_ids::PROJECTILE), None);
    assert_eq!(map.requirement_of(definitions, "time_stop"), None);
}

#[test]
fn upgrade_refused_until_base_spell_unlocked() {
    let mut app = test_app();
    let caster = spawn_caster(&mut app);

    // Fresh caster: upgrade has an unmet prerequisite.
    request_unlock(&mut app, caster, spell_ids::PROJECTILE_UPGRADE);
    assert!(!book(&app, caster).is_unlocked(spell_ids::PROJECTILE_UPGRADE));
    assert_eq!(book(&app, caster).unlocked_count(), 0);
    assert_eq!(notification_count(&mut app), 0);

    request_unlock(&mut app, caster, spell_ids::PROJECTILE);
    assert!(book(&app, caster).is_unlocked(spell_ids::PROJECTILE));

    request_unlock(&mut app, caster, spell_ids::PROJECTILE_UPGRADE);
    assert!(book(&app, caster).is_unlocked(spell_ids::PROJECTILE_UPGRADE));
    assert_eq!(
        notified_ids(&mut app),
        vec![spell_ids::PROJECTILE, spell_ids::PROJECTILE_UPGRADE]
    );
}

#[test]
fn repeat_unlock_is_idempotent_and_notifies_once() {
    let mut app = test_app();
    let caster = spawn_caster(&mut app);

    request_unlock(&mut app, caster, spell_ids::PROJECTILE);
    request_unlock(&mut app, caster, spell_ids::PROJECTILE);

    assert!(book(&app, caster).is_unlocked(spell_ids::PROJECTILE));
    assert_eq!(book(&app, caster).unlocked_count(), 1);
    assert_eq!(notification_count(&mut app), 1);
}

#[test]
fn speed_grants_follow_progression() {
    let mut app = test_app();
    let caster = spawn_caster(&mut app);

    request_unlock(&mut app, caster, spell_ids::PROJECTILE);
    let loadout = app.world().get::<ProjectileLoadout>(caster).unwrap();
    assert_eq!(loadout.speed, 10.0);

    request_unlock(&mut app, caster, spell_ids::PROJECTILE_UPGRADE);
    let loadout = app.world().get::<ProjectileLoadout>(caster).unwrap();
    assert_eq!(loadout.speed, 20.0);
}

#[test]
fn trail_spell_has_no_speed_grant() {
    let mut app = test_app();
    let caster = spawn_caster(&mut app);

    request_unlock(&mut app, caster, spell_ids::PROJECTILE);
    request_unlock(&mut app, caster, spell_ids::PROJECTILE_TRAIL);

    let loadout = app.world().get::<ProjectileLoadout>(caster).unwrap();
    assert_eq!(loadout.speed, 10.0);
    assert!(book(&app, caster).is_unlocked(spell_ids::PROJECTILE_TRAIL));
}

#[test]
fn unknown_spell_is_refused() {
    let mut app = test_app();
    let caster = spawn_caster(&mut app);

    request_unlock(&mut app, caster, "time_stop");
    assert_eq!(book(&app, caster).unlocked_count(), 0);
    assert_eq!(notification_count(&mut app), 0);
}

#[test]
fn try_unlock_outcomes() {
    let mut book = SpellBook::default();

    assert_eq!(
        book.try_unlock(spell_ids::PROJECTILE_UPGRADE, Some(spell_ids::PROJECTILE)),
        UnlockOutcome::MissingPrerequisite
    );
    assert!(!UnlockOutcome::MissingPrerequisite.is_success());

    assert_eq!(
        book.try_unlock(spell_ids::PROJECTILE, None),
        UnlockOutcome::Unlocked
    );
    assert_eq!(
        book.try_unlock(spell_ids::PROJECTILE, None),
        UnlockOutcome::AlreadyUnlocked
    );
    assert!(UnlockOutcome::AlreadyUnlocked.is_success());

    assert_eq!(
        book.try_unlock(spell_ids::PROJECTILE_UPGRADE, Some(spell_ids::PROJECTILE)),
        UnlockOutcome::Unlocked
    );
    assert_eq!(book.unlocked_count(), 2);
}
