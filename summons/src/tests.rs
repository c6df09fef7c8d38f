use {
    crate::systems,
    bevy::prelude::*,
    messages::{MessagesPlugin, SummonAllyIntent},
    spell_components::{SpellBook, spell_ids},
    summon_components::{Ally, AllySlot},
};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MessagesPlugin)
        .add_systems(Update, systems::summon_allies);
    app
}

fn spawn_caster(app: &mut App, summon_unlocked: bool) -> Entity {
    let mut book = SpellBook::default();
    if summon_unlocked {
        book.try_unlock(spell_ids::SUMMON_ALLY, None);
    }
    app.world_mut()
        .spawn((Transform::default(), book, AllySlot::default()))
        .id()
}

fn summon(app: &mut App, caster: Entity, target_point: Vec3) {
    app.world_mut().write_message(SummonAllyIntent {
        caster,
        target_point,
    });
    app.update();
}

fn ally_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<Ally>>();
    query.iter(app.world()).count()
}

#[test]
fn summon_refused_while_spell_locked() {
    let mut app = test_app();
    let caster = spawn_caster(&mut app, false);

    summon(&mut app, caster, Vec3::new(3.0, 0.0, 0.0));

    assert_eq!(ally_count(&mut app), 0);
    assert_eq!(app.world().get::<AllySlot>(caster).unwrap().0, None);
}

#[test]
fn summon_spawns_ally_at_target_point() {
    let mut app = test_app();
    let caster = spawn_caster(&mut app, true);

    summon(&mut app, caster, Vec3::new(3.0, 4.0, 0.0));

    assert_eq!(ally_count(&mut app), 1);
    let ally = app.world().get::<AllySlot>(caster).unwrap().0.unwrap();
    let transform = app.world().get::<Transform>(ally).unwrap();
    assert_eq!(transform.translation, Vec3::new(3.0, 4.0, 0.0));
}

#[test]
fn second_summon_replaces_first_ally() {
    let mut app = test_app();
    let caster = spawn_caster(&mut app, true);

    summon(&mut app, caster, Vec3::new(3.0, 0.0, 0.0));
    let first = app.world().get::<AllySlot>(caster).unwrap().0.unwrap();

    summon(&mut app, caster, Vec3::new(-3.0, 0.0, 0.0));
    let second = app.world().get::<AllySlot>(caster).unwrap().0.unwrap();

    assert_ne!(first, second);
    assert_eq!(ally_count(&mut app), 1);
    assert!(app.world().get_entity(first).is_err());
}
