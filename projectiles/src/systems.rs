use {
    bevy::prelude::*,
    messages::{
        CastSpellIntent, CollisionContact, ProjectileTerminated, SuppressCollision,
        TerminationReason,
    },
    projectile_components::{
        Projectile, ProjectileSender, ProjectileTrail, SenderContactIgnored, TrailLine, TrailOf,
        TrailPoint,
    },
    spell_components::{ProjectileLoadout, SpellBook, spell_ids},
};

/// Spawns a projectile for each cast intent whose caster has the projectile
/// spell unlocked.
///
/// The caster's trail unlock is read once here and baked into the spawned
/// entity. Unlocking the trail later never retrofits projectiles in flight.
pub fn fire_projectiles(
    mut commands: Commands,
    mut intents: MessageReader<CastSpellIntent>,
    casters: Query<(&Transform, &SpellBook, &ProjectileLoadout)>,
) {
    for intent in intents.read() {
        let Ok((transform, book, loadout)) = casters.get(intent.caster) else {
            warn!(caster = ?intent.caster, "cast intent from entity that cannot cast");
            continue;
        };

        if !book.is_unlocked(spell_ids::PROJECTILE) {
            debug!(caster = ?intent.caster, "cast refused, projectile spell locked");
            continue;
        }

        let origin = transform.translation;
        let Some(direction) = (intent.target_point - origin).try_normalize() else {
            debug!(caster = ?intent.caster, "cast refused, target point on top of caster");
            continue;
        };
        let max_distance = origin.distance(intent.target_point);

        let projectile = commands
            .spawn((
                Sprite {
                    color: Color::srgb(0.6, 0.3, 1.0),
                    custom_size: Some(Vec2::new(8.0, 8.0)),
                    ..default()
                },
                Transform::from_translation(origin),
                Projectile::new(direction, loadout.speed, max_distance, origin),
                ProjectileSender(intent.caster),
            ))
            .id();

        if book.is_unlocked(spell_ids::PROJECTILE_TRAIL) {
            spawn_trail(&mut commands, projectile, origin);
        }

        debug!(
            ?projectile,
            %max_distance,
            speed = %loadout.speed,
            "projectile fired"
        );
    }
}

/// Trail companion: a fixed start point at the muzzle, a tip that follows
/// the projectile one tick behind, and the line connecting them.
fn spawn_trail(commands: &mut Commands, projectile: Entity, origin: Vec3) {
    let start = commands
        .spawn((
            Sprite {
                color: Color::srgb(0.9, 0.8, 1.0),
                custom_size: Some(Vec2::new(4.0, 4.0)),
                ..default()
            },
            Transform::from_translation(origin),
            TrailPoint,
            TrailOf(projectile),
        ))
        .id();

    let tip = commands
        .spawn((
            Sprite {
                color: Color::srgb(0.9, 0.8, 1.0),
                custom_size: Some(Vec2::new(4.0, 4.0)),
                ..default()
            },
            Transform::from_translation(origin),
            TrailPoint,
            TrailOf(projectile),
        ))
        .id();

    commands.spawn((
        Transform::from_translation(origin),
        TrailLine { start, end: tip },
        TrailOf(projectile),
    ));

    commands.entity(projectile).insert(ProjectileTrail { tip });
}

/// Advances projectiles and expires those that have covered their range.
///
/// Expiry is checked at the start of the tick, before movement, so a
/// projectile terminates at most once and never moves past the tick in
/// which its range ran out.
pub fn move_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut terminations: MessageWriter<ProjectileTerminated>,
    mut projectiles: Query<(Entity, &mut Transform, &mut Projectile, Option<&ProjectileTrail>)>,
    mut trail_points: Query<&mut Transform, (With<TrailPoint>, Without<Projectile>)>,
    companions: Query<(Entity, &TrailOf)>,
) {
    for (entity, mut transform, mut projectile, trail) in projectiles.iter_mut() {
        if projectile.range_exhausted() {
            despawn_with_trail(&mut commands, entity, &companions);
            terminations.write(ProjectileTerminated {
                projectile: entity,
                reason: TerminationReason::OutOfRange,
            });
            info!(projectile = ?entity, travelled = %projectile.travelled, "projectile expired");
            continue;
        }

        let before = projectile.advance(&mut transform.translation, time.delta_secs());

        // The trail tip lags one tick behind the projectile.
        if let Some(trail) = trail
            && let Ok(mut tip) = trail_points.get_mut(trail.tip)
        {
            tip.translation = before;
        }
    }
}

/// Resolves host-reported contacts.
///
/// The sender is exempt for the projectile's whole life: the first sender
/// contact asks the host to suppress the pair, and no sender contact ever
/// terminates. Any other contact destroys the projectile on the spot.
pub fn handle_collisions(
    mut commands: Commands,
    mut contacts: MessageReader<CollisionContact>,
    mut suppressions: MessageWriter<SuppressCollision>,
    mut terminations: MessageWriter<ProjectileTerminated>,
    projectiles: Query<(&ProjectileSender, Has<SenderContactIgnored>), With<Projectile>>,
    companions: Query<(Entity, &TrailOf)>,
) {
    let mut destroyed: Vec<Entity> = Vec::new();

    for contact in contacts.read() {
        if destroyed.contains(&contact.projectile) {
            continue;
        }

        let Ok((sender, already_ignored)) = projectiles.get(contact.projectile) else {
            // Stale contact for a projectile despawned earlier this frame.
            continue;
        };

        if contact.other == sender.0 {
            if !already_ignored {
                commands
                    .entity(contact.projectile)
                    .insert(SenderContactIgnored);
                suppressions.write(SuppressCollision {
                    projectile: contact.projectile,
                    other: contact.other,
                });
                debug!(projectile = ?contact.projectile, "sender contact ignored");
            }
            continue;
        }

        despawn_with_trail(&mut commands, contact.projectile, &companions);
        destroyed.push(contact.projectile);
        terminations.write(ProjectileTerminated {
            projectile: contact.projectile,
            reason: TerminationReason::Impact {
                other: contact.other,
            },
        });
        info!(projectile = ?contact.projectile, other = ?contact.other, "projectile impact");
    }
}

fn despawn_with_trail(
    commands: &mut Commands,
    projectile: Entity,
    companions: &Query<(Entity, &TrailOf)>,
) {
    for (companion, owner) in companions.iter() {
        if owner.0 == projectile {
            commands.entity(companion).despawn();
        }
    }
    commands.entity(projectile).despawn();
}
