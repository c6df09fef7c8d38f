pub mod systems;


use {bevy::prelude::*, projectile_components::*, system_schedule::GameSchedule};

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Projectile>()
            .register_type::<ProjectileSender>()
            .register_type::<SenderContactIgnored>()
            .register_type::<ProjectileTrail>()
            .register_type::<TrailPoint>()
            .register_type::<TrailLine>()
            .register_type::<TrailOf>();

        app.add_systems(
            Update,
            (
                (systems::fire_projectiles, systems::move_projectiles)
                    .in_set(GameSchedule::PerformAction)
                    .chain(),
                systems::handle_collisions.in_set(GameSchedule::Effect),
            ),
        );
    }
}
