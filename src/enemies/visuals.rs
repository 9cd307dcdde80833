//! Enemy drawables: created once, moved every frame, removed with the enemy.

use bevy::prelude::*;

use super::components::{Enemy, EnemyShape, NeedsVisual};
use crate::world::{Arena, ArenaPosition};

/// Top-left corner where a new drawable appears before its first render.
const PLACEHOLDER_CORNER: f32 = 100.0;

/// Draw layer for enemies: above home, below the player.
const ENEMY_LAYER: f32 = 1.0;

/// Give newly registered enemies their mesh and material.
pub fn create_enemy_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    arena: Res<Arena>,
    query: Query<(Entity, &Enemy), With<NeedsVisual>>,
) {
    for (entity, enemy) in query.iter() {
        let size = enemy.size();
        let mesh = match enemy.shape() {
            EnemyShape::Oval => meshes.add(Circle::new(size / 2.0)),
            EnemyShape::Rectangle => meshes.add(Rectangle::new(size, size)),
        };
        let placeholder = arena.to_world(Vec2::splat(PLACEHOLDER_CORNER + size / 2.0));

        commands.entity(entity).remove::<NeedsVisual>().insert((
            Mesh2d(mesh),
            MeshMaterial2d(materials.add(enemy.color())),
            Transform::from_translation(placeholder.extend(ENEMY_LAYER)),
        ));
    }
}

/// Move each drawable to its enemy's bounding box.
pub fn render_enemies(
    arena: Res<Arena>,
    mut query: Query<(&ArenaPosition, &mut Transform), (With<Enemy>, Without<NeedsVisual>)>,
) {
    for (position, mut transform) in query.iter_mut() {
        transform.translation = arena.to_world(position.0).extend(ENEMY_LAYER);
    }
}

/// Remove every enemy and its drawable.
pub fn delete_enemies(mut commands: Commands, query: Query<Entity, With<Enemy>>) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
        count += 1;
    }
    if count > 0 {
        debug!("Removed {} enemies", count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::{add_enemy, EnemyBuilder, Motion};

    fn register(app: &mut App, size: f32, motion: Motion) -> Entity {
        let spawn = EnemyBuilder::new(size, Color::WHITE, motion)
            .at(Vec2::new(400.0, 250.0))
            .build()
            .unwrap();
        let world = app.world_mut();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let entity = add_enemy(&mut Commands::new(&mut queue, world), spawn);
        queue.apply(world);
        entity
    }

    fn create_app() -> App {
        let mut app = App::new();
        app.insert_resource(Arena::default())
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<ColorMaterial>>()
            .add_systems(Update, create_enemy_visuals);
        app
    }

    fn mesh_vertices(app: &App, entity: Entity) -> usize {
        let handle = app.world().get::<Mesh2d>(entity).expect("mesh attached");
        app.world()
            .resource::<Assets<Mesh>>()
            .get(&handle.0)
            .expect("mesh asset stored")
            .count_vertices()
    }

    #[test]
    fn door_gets_rectangle_others_get_oval() {
        let mut app = create_app();
        let door = register(&mut app, 60.0, Motion::Door { velocity_y: 1.0 });
        let wanderer = register(
            &mut app,
            30.0,
            Motion::Wander {
                velocity: Vec2::ONE,
            },
        );

        app.update();

        assert_eq!(mesh_vertices(&app, door), 4);
        assert!(mesh_vertices(&app, wanderer) > 4);
        assert!(app.world().get::<MeshMaterial2d<ColorMaterial>>(door).is_some());
    }

    #[test]
    fn drawable_starts_at_placeholder() {
        let mut app = create_app();
        let door = register(&mut app, 60.0, Motion::Door { velocity_y: 1.0 });
        let wanderer = register(&mut app, 30.0, Motion::chase());

        app.update();

        let arena = Arena::default();
        let translation = |entity| app.world().get::<Transform>(entity).map(|t| t.translation);
        assert_eq!(
            translation(door),
            Some(arena.to_world(Vec2::splat(130.0)).extend(ENEMY_LAYER))
        );
        assert_eq!(
            translation(wanderer),
            Some(arena.to_world(Vec2::splat(115.0)).extend(ENEMY_LAYER))
        );
    }

    #[test]
    fn drawable_is_created_once() {
        let mut app = create_app();
        let door = register(&mut app, 60.0, Motion::Door { velocity_y: 1.0 });

        app.update();
        assert!(!app.world().entity(door).contains::<NeedsVisual>());
        let first = app.world().get::<Mesh2d>(door).map(|m| m.0.id());

        app.update();
        app.update();

        assert_eq!(app.world().get::<Mesh2d>(door).map(|m| m.0.id()), first);
        assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 1);
        assert_eq!(app.world().resource::<Assets<ColorMaterial>>().len(), 1);
    }

    #[test]
    fn render_skips_enemies_without_drawable() {
        let mut app = App::new();
        app.insert_resource(Arena::default())
            .add_systems(Update, render_enemies);

        let spawn = EnemyBuilder::new(30.0, Color::WHITE, Motion::chase())
            .at(Vec2::new(400.0, 250.0))
            .build()
            .unwrap();
        let pending = {
            let world = app.world_mut();
            let mut queue = bevy::ecs::world::CommandQueue::default();
            let entity = add_enemy(&mut Commands::new(&mut queue, world), spawn.clone());
            queue.apply(world);
            world.entity_mut(entity).insert(Transform::from_xyz(7.0, 7.0, 0.0));
            entity
        };
        let drawn = app
            .world_mut()
            .spawn((spawn.enemy, ArenaPosition(spawn.position), Transform::default()))
            .id();

        app.update();

        assert_eq!(
            app.world().get::<Transform>(pending).map(|t| t.translation),
            Some(Vec3::new(7.0, 7.0, 0.0))
        );
        assert_eq!(
            app.world().get::<Transform>(drawn).map(|t| t.translation),
            Some(Vec3::new(0.0, 0.0, ENEMY_LAYER))
        );
    }

    #[test]
    fn delete_removes_all_enemies() {
        let mut app = App::new();
        app.add_systems(Update, delete_enemies);
        for _ in 0..3 {
            let spawn = EnemyBuilder::new(20.0, Color::WHITE, Motion::fence())
                .at(Vec2::ZERO)
                .build()
                .unwrap();
            app.world_mut().spawn((spawn.enemy, ArenaPosition(spawn.position)));
        }
        let bystander = app.world_mut().spawn(ArenaPosition(Vec2::ZERO)).id();

        app.update();

        let world = app.world_mut();
        assert_eq!(world.query::<&Enemy>().iter(world).count(), 0);
        assert!(world.entities().contains(bystander));
    }
}
