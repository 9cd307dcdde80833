//! In-game HUD - level and goal reminder.

use bevy::prelude::*;

use crate::core::{CurrentLevel, GameState};
use crate::world::ARENA_MARGIN;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud);
}

/// Spawn the HUD UI as a single row inside the band above the arena.
fn spawn_hud(mut commands: Commands, level: Res<CurrentLevel>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(ARENA_MARGIN),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(16.0),
                padding: UiRect::horizontal(Val::Px(12.0)),
                overflow: Overflow::clip(),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Level {}", level.0)),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.2, 0.25, 0.3)),
            ));
            parent.spawn((
                Text::new("Get the turtle home. Don't touch anything."),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.35, 0.4, 0.45)),
            ));
        });
}

fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
