//! Turtle Adventure - Entry Point
//!
//! Guide the turtle home without touching an enemy.
//!
//! Controls:
//! - Arrow keys / WASD: Move

use bevy::prelude::*;

use turtle_adventure::world::Arena;

fn main() {
    // Sized from defaults; resized once the config file is loaded
    let window_size = Arena::default().window_size();

    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Turtle Adventure".to_string(),
                resolution: (window_size.x, window_size.y).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.93, 0.96, 0.98)))

        // Our game plugin
        .add_plugins(turtle_adventure::TurtleAdventurePlugin)

        .run();
}
