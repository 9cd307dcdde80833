//! UI plugin - menus, end screens, and HUD.

use bevy::prelude::*;

use super::hud;
use crate::core::GameState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(Update, menu_input.run_if(in_state(GameState::MainMenu)))
            .add_systems(OnExit(GameState::MainMenu), cleanup_menu::<MainMenuUi>)

            // Win screen
            .add_systems(OnEnter(GameState::Won), setup_win_screen)
            .add_systems(Update, menu_input.run_if(in_state(GameState::Won)))
            .add_systems(OnExit(GameState::Won), cleanup_menu::<EndScreenUi>)

            // Lose screen
            .add_systems(OnEnter(GameState::Lost), setup_lose_screen)
            .add_systems(Update, menu_input.run_if(in_state(GameState::Lost)))
            .add_systems(OnExit(GameState::Lost), cleanup_menu::<EndScreenUi>);
    }
}

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for win/lose screen UI entities.
#[derive(Component)]
struct EndScreenUi;

/// Marker for menu buttons.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
enum MenuButton {
    Play,
    MainMenu,
    Quit,
}

impl MenuButton {
    /// State a pressed button leads to; `None` quits.
    fn target(self) -> Option<GameState> {
        match self {
            Self::Play => Some(GameState::InGame),
            Self::MainMenu => Some(GameState::MainMenu),
            Self::Quit => None,
        }
    }
}

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);

/// Set up the main menu.
fn setup_main_menu(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        MainMenuUi,
        Color::srgb(0.05, 0.08, 0.1),
        "TURTLE ADVENTURE",
        Color::srgb(0.55, 0.78, 0.45),
        &[("New Game", MenuButton::Play), ("Quit", MenuButton::Quit)],
    );
}

/// Set up the win screen.
fn setup_win_screen(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        EndScreenUi,
        Color::srgba(0.0, 0.1, 0.02, 0.85),
        "HOME SAFE",
        Color::srgb(0.55, 0.85, 0.5),
        &[("Play Again", MenuButton::Play), ("Main Menu", MenuButton::MainMenu)],
    );
}

/// Set up the lose screen.
fn setup_lose_screen(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        EndScreenUi,
        Color::srgba(0.1, 0.0, 0.0, 0.9),
        "CAUGHT!",
        Color::srgb(0.8, 0.2, 0.2),
        &[("Retry", MenuButton::Play), ("Main Menu", MenuButton::MainMenu)],
    );
}

/// Full-screen overlay with a title and a column of buttons.
fn spawn_screen(
    commands: &mut Commands,
    marker: impl Component,
    background: Color,
    title: &str,
    title_color: Color,
    buttons: &[(&str, MenuButton)],
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(background),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));

            for (text, button) in buttons {
                spawn_menu_button(parent, text, *button);
            }
        });
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Handle button interactions on any menu screen.
fn menu_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                match button.target() {
                    Some(state) => next_state.set(state),
                    None => {
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => {
                *bg_color = BUTTON_HOVER.into();
            }
            Interaction::None => {
                *bg_color = BUTTON_IDLE.into();
            }
        }
    }
}

/// Clean up every entity carrying the screen marker `T`.
fn cleanup_menu<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
