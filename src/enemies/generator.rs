//! One-shot enemy roster generator.
//!
//! Shortly after a run starts the generator fires once and registers the
//! fixed roster: seven wanderers, two chasers, one fencer guarding home and
//! one door in the middle of the arena.

use std::time::Duration;

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::EnemyError;
use super::motion::Motion;
use super::spawning::{add_enemy, EnemyBuilder, EnemySpawn};
use crate::core::{CurrentLevel, GameConfig, GameRng};
use crate::world::{ArenaPosition, Home};

pub const WANDERER_COUNT: usize = 7;
pub const CHASER_COUNT: usize = 2;

/// Sizes a wanderer may be drawn with.
pub const WANDERER_SIZES: [f32; 3] = [30.0, 45.0, 60.0];

pub const CHASER_SIZE: f32 = 20.0;
pub const FENCER_SIZE: f32 = 20.0;
pub const DOOR_SIZE: f32 = 60.0;

/// Fencer starts this far right of and below home.
pub const FENCER_HOME_OFFSET: Vec2 = Vec2::new(30.0, 30.0);
pub const DOOR_POSITION: Vec2 = Vec2::new(400.0, 250.0);

/// Random spawn coordinates are drawn per axis from this range.
pub const SPAWN_RANGE: std::ops::RangeInclusive<i32> = 1..=550;

/// Colors a wanderer may be drawn with.
pub fn wanderer_palette() -> [Color; 4] {
    [
        Color::srgb_u8(0xFC, 0xDF, 0xA6),
        Color::srgb_u8(0x5C, 0xA4, 0xA9),
        Color::srgb_u8(0xF4, 0xAC, 0xB7),
        Color::srgb_u8(0x44, 0x64, 0xAD),
    ]
}

pub fn chaser_color() -> Color {
    Color::srgb_u8(0xFE, 0xF9, 0xEF)
}

pub fn fencer_color() -> Color {
    Color::srgb_u8(0xCB, 0xF3, 0xF0)
}

pub fn door_color() -> Color {
    Color::srgb_u8(0x5C, 0x47, 0x42)
}

/// Scheduled spawner; removed once it has fired.
#[derive(Resource, Debug)]
pub struct EnemyGenerator {
    // Not used to scale the roster yet
    level: u32,
    timer: Timer,
}

impl EnemyGenerator {
    pub fn new(level: u32, delay: Duration) -> Self {
        Self {
            level,
            timer: Timer::new(delay, TimerMode::Once),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Advance the delay; true exactly once, on the tick the delay elapses.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta).just_finished()
    }

    /// Build the full roster. `home` anchors the fencer.
    pub fn roster(&self, rng: &mut impl Rng, home: Vec2) -> Result<Vec<EnemySpawn>, EnemyError> {
        let palette = wanderer_palette();
        let mut roster = Vec::with_capacity(WANDERER_COUNT + CHASER_COUNT + 2);

        for _ in 0..WANDERER_COUNT {
            let size = *WANDERER_SIZES.choose(rng).unwrap_or(&WANDERER_SIZES[0]);
            let color = *palette.choose(rng).unwrap_or(&palette[0]);
            let motion = Motion::wander(rng);
            roster.push(
                EnemyBuilder::new(size, color, motion)
                    .at(random_position(rng))
                    .build()?,
            );
        }

        for _ in 0..CHASER_COUNT {
            roster.push(
                EnemyBuilder::new(CHASER_SIZE, chaser_color(), Motion::chase())
                    .at(random_position(rng))
                    .build()?,
            );
        }

        roster.push(
            EnemyBuilder::new(FENCER_SIZE, fencer_color(), Motion::fence())
                .at(home + FENCER_HOME_OFFSET)
                .build()?,
        );

        roster.push(
            EnemyBuilder::new(DOOR_SIZE, door_color(), Motion::door(rng))
                .at(DOOR_POSITION)
                .build()?,
        );

        Ok(roster)
    }
}

fn random_position(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(SPAWN_RANGE) as f32,
        rng.gen_range(SPAWN_RANGE) as f32,
    )
}

/// Schedule the generator when a run starts.
pub fn schedule_enemy_generator(
    mut commands: Commands,
    config: Res<GameConfig>,
    level: Res<CurrentLevel>,
) {
    commands.insert_resource(EnemyGenerator::new(level.0, config.spawn_delay()));
}

/// Tick the generator and register the roster when it fires.
pub fn run_enemy_generator(
    mut commands: Commands,
    time: Res<Time>,
    generator: Option<ResMut<EnemyGenerator>>,
    mut rng: ResMut<GameRng>,
    home_query: Query<&ArenaPosition, With<Home>>,
) {
    let Some(mut generator) = generator else {
        return;
    };
    // Wait for the level; the fencer is placed relative to home
    let Ok(home) = home_query.get_single() else {
        return;
    };

    if !generator.tick(time.delta()) {
        return;
    }
    commands.remove_resource::<EnemyGenerator>();

    match generator.roster(&mut rng.0, home.0) {
        Ok(roster) => {
            let count = roster.len();
            for spawn in roster {
                add_enemy(&mut commands, spawn);
            }
            info!("Spawned {} enemies for level {}", count, generator.level());
        }
        Err(e) => {
            error!("Failed to build enemy roster: {}", e);
        }
    }
}

/// Drop a generator that has not fired yet.
pub fn cancel_enemy_generator(mut commands: Commands) {
    commands.remove_resource::<EnemyGenerator>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::{Enemy, EnemyShape, NeedsVisual};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster(seed: u64) -> Vec<EnemySpawn> {
        let mut rng = StdRng::seed_from_u64(seed);
        EnemyGenerator::new(1, Duration::from_millis(100))
            .roster(&mut rng, Vec2::new(700.0, 420.0))
            .unwrap()
    }

    #[test]
    fn roster_has_eleven_enemies() {
        let roster = roster(3);
        let count = |label: &str| roster.iter().filter(|s| s.motion.label() == label).count();

        assert_eq!(roster.len(), 11);
        assert_eq!(count("Wanderer"), 7);
        assert_eq!(count("Chaser"), 2);
        assert_eq!(count("Fencer"), 1);
        assert_eq!(count("Door"), 1);
    }

    #[test]
    fn sizes_and_colors_come_from_fixed_sets() {
        let palette = wanderer_palette();
        for seed in 0..20 {
            for spawn in roster(seed) {
                let enemy = &spawn.enemy;
                match spawn.motion {
                    Motion::Wander { .. } => {
                        assert!(WANDERER_SIZES.contains(&enemy.size()));
                        assert!(palette.contains(&enemy.color()));
                    }
                    Motion::Chase => {
                        assert_eq!(enemy.size(), CHASER_SIZE);
                        assert_eq!(enemy.color(), chaser_color());
                    }
                    Motion::Fence { .. } => {
                        assert_eq!(enemy.size(), FENCER_SIZE);
                        assert_eq!(enemy.color(), fencer_color());
                    }
                    Motion::Door { .. } => {
                        assert_eq!(enemy.size(), DOOR_SIZE);
                        assert_eq!(enemy.color(), door_color());
                        assert_eq!(enemy.shape(), EnemyShape::Rectangle);
                    }
                }
            }
        }
    }

    #[test]
    fn random_positions_stay_in_spawn_range() {
        for seed in 0..20 {
            for spawn in roster(seed)
                .into_iter()
                .filter(|s| matches!(s.motion, Motion::Wander { .. } | Motion::Chase))
            {
                assert!((1.0..=550.0).contains(&spawn.position.x));
                assert!((1.0..=550.0).contains(&spawn.position.y));
            }
        }
    }

    #[test]
    fn fixed_enemies_use_fixed_positions() {
        let roster = roster(9);

        let fencer = roster.iter().find(|s| s.motion.label() == "Fencer").unwrap();
        assert_eq!(fencer.position, Vec2::new(730.0, 450.0));

        let door = roster.iter().find(|s| s.motion.label() == "Door").unwrap();
        assert_eq!(door.position, DOOR_POSITION);
    }

    #[test]
    fn same_seed_gives_same_roster() {
        assert_eq!(roster(42), roster(42));
    }

    #[test]
    fn fires_once_after_delay() {
        let mut generator = EnemyGenerator::new(1, Duration::from_millis(100));

        assert!(!generator.tick(Duration::from_millis(60)));
        assert!(generator.tick(Duration::from_millis(60)));
        assert!(!generator.tick(Duration::from_millis(60)));
        assert!(!generator.tick(Duration::from_secs(10)));
    }

    #[test]
    fn system_registers_roster_once() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(GameRng::new(Some(1)))
            .insert_resource(EnemyGenerator::new(2, Duration::ZERO))
            .add_systems(Update, run_enemy_generator);
        app.world_mut()
            .spawn((Home, ArenaPosition(Vec2::new(100.0, 100.0))));

        app.update();
        app.update();

        let world = app.world_mut();
        let enemies = world
            .query_filtered::<Entity, (With<Enemy>, With<NeedsVisual>)>()
            .iter(world)
            .count();
        assert_eq!(enemies, 11);
        assert!(!world.contains_resource::<EnemyGenerator>());
    }

    #[test]
    fn system_waits_for_home() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(GameRng::new(Some(1)))
            .insert_resource(EnemyGenerator::new(1, Duration::ZERO))
            .add_systems(Update, run_enemy_generator);

        app.update();

        let world = app.world_mut();
        let enemies = world.query::<&Enemy>().iter(world).count();
        assert_eq!(enemies, 0);
        assert!(world.contains_resource::<EnemyGenerator>());
    }
}
