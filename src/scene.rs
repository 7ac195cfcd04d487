//! Demo scene: a camera and one stockpile in the middle of the screen

use bevy::prelude::*;

use crate::constants::{
    APPLE_COLOR, DEFAULT_INITIAL_APPLES, DEFAULT_SLOT_COUNT, LABEL_FONT_SIZE, LABEL_OFFSET_Y,
    SLOT_SIZE, SLOT_SPACING,
};
use crate::stockpile::{Stockpile, StockpileCommandsExt, StockpileContents, StockpileLabel};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<StockpileSceneSettings>()
            .init_resource::<StockpileSceneSettings>()
            .add_systems(Startup, (setup_camera, setup_stockpile));
    }
}

/// Shape of the spawned stockpile; insert before `run` to override
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct StockpileSceneSettings {
    pub slots: usize,
    pub initial_apples: i64,
    pub slot_spacing: f32,
}

impl Default for StockpileSceneSettings {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOT_COUNT,
            initial_apples: DEFAULT_INITIAL_APPLES,
            slot_spacing: SLOT_SPACING,
        }
    }
}

/// Horizontal offset of slot `index` so the row is centered on the stockpile
fn slot_offset(index: usize, slots: usize, spacing: f32) -> f32 {
    (index as f32 - slots.saturating_sub(1) as f32 / 2.0) * spacing
}

/// Spawn a stockpile with its slots and label, then assign the initial quantity
pub fn spawn_stockpile(commands: &mut Commands, settings: &StockpileSceneSettings) -> Entity {
    let stockpile = commands
        .spawn((
            Stockpile::default(),
            Name::new("Stockpile"),
            Transform::default(),
            Visibility::Inherited,
        ))
        .with_children(|parent| {
            parent
                .spawn((StockpileContents, Name::new("Contents")))
                .with_children(|contents| {
                    for index in 0..settings.slots {
                        contents.spawn((
                            Name::new(format!("Apple {}", index + 1)),
                            Sprite {
                                color: APPLE_COLOR,
                                custom_size: Some(Vec2::splat(SLOT_SIZE)),
                                ..default()
                            },
                            Transform::from_xyz(
                                slot_offset(index, settings.slots, settings.slot_spacing),
                                0.0,
                                0.0,
                            ),
                            Visibility::Hidden,
                        ));
                    }
                });

            parent.spawn((
                StockpileLabel,
                Name::new("Label"),
                Text2d::new(""),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                Transform::from_xyz(0.0, LABEL_OFFSET_Y, 1.0),
                Visibility::Hidden,
            ));
        })
        .id();

    commands.set_apples(stockpile, settings.initial_apples);
    stockpile
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn setup_stockpile(mut commands: Commands, settings: Res<StockpileSceneSettings>) {
    let stockpile = spawn_stockpile(&mut commands, &settings);
    info!(
        "Spawned stockpile {stockpile} with {} slots and {} apples",
        settings.slots, settings.initial_apples
    );
}
