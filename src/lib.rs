//! Apple Stockpile - a stockpile display and day cycle for Bevy
//!
//! This library exposes the plugins for testing and reuse in other scenes.

use crate::day_cycle::DayCyclePlugin;
use crate::input::InputPlugin;
use crate::scene::ScenePlugin;
use crate::stockpile::StockpilePlugin;
#[cfg(feature = "debug")]
use bevy::dev_tools::states::log_transitions;
use bevy::app::PluginGroup;
use bevy::prelude::*;

#[cfg(feature = "debug")]
use bevy_inspector_egui::bevy_egui::EguiPlugin;
#[cfg(feature = "debug")]
use bevy_inspector_egui::quick::WorldInspectorPlugin;

pub mod constants;
pub mod day_cycle;
pub mod input;
pub mod scene;
pub mod stockpile;

/// Plugin group for the display and clock logic (headless-compatible)
/// Use this for tests that don't need a window or player input
pub struct LogicPlugins;

impl PluginGroup for LogicPlugins {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(StockpilePlugin)
            .add(DayCyclePlugin)
    }
}

/// Plugin group for the demo scene and keyboard driver (requires a window)
pub struct PresentationPlugins;

impl PluginGroup for PresentationPlugins {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(ScenePlugin)
            .add(InputPlugin)
    }
}

pub fn app() -> App {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins)
        .add_plugins(LogicPlugins)
        .add_plugins(PresentationPlugins);

    #[cfg(feature = "debug")]
    app.add_systems(Update, log_transitions::<day_cycle::DayPhase>)
        .add_plugins((EguiPlugin::default(), WorldInspectorPlugin::new()));

    app
}

#[cfg(test)]
pub mod test_utils;
