use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use apple_stockpile::LogicPlugins;
use apple_stockpile::stockpile::{Stockpile, StockpileContents, StockpileLabel};

/// Headless app with the logic plugins, like the game runs them without a window
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.add_plugins(LogicPlugins);
    app
}

/// Root, slots and label of a stockpile spawned straight into the world
pub struct Fixture {
    pub root: Entity,
    pub slots: Vec<Entity>,
    pub label: Entity,
}

/// Slots start hidden, as `scene::spawn_stockpile` spawns them; the unit-test fixture in
/// `src/test_utils.rs` starts them shown instead.
pub fn spawn_stockpile(app: &mut App, slot_count: usize) -> Fixture {
    let world = app.world_mut();
    let root = world.spawn(Stockpile::default()).id();
    let contents = world.spawn((StockpileContents, ChildOf(root))).id();
    let slots = (0..slot_count)
        .map(|_| world.spawn((Visibility::Hidden, ChildOf(contents))).id())
        .collect();
    let label = world
        .spawn((
            StockpileLabel,
            Text2d::new(""),
            Visibility::Hidden,
            ChildOf(root),
        ))
        .id();
    Fixture { root, slots, label }
}

pub fn shown_slots(app: &App, fixture: &Fixture) -> Vec<bool> {
    fixture
        .slots
        .iter()
        .map(|slot| app.world().get::<Visibility>(*slot) == Some(&Visibility::Inherited))
        .collect()
}

pub fn label(app: &App, fixture: &Fixture) -> (String, bool) {
    let world = app.world();
    let text = world
        .get::<Text2d>(fixture.label)
        .map(|text| text.0.clone())
        .unwrap_or_default();
    let shown = world.get::<Visibility>(fixture.label) == Some(&Visibility::Inherited);
    (text, shown)
}
