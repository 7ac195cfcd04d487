//! Testing utilities for the stockpile display
//!
//! Fixtures build the stockpile hierarchy directly in a bare `World`, so systems and the
//! explicit setters can be exercised without a window or the full plugin set.

use bevy::prelude::*;

use crate::day_cycle::{DayCycle, DayCycleSettings, DayPhase, PhaseTransition};
use crate::stockpile::{SetApples, Stockpile, StockpileContents, StockpileLabel, StockpileSynced};

/// Entities making up one test stockpile
pub struct TestStockpile {
    pub root: Entity,
    pub contents: Entity,
    pub slots: Vec<Entity>,
    pub label: Entity,
}

/// Creates a minimal ECS world with the resources stockpile and day cycle systems read
pub fn create_test_world() -> World {
    let mut world = World::new();

    world.insert_resource(Time::<()>::default());
    world.insert_resource(DayCycleSettings::default());
    world.insert_resource(DayCycle::default());
    world.init_resource::<NextState<DayPhase>>();
    world.init_resource::<Messages<PhaseTransition>>();
    world.init_resource::<Messages<SetApples>>();
    world.init_resource::<Messages<StockpileSynced>>();

    world
}

/// Spawns a stockpile with `slot_count` visible slots and a hidden, empty label
pub fn create_test_stockpile(world: &mut World, slot_count: usize) -> TestStockpile {
    let root = world.spawn(Stockpile::default()).id();
    let contents = world.spawn((StockpileContents, ChildOf(root))).id();
    let slots = (0..slot_count)
        .map(|_| world.spawn((Visibility::Inherited, ChildOf(contents))).id())
        .collect();
    let label = world
        .spawn((
            StockpileLabel,
            Text2d::new(""),
            Visibility::Hidden,
            ChildOf(root),
        ))
        .id();

    TestStockpile {
        root,
        contents,
        slots,
        label,
    }
}

/// Visibility of every slot, in child order
pub fn slot_states(world: &World, stockpile: &TestStockpile) -> Vec<bool> {
    stockpile
        .slots
        .iter()
        .map(|slot| world.get::<Visibility>(*slot) != Some(&Visibility::Hidden))
        .collect()
}

/// Label text and whether the label is shown
pub fn label_state(world: &World, stockpile: &TestStockpile) -> (String, bool) {
    let text = world
        .get::<Text2d>(stockpile.label)
        .map(|text| text.0.clone())
        .unwrap_or_default();
    let shown = world.get::<Visibility>(stockpile.label) != Some(&Visibility::Hidden);
    (text, shown)
}
