use bevy::prelude::*;

use crate::constants::LARGE_STEP;
use crate::stockpile::{SetApples, Stockpile, apply_set_apples};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_stockpile_keys.before(apply_set_apples));
    }
}

/// What a key press does to the current quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppleChange {
    Add(i64),
    Reset,
}

impl AppleChange {
    /// Quantity after applying the change; no clamping, negatives are allowed
    pub fn apply(self, apples: i64) -> i64 {
        match self {
            AppleChange::Add(delta) => apples.saturating_add(delta),
            AppleChange::Reset => 0,
        }
    }
}

fn pressed_change(keys: &ButtonInput<KeyCode>) -> Option<AppleChange> {
    if keys.just_pressed(KeyCode::ArrowUp) {
        Some(AppleChange::Add(1))
    } else if keys.just_pressed(KeyCode::ArrowDown) {
        Some(AppleChange::Add(-1))
    } else if keys.just_pressed(KeyCode::PageUp) {
        Some(AppleChange::Add(LARGE_STEP))
    } else if keys.just_pressed(KeyCode::PageDown) {
        Some(AppleChange::Add(-LARGE_STEP))
    } else if keys.just_pressed(KeyCode::Backspace) {
        Some(AppleChange::Reset)
    } else {
        None
    }
}

/// Arrow keys, PageUp/PageDown and Backspace assign new quantities to every stockpile
pub fn handle_stockpile_keys(
    keys: Res<ButtonInput<KeyCode>>,
    stockpiles: Query<(Entity, &Stockpile)>,
    mut requests: MessageWriter<SetApples>,
) {
    let Some(change) = pressed_change(&keys) else {
        return;
    };

    for (entity, stockpile) in stockpiles.iter() {
        let apples = change.apply(stockpile.apples());
        info!("Stockpile {entity}: {} -> {apples} apples", stockpile.apples());
        requests.write(SetApples {
            stockpile: entity,
            apples,
        });
    }
}
