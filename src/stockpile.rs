//! Stockpile display
//!
//! A stockpile entity owns two children: a contents container whose own children are the
//! apple slots, and a text label for quantities too large to show as slots. Assigning a
//! quantity is always explicit (see [`set_apples`], [`StockpileCommandsExt`] and
//! [`SetApples`]); editing the [`Stockpile`] component alone does not touch the visuals.

use bevy::ecs::system::{SystemParam, SystemState};
use bevy::prelude::*;
use thiserror::Error;

use crate::constants::LABEL_THRESHOLD;


pub struct StockpilePlugin;

impl Plugin for StockpilePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Stockpile>()
            .register_type::<StockpileContents>()
            .register_type::<StockpileLabel>()
            .add_message::<SetApples>()
            .add_message::<StockpileSynced>()
            .add_systems(Update, apply_set_apples);
    }
}

/// Number of apples held by a stockpile
///
/// Signed on purpose: negative quantities are accepted and simply show nothing.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct Stockpile {
    apples: i64,
}

impl Stockpile {
    pub fn new(apples: i64) -> Self {
        Self { apples }
    }

    /// Quantity from the last explicit assignment
    pub fn apples(&self) -> i64 {
        self.apples
    }
}

/// Marker for the child whose children are the apple slots
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct StockpileContents;

/// Marker for the overflow count label
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct StockpileLabel;

/// Request to assign a new quantity to a stockpile
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetApples {
    pub stockpile: Entity,
    pub apples: i64,
}

/// Notification emitted after a [`SetApples`] request was applied
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockpileSynced {
    pub stockpile: Entity,
    pub apples: i64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StockpileError {
    #[error("entity {0} is not a stockpile")]
    NotAStockpile(Entity),
    #[error("stockpile {0} has no contents container")]
    MissingContents(Entity),
    #[error("stockpile {0} has no label")]
    MissingLabel(Entity),
}

/// What a single sync did to the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySync {
    /// Slots left visible
    pub shown_slots: usize,
    /// Children of the contents container, with or without a `Visibility`
    pub total_slots: usize,
    /// Label text when the label is shown
    pub label: Option<String>,
}

/// Whether the slot at the 1-based `index` is visible for `apples`
pub fn slot_visible(index: usize, apples: i64) -> bool {
    i64::try_from(index).is_ok_and(|index| index <= apples)
}

/// Label text for `apples`, or `None` when the label should be hidden
pub fn label_text(apples: i64) -> Option<String> {
    (apples >= LABEL_THRESHOLD).then(|| apples.to_string())
}

fn shown_or_hidden(shown: bool) -> Visibility {
    if shown {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Everything needed to push a quantity onto a stockpile's visuals
#[derive(SystemParam)]
pub struct StockpileDisplay<'w, 's> {
    stockpiles: Query<'w, 's, (&'static mut Stockpile, Option<&'static Children>)>,
    contents: Query<'w, 's, Option<&'static Children>, With<StockpileContents>>,
    slots: Query<'w, 's, &'static mut Visibility, Without<StockpileLabel>>,
    labels: Query<'w, 's, (&'static mut Text2d, &'static mut Visibility), With<StockpileLabel>>,
}

impl StockpileDisplay<'_, '_> {
    /// Assign `apples` to `stockpile` and recompute every slot and the label
    ///
    /// Structural problems are reported before anything is mutated.
    pub fn sync(&mut self, stockpile: Entity, apples: i64) -> Result<DisplaySync, StockpileError> {
        let (contents, label) = self.parts(stockpile)?;

        if let Ok((mut store, _)) = self.stockpiles.get_mut(stockpile) {
            store.set_if_neq(Stockpile::new(apples));
        }

        let mut shown_slots = 0;
        let mut total_slots = 0;
        if let Ok(Some(children)) = self.contents.get(contents) {
            total_slots = children.len();
            for (offset, slot) in children.iter().enumerate() {
                let shown = slot_visible(offset + 1, apples);
                if let Ok(mut visibility) = self.slots.get_mut(slot) {
                    visibility.set_if_neq(shown_or_hidden(shown));
                    if shown {
                        shown_slots += 1;
                    }
                }
            }
        }

        let overflow = label_text(apples);
        let (mut text, mut visibility) = self
            .labels
            .get_mut(label)
            .map_err(|_| StockpileError::MissingLabel(stockpile))?;
        if let Some(overflow) = &overflow {
            if text.0 != *overflow {
                text.0.clone_from(overflow);
            }
            visibility.set_if_neq(Visibility::Inherited);
        } else {
            // hidden label keeps its old text
            visibility.set_if_neq(Visibility::Hidden);
        }

        Ok(DisplaySync {
            shown_slots,
            total_slots,
            label: overflow,
        })
    }

    /// Contents container and label of `stockpile`, first match in child order
    fn parts(&self, stockpile: Entity) -> Result<(Entity, Entity), StockpileError> {
        let (_, children) = self
            .stockpiles
            .get(stockpile)
            .map_err(|_| StockpileError::NotAStockpile(stockpile))?;
        let children = children.ok_or(StockpileError::MissingContents(stockpile))?;

        let contents = children
            .iter()
            .find(|child| self.contents.contains(*child))
            .ok_or(StockpileError::MissingContents(stockpile))?;
        let label = children
            .iter()
            .find(|child| self.labels.contains(*child))
            .ok_or(StockpileError::MissingLabel(stockpile))?;

        Ok((contents, label))
    }
}

/// Assign `apples` to `stockpile` from code holding the world
pub fn set_apples(
    world: &mut World,
    stockpile: Entity,
    apples: i64,
) -> Result<DisplaySync, StockpileError> {
    let mut state: SystemState<StockpileDisplay> = SystemState::new(world);
    let result = state.get_mut(world).sync(stockpile, apples);
    state.apply(world);
    result
}

/// Explicit setter for systems that only have `Commands`
pub trait StockpileCommandsExt {
    /// Queue an assignment; applied at the next command flush
    fn set_apples(&mut self, stockpile: Entity, apples: i64);
}

impl StockpileCommandsExt for Commands<'_, '_> {
    fn set_apples(&mut self, stockpile: Entity, apples: i64) {
        self.queue(move |world: &mut World| {
            match set_apples(world, stockpile, apples) {
                Ok(sync) => debug!(
                    "Stockpile {stockpile}: {apples} apples, {}/{} slots shown",
                    sync.shown_slots, sync.total_slots
                ),
                Err(err) => warn!("Ignoring apple assignment: {err}"),
            }
        });
    }
}

/// Apply every pending [`SetApples`] request in arrival order
pub fn apply_set_apples(
    mut requests: MessageReader<SetApples>,
    mut display: StockpileDisplay,
    mut synced: MessageWriter<StockpileSynced>,
) {
    for request in requests.read() {
        match display.sync(request.stockpile, request.apples) {
            Ok(sync) => {
                debug!(
                    "Stockpile {}: {} apples, {}/{} slots shown",
                    request.stockpile, request.apples, sync.shown_slots, sync.total_slots
                );
                synced.write(StockpileSynced {
                    stockpile: request.stockpile,
                    apples: request.apples,
                });
            }
            Err(err) => warn!("Ignoring apple assignment: {err}"),
        }
    }
}
