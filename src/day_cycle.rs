use bevy::prelude::*;

use crate::constants::{PHASES_PER_DAY, PHASE_LENGTH_SECS};

pub struct DayCyclePlugin;

impl Plugin for DayCyclePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<DayCycle>()
            .register_type::<DayCycleSettings>()
            .init_resource::<DayCycle>()
            .init_resource::<DayCycleSettings>()
            .init_state::<DayPhase>()
            .add_message::<PhaseTransition>()
            .add_systems(Update, tick_day_cycle);
    }
}

/// Quarter of a day
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum DayPhase {
    #[default]
    Morning,
    Midday,
    Evening,
    Night,
}

impl core::fmt::Display for DayPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DayPhase::Morning => write!(f, "Morning"),
            DayPhase::Midday => write!(f, "Midday"),
            DayPhase::Evening => write!(f, "Evening"),
            DayPhase::Night => write!(f, "Night"),
        }
    }
}

impl DayPhase {
    pub fn next(&self) -> Self {
        match self {
            DayPhase::Morning => DayPhase::Midday,
            DayPhase::Midday => DayPhase::Evening,
            DayPhase::Evening => DayPhase::Night,
            DayPhase::Night => DayPhase::Morning,
        }
    }

    /// Phase for the `index`-th phase since the cycle started; wraps in both directions
    pub fn from_index(index: i64) -> Self {
        match index.rem_euclid(PHASES_PER_DAY) {
            0 => DayPhase::Morning,
            1 => DayPhase::Midday,
            2 => DayPhase::Evening,
            _ => DayPhase::Night,
        }
    }
}

/// Seconds per phase; override with `insert_resource` before running the app
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct DayCycleSettings {
    pub phase_length_secs: f64,
}

impl Default for DayCycleSettings {
    fn default() -> Self {
        Self {
            phase_length_secs: PHASE_LENGTH_SECS,
        }
    }
}

/// Elapsed day time in seconds
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct DayCycle {
    pub time: f64,
}

/// Emitted when the day moves into a different phase
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: DayPhase,
    pub to: DayPhase,
}

impl DayCycle {
    pub fn phase(&self, phase_length: f64) -> DayPhase {
        if phase_length <= 0.0 || phase_length.is_nan() {
            return DayPhase::Morning;
        }
        DayPhase::from_index((self.time / phase_length).floor() as i64)
    }

    /// Add `delta` seconds, returning the transition if the phase changed
    pub fn advance(&mut self, delta: f64, phase_length: f64) -> Option<PhaseTransition> {
        let from = self.phase(phase_length);
        self.time += delta;
        let to = self.phase(phase_length);
        (from != to).then_some(PhaseTransition { from, to })
    }
}

pub fn tick_day_cycle(
    time: Res<Time>,
    settings: Res<DayCycleSettings>,
    mut cycle: ResMut<DayCycle>,
    mut next_phase: ResMut<NextState<DayPhase>>,
    mut transitions: MessageWriter<PhaseTransition>,
) {
    if let Some(transition) = cycle.advance(time.delta_secs_f64(), settings.phase_length_secs) {
        info!(
            "Phase transition from {} to {}!",
            transition.from, transition.to
        );
        next_phase.set(transition.to);
        transitions.write(transition);
    }
}
