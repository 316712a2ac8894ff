//! Button identities, the toggle state machine and blink periods.

use core::fmt;

/// One button/LED pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lane {
    Red,
    Yellow,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::Red, Lane::Yellow];

    pub const fn index(self) -> usize {
        match self {
            Lane::Red => 0,
            Lane::Yellow => 1,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lane::Red => "R",
            Lane::Yellow => "Y",
        })
    }
}

/// Whether a lane should be blinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    Inactive,
    Active,
}

impl Activity {
    pub const fn flipped(self) -> Self {
        match self {
            Activity::Inactive => Activity::Active,
            Activity::Active => Activity::Inactive,
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Activity::Active)
    }
}

/// Half-period of a blink pattern in milliseconds.
///
/// Zero means the LED is held low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkPeriod(u32);

impl BlinkPeriod {
    pub const IDLE: BlinkPeriod = BlinkPeriod(0);

    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    pub const fn is_idle(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BlinkPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_idle() {
            f.write_str("idle")
        } else {
            write!(f, "{}ms", self.0)
        }
    }
}

/// Per-lane toggle state.
///
/// Every press flips the lane between [`Activity::Inactive`] and
/// [`Activity::Active`]; the resulting period depends only on the new state.
#[derive(Debug, Clone)]
pub struct Toggles {
    states: [Activity; Lane::ALL.len()],
    active_period: BlinkPeriod,
}

impl Toggles {
    pub const fn new(active_period: BlinkPeriod) -> Self {
        Self {
            states: [Activity::Inactive; Lane::ALL.len()],
            active_period,
        }
    }

    /// Flips `lane` and returns the period its LED should now run at.
    pub fn press(&mut self, lane: Lane) -> BlinkPeriod {
        let state = self.states[lane.index()].flipped();
        self.states[lane.index()] = state;
        self.period_for(state)
    }

    pub fn activity(&self, lane: Lane) -> Activity {
        self.states[lane.index()]
    }

    #[cfg(test)]
    pub fn period(&self, lane: Lane) -> BlinkPeriod {
        self.period_for(self.activity(lane))
    }

    fn period_for(&self, activity: Activity) -> BlinkPeriod {
        if activity.is_active() {
            self.active_period
        } else {
            BlinkPeriod::IDLE
        }
    }
}
