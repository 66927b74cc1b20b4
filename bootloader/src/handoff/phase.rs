//! Per-hart hand-off state machine

use core::fmt;

use crate::config::BootConfig;

/// Which side of the hand-off a hart plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HartRole {
    Boot,
    Secondary,
}

impl HartRole {
    pub fn of(hart_id: usize, config: &BootConfig) -> Self {
        if hart_id == config.boot_hart {
            HartRole::Boot
        } else {
            HartRole::Secondary
        }
    }
}

impl fmt::Display for HartRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HartRole::Boot => write!(f, "boot"),
            HartRole::Secondary => write!(f, "secondary"),
        }
    }
}

/// Hand-off phase of a single hart.
///
/// `Wait -> Enter` and `Prepare -> Enter` are the only ways into `Enter`;
/// `Running` is terminal and is never observed by code in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HartPhase {
    Wait = 0,
    Prepare = 1,
    Enter = 2,
    Running = 3,
}

static_assertions::assert_eq_size!(HartPhase, u8);

impl HartPhase {
    pub fn initial(role: HartRole) -> Self {
        match role {
            HartRole::Boot => HartPhase::Prepare,
            HartRole::Secondary => HartPhase::Wait,
        }
    }

    /// Next phase given whether the handoff flag is raised.
    ///
    /// `Wait` and `Prepare` stay put until `published` is true.
    pub fn advance(self, published: bool) -> Self {
        match self {
            HartPhase::Wait | HartPhase::Prepare if published => HartPhase::Enter,
            HartPhase::Wait | HartPhase::Prepare => self,
            HartPhase::Enter | HartPhase::Running => HartPhase::Running,
        }
    }
}

impl fmt::Display for HartPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HartPhase::Wait => "WAIT",
            HartPhase::Prepare => "PREPARE",
            HartPhase::Enter => "ENTER",
            HartPhase::Running => "RUNNING",
        };
        f.write_str(name)
    }
}
