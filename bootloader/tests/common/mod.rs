//! Simulated hart for driving the hand-off core on the host

#![allow(dead_code)]

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use fsbl::{HandoffRegion, HartControl, PrivilegeLevel};

/// Hardware-visible effects recorded by a [`SimulatedHart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Address-translation setup ran
    Prepared,
    /// Barrier issued; `flag_seen` is the handoff flag at that instant
    Barrier { flag_seen: bool },
    PreviousPrivilege(PrivilegeLevel),
    ExceptionReturn(usize),
    TrapReturn,
}

/// Payload of the panic that models a successful trap return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entered {
    pub hart: usize,
    pub entry: usize,
    pub privilege: PrivilegeLevel,
}

/// Payload of the panic that models a fatal halt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Halted {
    pub hart: usize,
    pub message: String,
}

#[derive(Debug)]
pub enum Terminal {
    Entered(Entered),
    Halted(Halted),
}

impl Terminal {
    pub fn entered(self) -> Entered {
        match self {
            Terminal::Entered(entered) => entered,
            Terminal::Halted(halted) => panic!("expected entry, hart halted: {:?}", halted),
        }
    }

    pub fn halted(self) -> Halted {
        match self {
            Terminal::Halted(halted) => halted,
            Terminal::Entered(entered) => panic!("expected halt, hart entered: {:?}", entered),
        }
    }
}

pub struct SimulatedHart<'r> {
    id: usize,
    region: &'r HandoffRegion,
    events: Arc<Mutex<Vec<Event>>>,
    spins: AtomicUsize,
}

impl<'r> SimulatedHart<'r> {
    pub fn new(id: usize, region: &'r HandoffRegion) -> Self {
        Self {
            id,
            region,
            events: Arc::new(Mutex::new(Vec::new())),
            spins: AtomicUsize::new(0),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Closure appending `event` to this hart's log, for hooks that run
    /// outside [`HartControl`] such as translation setup.
    pub fn recorder(&self, event: Event) -> Box<dyn Fn() + Send + Sync> {
        let events = Arc::clone(&self.events);
        Box::new(move || events.lock().unwrap().push(event))
    }

    pub fn spins(&self) -> usize {
        self.spins.load(Ordering::Relaxed)
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    fn last_programmed(&self) -> (Option<PrivilegeLevel>, Option<usize>) {
        let events = self.events.lock().unwrap();
        let privilege = events.iter().rev().find_map(|e| match e {
            Event::PreviousPrivilege(level) => Some(*level),
            _ => None,
        });
        let entry = events.iter().rev().find_map(|e| match e {
            Event::ExceptionReturn(entry) => Some(*entry),
            _ => None,
        });
        (privilege, entry)
    }
}

impl HartControl for SimulatedHart<'_> {
    fn hart_id(&self) -> usize {
        self.id
    }

    fn memory_barrier(&self) {
        std::sync::atomic::fence(Ordering::SeqCst);
        self.record(Event::Barrier {
            flag_seen: self.region.is_published(),
        });
    }

    fn spin_hint(&self) {
        self.spins.fetch_add(1, Ordering::Relaxed);
        std::hint::spin_loop();
    }

    fn set_previous_privilege(&self, level: PrivilegeLevel) {
        self.record(Event::PreviousPrivilege(level));
    }

    fn set_exception_return(&self, entry: usize) {
        self.record(Event::ExceptionReturn(entry));
    }

    unsafe fn trap_return(&self) -> ! {
        self.record(Event::TrapReturn);
        let (privilege, entry) = self.last_programmed();
        panic::panic_any(Entered {
            hart: self.id,
            entry: entry.expect("trap return without a programmed target"),
            privilege: privilege.unwrap_or(PrivilegeLevel::Machine),
        })
    }

    fn halt(&self, reason: &dyn fmt::Display) -> ! {
        panic::panic_any(Halted {
            hart: self.id,
            message: reason.to_string(),
        })
    }
}

/// Keep the default hook for real failures but stay quiet for the panics
/// that model a hart leaving the bootloader.
pub fn quiet_terminal_panics() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let payload = info.payload();
            if payload.is::<Entered>() || payload.is::<Halted>() {
                return;
            }
            previous(info);
        }));
    });
}

/// Run a never-returning hart path and report how it left.
pub fn run_to_terminal(path: impl FnOnce()) -> Terminal {
    quiet_terminal_panics();
    let payload: Box<dyn Any + Send> = match panic::catch_unwind(AssertUnwindSafe(path)) {
        Ok(()) => panic!("hart path returned to its caller"),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Entered>() {
        Ok(entered) => return Terminal::Entered(*entered),
        Err(other) => other,
    };
    match payload.downcast::<Halted>() {
        Ok(halted) => Terminal::Halted(*halted),
        Err(other) => panic::resume_unwind(other),
    }
}

/// Region with a `'static` lifetime for mock expectations
pub fn leaked_region() -> &'static HandoffRegion {
    Box::leak(Box::new(HandoffRegion::new()))
}
