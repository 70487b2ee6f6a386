//! Generic finite-state machine engine.
//!
//! States carry optional enter/update/exit callbacks and an ordered list of
//! triggered transitions. The machine is agnostic of any particular game: it
//! is parameterized over the state id `S`, the trigger `T`, and a typed
//! context `C` that the controller owns and passes into every call. Callbacks
//! never fail; domain outcomes are expressed as further triggers raised by the
//! context, not as return codes.

use thiserror::Error;

/// State lifecycle callback. Plain function pointers keep the transition
/// tables `'static` and trivially copyable.
pub type Handler<C> = fn(&mut C);

/// A triggered edge out of a state. When `on_enter` is supplied it replaces
/// the target state's own enter callback for this transition only.
pub struct Transition<S, T, C> {
    pub trigger: T,
    pub target: S,
    pub on_enter: Option<Handler<C>>,
}

impl<S, T, C> Transition<S, T, C> {
    pub fn new(trigger: T, target: S) -> Self {
        Self {
            trigger,
            target,
            on_enter: None,
        }
    }

    pub fn with_enter(trigger: T, target: S, on_enter: Handler<C>) -> Self {
        Self {
            trigger,
            target,
            on_enter: Some(on_enter),
        }
    }
}

/// A state definition: id, optional callbacks, ordered transitions.
pub struct StateDef<S, T, C> {
    pub id: S,
    pub on_enter: Option<Handler<C>>,
    pub on_update: Option<Handler<C>>,
    pub on_exit: Option<Handler<C>>,
    pub transitions: Vec<Transition<S, T, C>>,
}

impl<S, T, C> StateDef<S, T, C> {
    pub fn new(id: S) -> Self {
        Self {
            id,
            on_enter: None,
            on_update: None,
            on_exit: None,
            transitions: Vec::new(),
        }
    }

    pub fn on_enter(mut self, handler: Handler<C>) -> Self {
        self.on_enter = Some(handler);
        self
    }

    pub fn on_update(mut self, handler: Handler<C>) -> Self {
        self.on_update = Some(handler);
        self
    }

    pub fn on_exit(mut self, handler: Handler<C>) -> Self {
        self.on_exit = Some(handler);
        self
    }

    pub fn transition(mut self, trigger: T, target: S) -> Self {
        self.transitions.push(Transition::new(trigger, target));
        self
    }

    pub fn transition_with(mut self, trigger: T, target: S, on_enter: Handler<C>) -> Self {
        self.transitions
            .push(Transition::with_enter(trigger, target, on_enter));
        self
    }
}

/// Errors rejected at machine construction. Transition tables are validated
/// up front so that run-time dispatch can never index a missing state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("state table is empty")]
    EmptyStateTable,
    #[error("duplicate state id at table index {0}")]
    DuplicateState(usize),
    #[error("transition {transition} of state at index {state} targets an unknown state")]
    UnknownTarget { state: usize, transition: usize },
}

/// The machine itself: owned state table plus the current-state index.
/// The context lives with the caller and is borrowed per call.
pub struct StateMachine<S, T, C> {
    states: Vec<StateDef<S, T, C>>,
    current: usize,
}

impl<S: Copy + PartialEq, T: Copy + PartialEq, C> StateMachine<S, T, C> {
    /// Builds a machine with the first table entry as initial state.
    pub fn new(states: Vec<StateDef<S, T, C>>) -> Result<Self, FsmError> {
        if states.is_empty() {
            return Err(FsmError::EmptyStateTable);
        }
        for (i, state) in states.iter().enumerate() {
            if states[..i].iter().any(|other| other.id == state.id) {
                return Err(FsmError::DuplicateState(i));
            }
        }
        for (i, state) in states.iter().enumerate() {
            for (j, transition) in state.transitions.iter().enumerate() {
                if !states.iter().any(|s| s.id == transition.target) {
                    return Err(FsmError::UnknownTarget {
                        state: i,
                        transition: j,
                    });
                }
            }
        }
        Ok(Self { states, current: 0 })
    }

    /// Id of the current state.
    pub fn current(&self) -> S {
        self.states[self.current].id
    }

    /// Scans the current state's transitions in declared order and follows
    /// the first one matching `trigger`: exit callback, state switch, then
    /// the transition's enter override or the target's enter callback.
    ///
    /// Returns false (and changes nothing) when no transition matches; states
    /// filter irrelevant triggers by simply not listing them.
    pub fn process_trigger(&mut self, trigger: T, ctx: &mut C) -> bool {
        let state = &self.states[self.current];
        let Some(transition) = state.transitions.iter().find(|t| t.trigger == trigger) else {
            return false;
        };
        let target = transition.target;
        let enter_override = transition.on_enter;
        let on_exit = state.on_exit;

        if let Some(exit) = on_exit {
            exit(ctx);
        }
        if let Some(index) = self.index_of(target) {
            self.current = index;
        }
        let enter = enter_override.or(self.states[self.current].on_enter);
        if let Some(enter) = enter {
            enter(ctx);
        }
        true
    }

    /// Runs the current state's update callback, if any.
    pub fn update(&mut self, ctx: &mut C) {
        if let Some(update) = self.states[self.current].on_update {
            update(ctx);
        }
    }

    fn index_of(&self, id: S) -> Option<usize> {
        self.states.iter().position(|s| s.id == id)
    }
}
