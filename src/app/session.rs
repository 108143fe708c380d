//! Game session: owns the engine state and drives the update/render loop.

use super::config::{OutputFormat, SessionConfig};
use crate::{
    Result,
    adapters::LogObserver,
    engine::{Action, GameState},
    ports::Observer,
    render::{View, render},
};

/// Single-player-seat game session.
///
/// Every action goes through [`Session::dispatch`], which computes the next
/// state, tells each observer what happened and returns the fresh view.
///
/// # Examples
///
/// ```
/// use tictactoe_time_machine::{
///     app::{Session, SessionConfig},
///     engine::Action,
/// };
///
/// let mut session = Session::new(SessionConfig::new());
/// session.dispatch(Action::Move(4))?;
/// let view = session.dispatch(Action::Move(0))?;
/// assert_eq!(view.status, "Next Player: X");
///
/// let view = session.dispatch(Action::JumpTo(1))?;
/// assert_eq!(view.current_step, "Step #1");
/// # Ok::<(), tictactoe_time_machine::Error>(())
/// ```
pub struct Session {
    config: SessionConfig,
    state: GameState,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Create a session at the start of a fresh game.
    ///
    /// A verbose config installs a [`LogObserver`] on stderr.
    pub fn new(config: SessionConfig) -> Self {
        let mut observers: Vec<Box<dyn Observer>> = Vec::new();
        if config.verbose {
            observers.push(Box::new(LogObserver::new()));
        }
        Self {
            config,
            state: GameState::new(),
            observers,
        }
    }

    /// Add an observer.
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Render the current state
    pub fn view(&self) -> View {
        render(&self.state)
    }

    /// Apply one action and return the view of the resulting state.
    ///
    /// Rejected moves and jumps leave the state unchanged and are only
    /// reported to observers.
    ///
    /// # Errors
    ///
    /// Returns error if an observer fails. The state is updated and every
    /// observer has been notified before the error is returned.
    pub fn dispatch(&mut self, action: Action) -> Result<View> {
        let observers = &mut self.observers;
        match action {
            Action::Move(index) => {
                let player = self.state.to_move();
                match self.state.try_apply_move(index) {
                    Ok(next) => {
                        self.state = next;
                        let state = &self.state;
                        let outcome = state.outcome();
                        let applied = notify(observers, |o| o.on_move_applied(index, player, state));
                        let finished = if outcome.is_terminal() {
                            notify(observers, |o| o.on_game_over(outcome))
                        } else {
                            Ok(())
                        };
                        applied.and(finished)?;
                    }
                    Err(reason) => notify(observers, |o| o.on_move_rejected(index, &reason))?,
                }
            }
            Action::JumpTo(step) => match self.state.try_jump_to(step) {
                Ok(next) => {
                    self.state = next;
                    let state = &self.state;
                    notify(observers, |o| o.on_jump(step, state))?;
                }
                Err(reason) => notify(observers, |o| o.on_jump_rejected(step, &reason))?,
            },
            Action::NewGame => {
                self.state = self.state.new_game();
                notify(observers, |o| o.on_new_game())?;
            }
        }
        Ok(self.view())
    }

    /// Dispatch a sequence of actions and return the final view.
    ///
    /// # Errors
    ///
    /// Returns error if an observer fails.
    pub fn run<I>(&mut self, actions: I) -> Result<View>
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(self.view())
    }

    /// Format the current view in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns error if JSON serialization fails.
    pub fn format_view(&self) -> Result<String> {
        let view = self.view();
        match self.config.output {
            OutputFormat::Text => Ok(view.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
        }
    }
}

/// Deliver an event to every observer, returning the first failure.
///
/// The session state is already updated when this runs, so a failing
/// observer never leaves it behind what the others were told.
fn notify<F>(observers: &mut [Box<dyn Observer>], mut event: F) -> Result<()>
where
    F: FnMut(&mut dyn Observer) -> Result<()>,
{
    let mut first_error = None;
    for observer in observers.iter_mut() {
        if let Err(err) = event(observer.as_mut()) {
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
