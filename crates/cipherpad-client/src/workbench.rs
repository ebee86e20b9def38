//! Workbench state machine.
//!
//! The `Workbench` is the single owner of a session's state: the mapping
//! engine, the filtered message, the mode and the last output. Front ends
//! feed it [`WorkbenchEvent`]s and apply the [`WorkbenchAction`]s it returns.

use cipherpad_core::{Environment, Mapping, MappingEngine, Message, Mode, SetOutcome};
use tracing::debug;

use crate::{
    config::{InitialMapping, WorkbenchConfig},
    error::WorkbenchError,
    event::{WorkbenchAction, WorkbenchEvent},
    view::WorkbenchSnapshot,
};

/// Workbench state machine.
///
/// Pure state machine - returns actions, caller handles rendering.
///
/// # Type Parameters
///
/// - `E`: Environment implementation for randomness
pub struct Workbench<E: Environment> {
    /// Mapping owner.
    engine: MappingEngine<E>,

    /// Current filtered message.
    message: Message,

    /// Current mode.
    mode: Mode,

    /// Output of the last `Process`. Kept across edits until the next one.
    output: String,

    /// Editor column count.
    groups: usize,
}

impl<E: Environment> Workbench<E> {
    /// Create a workbench from `config`.
    ///
    /// # Errors
    ///
    /// [`WorkbenchError::InvalidConfig`] if `config.groups` is 0 or exceeds
    /// the alphabet length.
    pub fn new(env: E, config: WorkbenchConfig) -> Result<Self, WorkbenchError> {
        if config.groups == 0 {
            return Err(WorkbenchError::InvalidConfig {
                reason: "groups must be at least 1".to_string(),
            });
        }
        if config.groups > config.alphabet.len() {
            return Err(WorkbenchError::InvalidConfig {
                reason: format!(
                    "groups must not exceed the alphabet length ({}), got {}",
                    config.alphabet.len(),
                    config.groups
                ),
            });
        }

        let engine = match config.initial_mapping {
            InitialMapping::Shuffled => MappingEngine::new(env, config.alphabet),
            InitialMapping::Identity => {
                MappingEngine::with_mapping(env, Mapping::identity(config.alphabet))
            },
            InitialMapping::Unset => MappingEngine::with_mapping(env, Mapping::unset(config.alphabet)),
        };

        Ok(Self {
            engine,
            message: Message::default(),
            mode: config.initial_mode,
            output: String::new(),
            groups: config.groups,
        })
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current filtered message.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Output of the last transform.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Current mapping.
    pub fn mapping(&self) -> &Mapping {
        self.engine.mapping()
    }

    /// Snapshot of everything a front end renders.
    pub fn snapshot(&self) -> WorkbenchSnapshot {
        WorkbenchSnapshot::new(
            self.engine.mapping(),
            self.groups,
            self.mode,
            self.message.as_str(),
            &self.output,
        )
    }

    /// Process an event and return resulting actions.
    ///
    /// # Errors
    ///
    /// Returns `WorkbenchError` if the event addresses a letter outside the
    /// alphabet. State is unchanged in that case.
    pub fn handle(&mut self, event: WorkbenchEvent) -> Result<Vec<WorkbenchAction>, WorkbenchError> {
        match event {
            WorkbenchEvent::EditMapping { letter, input } => {
                self.handle_edit_mapping(letter, &input)
            },
            WorkbenchEvent::EditMessage { raw } => Ok(self.handle_edit_message(&raw)),
            WorkbenchEvent::Process => Ok(self.handle_process()),
            WorkbenchEvent::ToggleMode => Ok(self.handle_toggle_mode()),
            WorkbenchEvent::Reshuffle => Ok(self.handle_reshuffle()),
        }
    }

    /// Handle a mapping editor change.
    fn handle_edit_mapping(
        &mut self,
        letter: char,
        input: &str,
    ) -> Result<Vec<WorkbenchAction>, WorkbenchError> {
        let outcome = self.engine.set_mapping(letter, input)?;

        let value = match outcome {
            SetOutcome::Updated { value } => Some(value),
            SetOutcome::Cleared => None,
            SetOutcome::Rejected { input } => {
                return Ok(vec![WorkbenchAction::Log {
                    message: format!("Ignored reserved value {input:?} for {letter:?}"),
                }]);
            },
        };

        Ok(vec![WorkbenchAction::MappingChanged { letter, value }, self.render()])
    }

    /// Handle a message box change.
    fn handle_edit_message(&mut self, raw: &str) -> Vec<WorkbenchAction> {
        self.message = MappingEngine::<E>::set_message(raw);

        vec![
            WorkbenchAction::MessageChanged { message: self.message.as_str().to_string() },
            self.render(),
        ]
    }

    /// Handle the process button.
    fn handle_process(&mut self) -> Vec<WorkbenchAction> {
        self.output = self.engine.transform(&self.message, self.mode);
        debug!(mode = %self.mode, chars = self.message.char_count(), "processed message");

        vec![
            WorkbenchAction::OutputReady { mode: self.mode, text: self.output.clone() },
            self.render(),
        ]
    }

    /// Handle the mode toggle.
    fn handle_toggle_mode(&mut self) -> Vec<WorkbenchAction> {
        self.mode = self.mode.toggled();

        vec![WorkbenchAction::ModeChanged { mode: self.mode }, self.render()]
    }

    /// Handle a reshuffle request.
    fn handle_reshuffle(&mut self) -> Vec<WorkbenchAction> {
        self.engine.reinitialize();

        vec![
            WorkbenchAction::Log { message: "Reshuffled mapping".to_string() },
            self.render(),
        ]
    }

    fn render(&self) -> WorkbenchAction {
        WorkbenchAction::Render(self.snapshot())
    }
}
