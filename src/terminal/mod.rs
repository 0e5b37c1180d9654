pub mod buffer;
pub mod draft;
pub mod error;
pub mod keys;
pub mod phase;
pub mod script;
pub mod scripts;
pub mod selection;
pub mod session;
pub mod validate;
pub mod view;

pub use buffer::{BufferError, LineBuffer, LineCategory, MenuRegion, TerminalLine};
pub use draft::{DraftField, SubmissionDraft};
pub use error::WizardError;
pub use keys::{parse_scripted_terminal_keys, terminal_key_from_event, TerminalKey};
pub use phase::{Phase, ALL_PHASES};
pub use script::{
    ScriptStep, ScriptedSequence, SequenceCompletion, SequenceEvent, SequenceScheduler,
    SequenceToken,
};
pub use selection::{WorkshopSelector, WORKSHOP_CHOICES};
pub use session::{ConfirmationAnswer, SessionEffect, TerminalAction, TerminalSession};
pub use validate::{is_valid_absolute_url, is_valid_email};
pub use view::{project_terminal_view, TerminalViewModel};
