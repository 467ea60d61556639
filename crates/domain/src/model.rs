pub mod event;
pub mod outcome;
pub mod request;

pub use event::TransferEvent;
pub use outcome::{OutcomeRecorder, TransferOutcome};
pub use request::TransferRequest;
