// crates/ports/src/observer.rs
use file_mover_domain::{TransferEvent, TransferOutcome};
use file_mover_shared_kernel::Result;

pub trait TransferObserver: Send + Sync {
    fn on_event(&self, event: &TransferEvent) -> Result<()>;
    fn on_complete(&self, outcome: &TransferOutcome) -> Result<()>;
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl TransferObserver for NullObserver {
    fn on_event(&self, _event: &TransferEvent) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self, _outcome: &TransferOutcome) -> Result<()> {
        Ok(())
    }
}
