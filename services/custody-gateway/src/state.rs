use contracts::SharedLedger;
use contracts::events::ContractEvent;

#[derive(Clone)]
pub struct AppState {
    pub ledger: SharedLedger,
}

impl AppState {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Drain ledger events into the audit log.
    pub fn publish_events(&self) {
        for event in self.ledger.drain_events() {
            match &event {
                ContractEvent::FundsReceived(e) => tracing::info!(
                    event = event.label(),
                    proposal_id = %e.proposal_id,
                    from = %e.from,
                    amount = %e.amount,
                    "audit"
                ),
                ContractEvent::ReleaseExecuted(e) => tracing::info!(
                    event = event.label(),
                    proposal_id = %e.proposal_id,
                    recipient = %e.recipient,
                    amount = %e.amount,
                    "audit"
                ),
            }
        }
    }
}
