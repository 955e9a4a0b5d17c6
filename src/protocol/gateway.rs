use std::collections::VecDeque;

use crate::error::{TimelineError, TimelineResult};
use crate::protocol::wire::{MasterDataEntry, ResourceEnvelope, ResourceRequest};

/// Network seam owned by the host application.
///
/// The engine builds wire requests and interprets envelopes; the gateway
/// only moves bytes. Implementations are free to block, queue, or fan out —
/// the controller's generation counter discards whatever comes back stale.
pub trait ResourceGateway {
    fn fetch_resources(&mut self, request: &ResourceRequest) -> TimelineResult<ResourceEnvelope>;

    fn fetch_status_options(&mut self) -> TimelineResult<Vec<MasterDataEntry>>;
}

/// Gateway that always answers with empty results. Useful for tests and
/// for hosts that wire data in manually.
#[derive(Debug, Default)]
pub struct NullGateway {
    resource_fetches: usize,
}

impl NullGateway {
    #[must_use]
    pub fn resource_fetches(&self) -> usize {
        self.resource_fetches
    }
}

impl ResourceGateway for NullGateway {
    fn fetch_resources(&mut self, _request: &ResourceRequest) -> TimelineResult<ResourceEnvelope> {
        self.resource_fetches += 1;
        Ok(ResourceEnvelope {
            response_data: None,
        })
    }

    fn fetch_status_options(&mut self) -> TimelineResult<Vec<MasterDataEntry>> {
        Ok(Vec::new())
    }
}

/// Gateway replaying a scripted sequence of responses while recording every
/// outgoing request, mirroring how the render seam is exercised in tests.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    responses: VecDeque<Result<ResourceEnvelope, String>>,
    master_data: Vec<MasterDataEntry>,
    master_data_failure: Option<String>,
    requests: Vec<ResourceRequest>,
}

impl ScriptedGateway {
    /// Queues a successful envelope whose `ResponseData` is `raw` (pass
    /// `None` for an envelope with no payload).
    pub fn push_envelope(&mut self, raw: Option<&str>) {
        self.responses.push_back(Ok(ResourceEnvelope {
            response_data: raw.map(str::to_owned),
        }));
    }

    /// Queues a transport failure.
    pub fn push_transport_failure(&mut self, message: &str) {
        self.responses.push_back(Err(message.to_owned()));
    }

    pub fn set_master_data(&mut self, entries: Vec<MasterDataEntry>) {
        self.master_data = entries;
        self.master_data_failure = None;
    }

    pub fn fail_master_data(&mut self, message: &str) {
        self.master_data_failure = Some(message.to_owned());
    }

    /// Requests recorded so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[ResourceRequest] {
        &self.requests
    }
}

impl ResourceGateway for ScriptedGateway {
    fn fetch_resources(&mut self, request: &ResourceRequest) -> TimelineResult<ResourceEnvelope> {
        self.requests.push(request.clone());
        match self.responses.pop_front() {
            Some(Ok(envelope)) => Ok(envelope),
            Some(Err(message)) => Err(TimelineError::Transport(message)),
            None => Ok(ResourceEnvelope {
                response_data: None,
            }),
        }
    }

    fn fetch_status_options(&mut self) -> TimelineResult<Vec<MasterDataEntry>> {
        match &self.master_data_failure {
            Some(message) => Err(TimelineError::Transport(message.clone())),
            None => Ok(self.master_data.clone()),
        }
    }
}
