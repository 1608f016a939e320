use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::RentalFlow;

/// In-memory home of the active rental flows. There is deliberately no
/// persistence; a flow lives only as long as the shopper's session and the
/// process. The lock is released before any outbound call is awaited.
#[derive(Debug, Default)]
pub struct FlowStore {
    flows: RwLock<HashMap<Uuid, RentalFlow>>,
}

impl FlowStore {
    pub async fn insert(&self, flow: RentalFlow) {
        self.flows.write().await.insert(flow.id, flow);
    }

    pub async fn get(&self, id: &Uuid) -> Option<RentalFlow> {
        self.flows.read().await.get(id).cloned()
    }

    /// Runs `apply` against the flow under the write lock and returns its
    /// result, or `None` when the flow does not exist.
    pub async fn with_mut<T>(
        &self,
        id: &Uuid,
        apply: impl FnOnce(&mut RentalFlow) -> T,
    ) -> Option<T> {
        self.flows.write().await.get_mut(id).map(apply)
    }
}
