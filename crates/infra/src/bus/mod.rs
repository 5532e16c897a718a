use crate::PortariusContext;
use portarius_domain::{Event, EventKind};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

/// A side effect reacting to a published `Event`.
///
/// Listeners own their failure handling: nothing they return reaches
/// the publisher, so they log what went wrong together with the ids
/// carried by the event.
#[async_trait::async_trait]
pub trait EventListener: Send + Sync {
    async fn handle(&self, event: &Event, ctx: &PortariusContext);
}

/// In-process fan-out of `Event`s to the listeners registered for
/// their kind. Owned by the context and passed around explicitly, no
/// global registry. Events are not persisted; whatever is in flight
/// when the process stops is lost.
pub struct EventBus {
    listeners: RwLock<HashMap<EventKind, Vec<Arc<dyn EventListener>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a listener for an event kind. Multiple listeners per
    /// kind are allowed and all get invoked; registration order is
    /// preserved but carries no delivery-order guarantee.
    pub fn subscribe(&self, kind: EventKind, listener: Arc<dyn EventListener>) {
        self.listeners
            .write()
            .unwrap()
            .entry(kind)
            .or_insert_with(Vec::new)
            .push(listener);
    }

    /// Dispatches the event to every listener registered for its kind,
    /// each on its own task. Publishing returns as soon as the tasks
    /// are spawned; the handles are returned so callers that care
    /// (tests, mostly) can await completion, everyone else drops them.
    /// With no listener registered the event is silently dropped.
    pub fn publish(&self, event: Event, ctx: &PortariusContext) -> Vec<JoinHandle<()>> {
        let kind = event.kind();
        let listeners = match self.listeners.read().unwrap().get(&kind) {
            Some(listeners) => listeners.clone(),
            None => {
                debug!("No listener registered for {:?}, dropping event", kind);
                return Vec::new();
            }
        };

        listeners
            .into_iter()
            .map(|listener| {
                let event = event.clone();
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    listener.handle(&event, &ctx).await;
                })
            })
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::setup_context_inmemory;
    use portarius_domain::{ReminderChannel, ID};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingListener {
        invocations: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl EventListener for CountingListener {
        async fn handle(&self, _event: &Event, _ctx: &PortariusContext) {
            self.invocations.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn package_created() -> Event {
        Event::PackageCreated {
            package_id: ID::new(),
            channel: ReminderChannel::WhatsApp,
        }
    }

    #[tokio::test]
    async fn publishing_without_listeners_is_a_noop() {
        let ctx = setup_context_inmemory();
        let handles = ctx.bus.publish(package_created(), &ctx);
        assert!(handles.is_empty());
    }

    #[tokio::test]
    async fn every_registered_listener_is_invoked() {
        let ctx = setup_context_inmemory();
        let invocations = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            ctx.bus.subscribe(
                EventKind::PackageCreated,
                Arc::new(CountingListener {
                    invocations: invocations.clone(),
                }),
            );
        }

        let handles = ctx.bus.publish(package_created(), &ctx);
        assert_eq!(handles.len(), 3);
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(invocations.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn listeners_only_receive_their_kind() {
        let ctx = setup_context_inmemory();
        let invocations = Arc::new(AtomicUsize::new(0));
        ctx.bus.subscribe(
            EventKind::ReservationCreated,
            Arc::new(CountingListener {
                invocations: invocations.clone(),
            }),
        );

        let handles = ctx.bus.publish(package_created(), &ctx);
        assert!(handles.is_empty());
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }
}
