use crate::event::Event;

/// This trait is used to define an async event handler, for embedders that hold handler state
/// behind an `Arc`. If a plain closure is enough, the preferred handling method is
/// [add_event_handler_closure][crate::client::Client::add_event_handler_closure].
#[async_trait::async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: Event);
}
