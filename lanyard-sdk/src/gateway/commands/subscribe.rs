use crate::gateway::envelope::{Envelope, opcode};
use crate::sdk_error::SdkError;
use log::trace;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

pub(crate) struct Subscribe;

impl Subscribe {
    /// Sent exactly once per connection, right after the hello frame.
    pub(crate) async fn send(
        ws_tx: &mpsc::Sender<Message>,
        subject_id: &str,
    ) -> Result<(), SdkError> {
        let frame = serde_json::to_string(&Envelope {
            op: opcode::SUBSCRIBE,
            d: Some(serde_json::json!({ "subscribe_to_id": subject_id })),
        })
        .or(Err(SdkError::TransmittingError))?;

        trace!("C: {frame}");
        ws_tx
            .send(Message::text(frame))
            .await
            .or(Err(SdkError::TransmittingError))
    }
}
