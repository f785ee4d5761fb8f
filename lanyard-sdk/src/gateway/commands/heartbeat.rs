use crate::gateway::envelope::{Envelope, opcode};
use crate::sdk_error::SdkError;
use log::trace;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

pub(crate) struct Heartbeat;

impl Heartbeat {
    pub(crate) async fn send(ws_tx: &mpsc::Sender<Message>) -> Result<(), SdkError> {
        let frame = serde_json::to_string(&Envelope {
            op: opcode::HEARTBEAT,
            d: None,
        })
        .or(Err(SdkError::TransmittingError))?;

        trace!("C: {frame}");
        ws_tx
            .send(Message::text(frame))
            .await
            .or(Err(SdkError::TransmittingError))
    }
}
