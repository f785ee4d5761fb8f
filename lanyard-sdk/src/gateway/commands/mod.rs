pub(crate) mod heartbeat;
pub(crate) mod subscribe;
