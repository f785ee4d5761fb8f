pub(crate) mod commands;
pub(crate) mod envelope;
pub(crate) mod event_matcher;
