#[cfg(test)]
mod support;

#[cfg(test)]
mod heartbeat;
#[cfg(test)]
mod malformed;
#[cfg(test)]
mod presence;
#[cfg(test)]
mod reconnect;
