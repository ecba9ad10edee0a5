//! Transient input envelope.

/// Pairing of an input signal with the payload accompanying it.
///
/// A message exists for the duration of a single input dispatch: the router
/// consumes the signal to pick a path and threads the payload into the
/// resulting sequence. It is not retained afterwards.
#[derive(Clone, Debug)]
pub struct Message<I, P> {
    /// The signal being dispatched.
    pub signal: I,
    /// Caller-supplied data threaded through the resulting call chain.
    pub payload: P,
}

impl<I, P> Message<I, P> {
    /// Create a message for one input dispatch.
    pub fn new(signal: I, payload: P) -> Self {
        Self { signal, payload }
    }

    /// Split the message back into its parts.
    pub fn into_parts(self) -> (I, P) {
        (self.signal, self.payload)
    }
}
