//! chatlens-stream — boundary between the SSE transport and the segmenter.
//!
//! Decodes the loosely-typed payloads the code-generation endpoint emits
//! ([payload]), accumulates chunks into one message buffer, and re-parses
//! the buffer per increment ([accumulator]). The segmenter itself only ever
//! sees a fully-resolved string.

pub mod accumulator;
pub mod error;
pub mod payload;

pub use accumulator::MessageStream;
pub use error::{Result, StreamError};
pub use payload::{decode_chunk, BusinessError, StreamEvent};
