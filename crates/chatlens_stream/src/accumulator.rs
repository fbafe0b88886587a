//! Chunk accumulator: owns the buffer of one streamed assistant message and
//! re-parses the whole buffer when asked for segments.

use chatlens_core::Segment;

use crate::payload::{BusinessError, StreamEvent};

/// Accumulated state of one streamed assistant message.
#[derive(Debug, Clone, Default)]
pub struct MessageStream {
    content: String,
    completed: bool,
    business_error: Option<BusinessError>,
}

impl MessageStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one stream event. Events arriving after completion are dropped;
    /// the EventSource can still deliver a queued message after `done`.
    pub fn apply(&mut self, event: StreamEvent) {
        if self.completed {
            tracing::debug!("dropping event after stream completion");
            return;
        }
        match event {
            StreamEvent::Message { data } => {
                if data.is_empty() {
                    return;
                }
                self.content.push_str(&data);
            }
            StreamEvent::Done { .. } => {
                tracing::debug!(chars = self.content.len(), "stream complete");
                self.completed = true;
            }
            StreamEvent::BusinessError(err) => {
                tracing::warn!(code = err.code, message = %err.message, "stream aborted by backend");
                self.business_error = Some(err);
                self.completed = true;
            }
        }
    }

    /// Append one already-decoded chunk.
    pub fn push_chunk(&mut self, chunk: &str) {
        self.apply(StreamEvent::Message {
            data: chunk.to_string(),
        });
    }

    /// The accumulated buffer so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn business_error(&self) -> Option<&BusinessError> {
        self.business_error.as_ref()
    }

    /// Segments for the current buffer. Full re-parse per call; the parser
    /// is pure, so the final result equals a single parse of the complete
    /// buffer no matter how the chunks were sliced.
    pub fn segments(&self) -> Vec<Segment> {
        chatlens_core::parse(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_accumulate_across_marker_boundaries() {
        let mut stream = MessageStream::new();
        stream.push_chunk("[选择工具]");
        stream.push_chunk(" 写入文件\n[工具调用] 写入");
        stream.push_chunk("文件 a.txt");
        let segments = stream.segments();
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::ToolCall { .. }));
    }

    #[test]
    fn empty_chunks_are_ignored() {
        let mut stream = MessageStream::new();
        stream.push_chunk("");
        stream.push_chunk("hi");
        assert_eq!(stream.content(), "hi");
    }

    #[test]
    fn events_after_done_are_dropped() {
        let mut stream = MessageStream::new();
        stream.push_chunk("before");
        stream.apply(StreamEvent::Done { data: String::new() });
        stream.push_chunk(" after");
        assert_eq!(stream.content(), "before");
        assert!(stream.is_completed());
    }

    #[test]
    fn business_error_completes_the_stream() {
        let mut stream = MessageStream::new();
        stream.apply(StreamEvent::BusinessError(BusinessError {
            error: true,
            code: 429,
            message: "请求过于频繁".into(),
        }));
        assert!(stream.is_completed());
        assert_eq!(stream.business_error().unwrap().code, 429);
    }

    #[test]
    fn segments_are_stable_between_calls() {
        let mut stream = MessageStream::new();
        stream.push_chunk("text\n```js\nlet a\n```");
        assert_eq!(stream.segments(), stream.segments());
    }

    #[test]
    fn sliced_stream_matches_single_parse() {
        let full = "说明\n[工具调用] 修改文件 lib.rs\n**执行结果**: 成功";
        let mut stream = MessageStream::new();
        let chars: Vec<char> = full.chars().collect();
        for chunk in chars.chunks(3) {
            stream.push_chunk(&chunk.iter().collect::<String>());
        }
        assert_eq!(stream.segments(), chatlens_core::parse(full));
    }
}
