//! The callback contract between the parser and its consumer.
//!
//! ## Event Sequence
//!
//! `<34>1 ts host app 1 id [ex@1 a="x"] body\n` fires:
//! ```text
//! on_msg_begin
//! on_msg_head      { priority: 34, version: 1, timestamp: "ts", ... }
//! on_sd_element    "ex@1"
//! on_sd_field      "a"
//! on_sd_value      { element: "ex@1", field: "a", value: "x" }
//! on_msg           "body"          (zero or more times)
//! on_msg_complete
//! ```
//!
//! Every callback receives the parser's context value and may return
//! `Flow::Break(())` to abort. An abort is reported as
//! [`ErrorKind::CallbackAborted`](crate::ErrorKind::CallbackAborted) and
//! leaves the parser in its error state.

use std::ops::ControlFlow;

use crate::head::MessageHead;
use crate::sd::SdParam;
use crate::span::Span;

/// Result of a callback: continue parsing or abort.
pub type Flow = ControlFlow<()>;

/// Consumer callbacks. All methods default to `Continue`.
///
/// `C` is the context value stored in the [`Parser`](crate::Parser) and lent
/// to each call. Spans are only valid for the duration of the call.
pub trait Settings<C> {
    /// `<` opening a new message was seen.
    fn on_msg_begin(&mut self, cx: &mut C) -> Flow {
        let _ = cx;
        Flow::Continue(())
    }

    /// All seven head fields are parsed.
    fn on_msg_head(&mut self, cx: &mut C, head: &MessageHead<'_>) -> Flow {
        let _ = (cx, head);
        Flow::Continue(())
    }

    /// An SD-ID completed.
    fn on_sd_element(&mut self, cx: &mut C, name: Span<'_>) -> Flow {
        let _ = (cx, name);
        Flow::Continue(())
    }

    /// A PARAM-NAME completed.
    fn on_sd_field(&mut self, cx: &mut C, name: Span<'_>) -> Flow {
        let _ = (cx, name);
        Flow::Continue(())
    }

    /// A PARAM-VALUE completed.
    fn on_sd_value(&mut self, cx: &mut C, param: SdParam<'_>) -> Flow {
        let _ = (cx, param);
        Flow::Continue(())
    }

    /// A fragment of the message body. May fire several times per message.
    fn on_msg(&mut self, cx: &mut C, body: Span<'_>) -> Flow {
        let _ = (cx, body);
        Flow::Continue(())
    }

    /// The message ended.
    fn on_msg_complete(&mut self, cx: &mut C) -> Flow {
        let _ = cx;
        Flow::Continue(())
    }
}

/// Validate-only parsing: every event is accepted and ignored.
impl<C> Settings<C> for () {}
