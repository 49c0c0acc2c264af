use crate::common::types::ChatMessage;

/// Terminal state of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Input was empty after trimming; nothing rendered, nothing sent.
    Aborted,
    Succeeded,
    /// Transport or parse failure, already rendered as a bot notice.
    Failed,
}

/// Sự kiện từ worker mạng (hoặc bộ hẹn giờ chào) gửi lên UI.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    MessageReceived(ChatMessage),
    DispatchSettled(DispatchOutcome),
}
