/// Lệnh UI gửi xuống worker mạng.
#[derive(Debug, Clone)]
pub enum ChatCommand {
    /// Trimmed text that has already been echoed locally.
    SendMessage(String),
}
