/// User-facing notification channel (toasts).
///
/// Fire-and-forget: implementations must not block and nothing is returned.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}
