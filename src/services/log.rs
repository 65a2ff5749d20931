/// Destination for the reporter's status lines and swallowed errors.
pub trait RunLog: Send + Sync {
    fn info(&self, line: &str);
    fn error(&self, line: &str);
}
