use crate::services::RunLog;

/// Production sink: status lines to stdout, swallowed errors to stderr.
pub struct ConsoleLog;

impl RunLog for ConsoleLog {
    fn info(&self, line: &str) {
        println!("{line}");
    }

    fn error(&self, line: &str) {
        eprintln!("{line}");
    }
}
