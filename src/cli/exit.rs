/// Exit codes used across pidgen subcommands.
///
/// Mapping:
///   0 — success (every file processed, all identifiers unique)
///   1 — findings (a file was skipped or duplicate identifiers surfaced)
///   2 — refusal (no subcommand provided)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Findings = 1,
    Refusal = 2,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> u8 {
        code as u8
    }
}
