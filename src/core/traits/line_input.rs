use crate::core::errors::Result;

/// Port for reading operator input, one line at a time.
///
/// Injected into the command flows so they can be driven by a terminal
/// in production and by a scripted implementation in tests.
pub trait LineInput {
    /// Read a free-form line.
    fn line(&mut self, prompt: &str) -> Result<String>;

    /// Read a line offering completion over the given candidates
    /// (existing emails, mostly).
    fn line_with_candidates(&mut self, prompt: &str, candidates: &[String]) -> Result<String>;

    /// Read a filesystem path, with path completion where supported.
    fn path(&mut self, prompt: &str) -> Result<String>;

    /// Block until the operator acknowledges, before returning control.
    fn pause(&mut self) -> Result<()>;
}
