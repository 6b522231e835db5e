use std::io::{self, BufRead, Write};
use std::path::Path;

use dialoguer::{Completion, Input};

use crate::core::errors::Result;
use crate::core::traits::line_input::LineInput;

/// Terminal-backed line input using dialoguer prompts.
///
/// Email prompts complete against the current roster's addresses; path
/// prompts complete against the filesystem.
pub struct DialoguerInput;

impl LineInput for DialoguerInput {
    fn line(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn line_with_candidates(&mut self, prompt: &str, candidates: &[String]) -> Result<String> {
        let completion = CandidateCompletion { candidates };
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .completion_with(&completion)
            .interact_text()?;
        Ok(value)
    }

    fn path(&mut self, prompt: &str) -> Result<String> {
        let completion = PathCompletion;
        let value: String = Input::new()
            .with_prompt(prompt)
            .completion_with(&completion)
            .interact_text()?;
        Ok(value)
    }

    fn pause(&mut self) -> Result<()> {
        print!("  Press Enter to continue...");
        io::stdout().flush()?;
        let mut ack = String::new();
        io::stdin().lock().read_line(&mut ack)?;
        Ok(())
    }
}

/// Tab completion over a fixed candidate list (prefix match).
struct CandidateCompletion<'a> {
    candidates: &'a [String],
}

impl Completion for CandidateCompletion<'_> {
    fn get(&self, input: &str) -> Option<String> {
        let mut matches = self
            .candidates
            .iter()
            .filter(|c| c.starts_with(input));
        let first = matches.next()?;
        // Only complete when the prefix is unambiguous
        match matches.next() {
            None => Some(first.clone()),
            Some(_) => None,
        }
    }
}

/// Tab completion over directory entries.
struct PathCompletion;

impl Completion for PathCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let path = Path::new(input);
        let (dir, prefix) = if input.ends_with('/') {
            (path, "")
        } else {
            (
                path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new(".")),
                path.file_name().and_then(|n| n.to_str()).unwrap_or(""),
            )
        };
        let entries = std::fs::read_dir(dir).ok()?;
        let mut matches = entries.filter_map(|e| {
            let name = e.ok()?.file_name().into_string().ok()?;
            name.starts_with(prefix).then(|| dir.join(&name).to_string_lossy().into_owned())
        });
        let first = matches.next()?;
        match matches.next() {
            None => Some(first),
            Some(_) => None,
        }
    }
}
