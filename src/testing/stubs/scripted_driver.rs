use anyhow::{Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::ui::cli::drivers::PromptDriver;

/// One canned reply of a [`ScriptedDriver`].
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Select(usize),
    Flag(bool),
    Text(String),
    Integer(u64),
    Number(f64),
    /// Take whatever default the prompt offers.
    Default,
}

/// [`PromptDriver`] replaying answers in order, for exercising the wizard
/// without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    by_title: HashMap<String, String>,
    defaults_when_empty: bool,
}

impl ScriptedDriver {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Picks option `select` and then accepts every default.
    pub fn accepting_defaults(select: usize) -> Self {
        Self::new([Answer::Select(select)]).with_defaults_after_script()
    }

    /// Once the queue is empty every prompt takes its default.
    pub fn with_defaults_after_script(mut self) -> Self {
        self.defaults_when_empty = true;
        self
    }

    /// Text prompts titled `title` get `text` regardless of the queue.
    pub fn with_text_for(mut self, title: &str, text: &str) -> Self {
        self.by_title.insert(title.to_string(), text.to_string());
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        match self.answers.borrow_mut().pop_front() {
            Some(a) => Ok(a),
            None if self.defaults_when_empty => Ok(Answer::Default),
            None => Err(anyhow!("script ran out of answers at '{title}'")),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_select(&self, title: &str, _help: &str, options: &[String]) -> Result<usize> {
        match self.next(title)? {
            Answer::Select(i) => Ok(i),
            Answer::Default if !options.is_empty() => Ok(0),
            other => bail!("expected a selection for '{title}', got {other:?}"),
        }
    }

    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Flag(b) => Ok(b),
            Answer::Default => Ok(default),
            other => bail!("expected a flag for '{title}', got {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        if let Some(text) = self.by_title.get(title) {
            return Ok(text.clone());
        }
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            Answer::Default => Ok(default.to_string()),
            other => bail!("expected text for '{title}', got {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let n = match self.next(title)? {
            Answer::Integer(n) => n,
            Answer::Default => default,
            other => bail!("expected an integer for '{title}', got {other:?}"),
        };
        if min.is_some_and(|lo| n < lo) || max.is_some_and(|hi| n > hi) {
            bail!("{n} is out of range for '{title}'");
        }
        Ok(n)
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let x = match self.next(title)? {
            Answer::Number(x) => x,
            Answer::Default => default,
            other => bail!("expected a number for '{title}', got {other:?}"),
        };
        if min.is_some_and(|lo| x < lo) || max.is_some_and(|hi| x > hi) {
            bail!("{x} is out of range for '{title}'");
        }
        Ok(x)
    }
}
