//! Interactive questionnaire session: prompt, read, re-prompt

use crate::{Likert, Question, ResponseParseError};
use std::io::{self, BufRead, Write};

const RULE_WIDTH: usize = 70;

/// Split a comma- or whitespace-separated list of ratings ("5,4 3, 2").
///
/// Only checks that each entry is an integer; range and count are the
/// scorer's job.
pub fn parse_answer_list(list: &str) -> Result<Vec<i64>, ResponseParseError> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| ResponseParseError::NotANumber(part.to_string()))
        })
        .collect()
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// One rating per question, in order
    Completed(Vec<Likert>),
    /// Input closed before the last question was answered
    Cancelled,
}

/// Walks the question table, reading one rating per line from `input`.
///
/// Invalid lines re-prompt the same question indefinitely. End of input
/// counts as cancellation and discards any partial answers.
pub struct Session<'q, R, W> {
    questions: &'q [Question],
    input: R,
    output: W,
}

impl<'q, R: BufRead, W: Write> Session<'q, R, W> {
    pub fn new(questions: &'q [Question], input: R, output: W) -> Self {
        Self {
            questions,
            input,
            output,
        }
    }

    /// Print the banner and rating scale
    pub fn welcome(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let out = &mut self.output;
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "{}PERSONALITY TEST", " ".repeat(20))?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "\nThis test will help you discover your personality type.")?;
        writeln!(
            out,
            "You'll be asked {} questions. Answer honestly for the best results.",
            self.questions.len()
        )?;
        writeln!(out, "\nFor each statement, indicate how much you agree:")?;
        writeln!(out, "  1 - Strongly Disagree")?;
        writeln!(out, "  2 - Disagree")?;
        writeln!(out, "  3 - Neutral")?;
        writeln!(out, "  4 - Agree")?;
        writeln!(out, "  5 - Strongly Agree")?;
        writeln!(out, "\n{}\n", rule)?;
        out.flush()
    }

    /// Ask one question until a valid rating arrives. `None` on end of input.
    pub fn ask(&mut self, number: usize, question: &Question) -> io::Result<Option<Likert>> {
        let total = self.questions.len();
        loop {
            writeln!(self.output, "\nQuestion {}/{}:", number, total)?;
            writeln!(self.output, "  {}", question.text)?;
            write!(self.output, "Your answer (1-5): ")?;
            self.output.flush()?;

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }

            // Bytes that are not UTF-8 decode to replacement characters and
            // fail the parse like any other word.
            match String::from_utf8_lossy(&line).parse::<Likert>() {
                Ok(rating) => return Ok(Some(rating)),
                Err(ResponseParseError::OutOfRange(_)) => {
                    writeln!(self.output, "Please enter a number between 1 and 5.")?;
                }
                Err(ResponseParseError::NotANumber(_)) => {
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a number between 1 and 5."
                    )?;
                }
            }
        }
    }

    /// Ask every question in order
    pub fn run(mut self) -> io::Result<SessionOutcome> {
        let mut responses = Vec::with_capacity(self.questions.len());
        for (i, question) in self.questions.iter().enumerate() {
            match self.ask(i + 1, question)? {
                Some(rating) => responses.push(rating),
                None => return Ok(SessionOutcome::Cancelled),
            }
        }
        Ok(SessionOutcome::Completed(responses))
    }
}
