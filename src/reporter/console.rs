//! Console reporter with colored output

use crate::descriptions::{describe, identity_description};
use crate::{Assessment, BaseType, Identity, Polarity, Question};
use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 70;
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Characters in a 100% strength bar
    bar_width: usize,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    /// Print the full results block
    pub fn report(&self, assessment: &Assessment) {
        print!("{}", self.render(assessment));
    }

    /// Print only the type code
    pub fn report_quiet(&self, assessment: &Assessment) {
        println!("{}", self.paint(&assessment.personality_type.to_string(), |s| s.bold()));
    }

    pub fn render(&self, assessment: &Assessment) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let description = describe(assessment.base_type());
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", heavy));
        out.push_str(&format!(
            "{}{}\n",
            " ".repeat(25),
            self.paint("YOUR RESULTS", |s| s.bold())
        ));
        out.push_str(&format!("{}\n", heavy));

        out.push_str(&format!(
            "\nYour personality type is: {}\n",
            self.paint(&assessment.personality_type.to_string(), |s| s.bold().cyan())
        ));
        out.push_str(&format!(
            "\n{} - {}\n",
            self.paint(description.name, |s| s.bold()),
            description.summary
        ));

        let identity = identity_description(assessment.identity());
        let identity = match assessment.identity() {
            Identity::Assertive => self.paint(identity, |s| s.green()),
            Identity::Turbulent => self.paint(identity, |s| s.yellow()),
        };
        out.push_str(&format!("\n{}\n", identity));

        out.push_str(&format!("\n{}\n", light));
        out.push_str(&format!("{}\n", self.paint("Dimension Breakdown:", |s| s.bold())));
        out.push_str(&format!("{}\n", light));

        for dim in &assessment.dimensions {
            out.push_str(&format!(
                "{:20} [{}] {:>3}%\n",
                dim.tendency,
                self.create_bar(dim.percentage),
                dim.percentage
            ));
        }

        out.push_str(&format!("\n{}\n\n", heavy));
        out
    }

    /// Numbered question table with dimension and polarity
    pub fn render_questions(&self, questions: &[Question]) -> String {
        let mut out = String::new();
        for (i, q) in questions.iter().enumerate() {
            let sign = match q.polarity {
                Polarity::Positive => "+",
                Polarity::Negative => "-",
            };
            out.push_str(&format!(
                "{:>2}. [{}{}] {}\n",
                i + 1,
                self.paint(&q.dimension.to_string(), |s| s.dimmed()),
                sign,
                q.text
            ));
        }
        out
    }

    /// Name and summary for each listed type
    pub fn render_types(&self, types: &[BaseType]) -> String {
        let mut out = String::new();
        for base in types {
            let d = describe(*base);
            out.push_str(&format!(
                "{}  {} - {}\n",
                self.paint(base.code(), |s| s.bold().cyan()),
                self.paint(d.name, |s| s.bold()),
                d.summary
            ));
        }
        out
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_colors {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn create_bar(&self, percentage: u8) -> String {
        let filled = (percentage as usize * self.bar_width) / 100;
        let empty = self.bar_width - filled.min(self.bar_width);
        let bar = "█".repeat(filled);

        let bar = if percentage >= 60 {
            self.paint(&bar, |s| s.green())
        } else if percentage >= 30 {
            self.paint(&bar, |s| s.yellow())
        } else {
            self.paint(&bar, |s| s.red())
        };
        format!("{}{}", bar, "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
