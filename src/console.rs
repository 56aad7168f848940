//! Colored console output
//!
//! Title and summary lines around the rendered tables: titles are bold
//! yellow, subtitles green, errors red on stderr. All color is dropped
//! when the switch is off.

use owo_colors::OwoColorize;

/// Console writer with a color switch
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    /// Create a console, colored or plain
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print a bold yellow title line
    pub fn title(&self, text: &str) {
        if self.color {
            println!("{}", text.yellow().bold());
        } else {
            println!("{}", text);
        }
    }

    /// Print a green subtitle line
    pub fn subtitle(&self, text: &str) {
        if self.color {
            println!("{}", text.green());
        } else {
            println!("{}", text);
        }
    }

    /// Print a red error line to stderr
    pub fn error(&self, text: &str) {
        if self.color {
            eprintln!("{}", text.red());
        } else {
            eprintln!("{}", text);
        }
    }
}
