use super::output::{Output, Report};

/// Greeting shown before the project questions.
pub struct WelcomeReport;

impl Report for WelcomeReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Ractive project generator");
        out.preformatted("Out of the box this scaffolds Ractive with Grunt, Bower and a test runner.");
        out.newline();
    }
}
