//! Builder for generating properly indented source and markup.

/// One indent level, used by every scaffolded JS, HTML and SCSS file.
const INDENT: &str = "  ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use ractive_gen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::javascript()
///     .block_with_close("describe('app', function () {", "});", |b| {
///         b.line("it('works');")
///     })
///     .build();
///
/// assert_eq!(code, "describe('app', function () {\n  it('works');\n});\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder for JavaScript, HTML or SCSS.
    pub fn javascript() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of `text` with current indentation.
    ///
    /// Empty lines stay empty.
    pub fn lines(self, text: &str) -> Self {
        text.lines().fold(self, |b, line| {
            if line.is_empty() { b.blank() } else { b.line(line) }
        })
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `//` comment line.
    pub fn comment(self, text: &str) -> Self {
        self.line(&format!("// {}", text))
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Add content built from `value` when it is present.
    pub fn when_some<T, F>(self, value: Option<T>, f: F) -> Self
    where
        F: FnOnce(Self, T) -> Self,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }

    /// Add content built by a reusable fragment.
    pub fn apply<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::javascript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::javascript()
            .line("function main() {")
            .indent()
            .line("return 1;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function main() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_lines_keeps_blank_lines_unindented() {
        let code = CodeBuilder::javascript()
            .indent()
            .lines("a\n\nb")
            .build();

        assert_eq!(code, "  a\n\n  b\n");
    }

    #[test]
    fn test_conditional() {
        let with = CodeBuilder::javascript()
            .when(true, |b| b.line("'use strict';"))
            .line("var x;")
            .build();
        let without = CodeBuilder::javascript()
            .when(false, |b| b.line("'use strict';"))
            .line("var x;")
            .build();

        assert_eq!(with, "'use strict';\nvar x;\n");
        assert_eq!(without, "var x;\n");
    }

    #[test]
    fn test_when_some() {
        let code = CodeBuilder::javascript()
            .when_some(Some("page"), |b, name| b.line(name))
            .when_some(None::<&str>, |b, name| b.line(name))
            .build();

        assert_eq!(code, "page\n");
    }

    #[test]
    fn test_apply() {
        fn footer(b: CodeBuilder) -> CodeBuilder {
            b.line("}")
        }

        let code = CodeBuilder::javascript().line("{").apply(footer).build();
        assert_eq!(code, "{\n}\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::javascript()
            .each(["a", "b"], |b, name| b.line(&format!("var {};", name)))
            .build();

        assert_eq!(code, "var a;\nvar b;\n");
    }

    #[test]
    fn test_comment_is_indented() {
        let code = CodeBuilder::javascript()
            .indent()
            .indent()
            .comment("note")
            .build();

        assert_eq!(code, "    // note\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::javascript().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }
}
