//! Fluent writer for generated Go code.

/// Fluent API for building Go code with tab indentation.
///
/// # Example
///
/// ```
/// use tfgen_framework::CodeWriter;
///
/// let code = CodeWriter::new()
///     .line("func main() {")
///     .indent()
///     .line("fmt.Println(\"hello\")")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "func main() {\n\tfmt.Println(\"hello\")\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeWriter {
    indent_level: usize,
    buffer: String,
}

impl CodeWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
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

    /// Splice a multi-line fragment at the current indentation.
    ///
    /// Each line of the fragment keeps its own relative indentation and is
    /// shifted by the writer's current level.
    pub fn append(mut self, fragment: &str) -> Self {
        for line in fragment.lines() {
            self.write_indent();
            self.buffer.push_str(line);
            self.buffer.push('\n');
        }
        self
    }

    /// Emit a `Name: value,` field. Multi-line values keep their relative
    /// indentation and the trailing comma lands on the final line.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        let lines: Vec<&str> = value.lines().collect();
        match lines.as_slice() {
            [] => self.line(&format!("{}: ,", name)),
            [single] => self.line(&format!("{}: {},", name, single)),
            [first, rest @ ..] => {
                self.write_indent();
                self.buffer.push_str(name);
                self.buffer.push_str(": ");
                self.buffer.push_str(first);
                self.buffer.push('\n');
                let (last, middle) = rest.split_last().unwrap_or((&"", &[]));
                for line in middle {
                    self.write_indent();
                    self.buffer.push_str(line);
                    self.buffer.push('\n');
                }
                self.write_indent();
                self.buffer.push_str(last);
                self.buffer.push_str(",\n");
                self
            }
        }
    }

    /// Emit a `Name: "quoted",` field with Go string escaping.
    pub fn string_field(self, name: &str, value: &str) -> Self {
        let quoted = go_string(value);
        self.field(name, &quoted)
    }

    /// Emit a `Name: true,` field only when the flag is set.
    pub fn bool_field(self, name: &str, value: bool) -> Self {
        if value {
            self.field(name, "true")
        } else {
            self
        }
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let writer = self.line(header).indent();
        f(writer).dedent().line(close)
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

    /// Consume the writer and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push('\t');
        }
    }
}

/// Quote a string as a Go string literal.
pub fn go_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
