use std::fmt;

/// A single shell command line: a program followed by its words.
///
/// Words are rendered verbatim, each preceded by one space. No quoting is
/// applied, so the caller decides what the shell sees. An empty word renders
/// as a bare separator, which keeps optional trailing sections (such as an
/// empty `--nodes` list) at a fixed position in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new(program: &str) -> ShellCommandBuilder {
        ShellCommandBuilder::new(program)
    }
}

/// Split a rendered command line into argv form using POSIX shell rules.
pub fn split_words(line: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(line)
}

/// Render argv words as one line, quoting any word the shell would split.
pub fn join_words<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    shell_words::join(words)
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

pub struct ShellCommandBuilder {
    command: ShellCommand,
}

impl ShellCommandBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            command: ShellCommand {
                program: program.to_string(),
                args: Vec::new(),
            },
        }
    }

    pub fn arg(mut self, arg: impl fmt::Display) -> Self {
        self.command.args.push(arg.to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.command
            .args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Push `name` followed by `value`.
    pub fn flag(self, name: &str, value: impl fmt::Display) -> Self {
        self.arg(name).arg(value)
    }

    pub fn build(self) -> ShellCommand {
        self.command
    }
}

/// Several command lines run one after the other, separated by ` ; `.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandChain {
    commands: Vec<ShellCommand>,
}

impl CommandChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, command: ShellCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for CommandChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ; ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
