use crate::config::Config;
use crate::render::render_outline;
use anyhow::{anyhow, bail, Result};
use clap::Args;
use colored::Colorize;
use schemabuilder_editor::{EditSession, SchemaDocument};
use schemabuilder_model::{FieldId, FieldType, IdGenerator, Schema};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Start from an empty schema instead of the default `name` field
    #[arg(long)]
    pub empty: bool,
}

const HELP: &str = "\
Commands:
  show                 Print the schema outline
  preview              Print the sample JSON document
  add [PARENT_ID]      Add a field at the root, or inside a nested field
  rename ID KEY        Rename a field
  type ID TYPE         Change a field's type
  delete ID            Delete a field and everything nested in it
  toggle ID            Expand or collapse a nested field
  types                List the available field types
  help                 Show this message
  quit                 Leave the shell";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Show,
    Preview,
    Add { parent: Option<FieldId> },
    Rename { id: FieldId, key: String },
    Retype { id: FieldId, field_type: FieldType },
    Delete { id: FieldId },
    Toggle { id: FieldId },
    Types,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };

        let command = match name {
            "show" | "ls" => ShellCommand::Show,
            "preview" | "json" => ShellCommand::Preview,
            "add" => ShellCommand::Add {
                parent: words.next().map(FieldId::from),
            },
            "rename" => {
                let id = id_arg(&mut words, "rename ID KEY")?;
                let key = words.collect::<Vec<_>>().join(" ");
                if key.is_empty() {
                    bail!("usage: rename ID KEY");
                }
                ShellCommand::Rename { id, key }
            }
            "type" => {
                let id = id_arg(&mut words, "type ID TYPE")?;
                let field_type = words
                    .next()
                    .ok_or_else(|| anyhow!("usage: type ID TYPE"))?
                    .parse::<FieldType>()?;
                ShellCommand::Retype { id, field_type }
            }
            "delete" | "rm" => ShellCommand::Delete {
                id: id_arg(&mut words, "delete ID")?,
            },
            "toggle" => ShellCommand::Toggle {
                id: id_arg(&mut words, "toggle ID")?,
            },
            "types" => ShellCommand::Types,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => bail!("unknown command '{}' (try 'help')", other),
        };

        Ok(Some(command))
    }
}

fn id_arg<'a>(words: &mut impl Iterator<Item = &'a str>, usage: &str) -> Result<FieldId> {
    words
        .next()
        .map(FieldId::from)
        .ok_or_else(|| anyhow!("usage: {}", usage))
}

/// Interactive editing loop over any line source
pub struct Shell<'a> {
    session: EditSession,
    config: &'a Config,
}

impl<'a> Shell<'a> {
    pub fn new(session: EditSession, config: &'a Config) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W, interactive: bool) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if interactive {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else { break };
            let line = line?;

            match ShellCommand::parse(&line) {
                Ok(None) => continue,
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(command)) => {
                    debug!(?command, "shell command");
                    if let Err(err) = self.execute(command, out) {
                        writeln!(out, "{} {}", "Error:".red().bold(), err)?;
                    }
                }
                Err(err) => writeln!(out, "{} {}", "Error:".red().bold(), err)?,
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<()> {
        match command {
            ShellCommand::Show => {
                let outline = render_outline(self.session.schema(), self.session.view(), self.config.show_ids);
                writeln!(out, "{}", outline)?;
            }
            ShellCommand::Preview => {
                writeln!(out, "{}", self.session.preview(self.config.indent)?)?;
            }
            ShellCommand::Add { parent: None } => {
                let id = self
                    .session
                    .add_field()
                    .ok_or_else(|| anyhow!("field could not be added"))?;
                writeln!(out, "{} added field {}", "✓".green(), id)?;
            }
            ShellCommand::Add { parent: Some(parent) } => {
                let id = self.session.add_nested_field(&parent)?;
                writeln!(out, "{} added field {} inside {}", "✓".green(), id, parent)?;
            }
            ShellCommand::Rename { id, key } => {
                self.session.rename_field(&id, &key)?;
                writeln!(out, "{} renamed {} to {}", "✓".green(), id, key.trim())?;
            }
            ShellCommand::Retype { id, field_type } => {
                self.session.set_field_type(&id, field_type)?;
                writeln!(out, "{} {} is now {}", "✓".green(), id, field_type)?;
            }
            ShellCommand::Delete { id } => {
                self.session.delete_field(&id)?;
                writeln!(out, "{} deleted {}", "✓".green(), id)?;
            }
            ShellCommand::Toggle { id } => {
                let state = if self.session.toggle_expanded(&id)? {
                    "expanded"
                } else {
                    "collapsed"
                };
                writeln!(out, "{} {}", id, state)?;
            }
            ShellCommand::Types => {
                let names: Vec<&str> = FieldType::ALL.iter().map(FieldType::as_str).collect();
                writeln!(out, "{}", names.join(", "))?;
            }
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }
}

pub fn shell(args: ShellArgs, config: &Config) -> Result<()> {
    let session = if args.empty {
        EditSession::with_document(
            "local",
            SchemaDocument::from_schema(Schema::default()),
            IdGenerator::new(),
        )
    } else {
        EditSession::new("local")
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();

    if interactive {
        println!("{}", "Schema Builder".bright_blue().bold());
        println!("Type 'help' for the list of commands.");
        println!();
    }

    let mut shell = Shell::new(session, config);
    shell.run(stdin.lock(), &mut stdout, interactive)
}
