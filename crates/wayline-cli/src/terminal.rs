//! The interactive terminal: line parser, dispatcher, and REPL loop
//!
//! A `Terminal` owns the store, the command registry, the history ring
//! and its input/output streams. Parsing a raw line is fail-fast with a
//! single error per line; an empty line is a distinguished no-op, not an
//! error. Script execution re-enters the same parse-and-dispatch pair
//! once per file line with an explicit depth argument bounding the
//! nesting.

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use wayline_core::{Result, Route, Store, WaylineError};

use crate::builder::{self, RouteDraft};
use crate::commands::{ArgKind, Command, CommandSpec, REGISTRY};
use crate::history::History;

/// Deepest script nesting that is still executed; a script started above
/// this depth is refused and treated as a no-op.
pub const MAX_SCRIPT_DEPTH: usize = 2;

/// What the loop should do after a line has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The interactive terminal
///
/// Generic over its streams so tests can drive it with in-memory
/// buffers. Interactive element assembly and confirmation prompts read
/// from the same input stream as the command lines.
pub struct Terminal<R, W> {
    store: Store,
    collection_path: PathBuf,
    registry: HashMap<&'static str, &'static CommandSpec>,
    history: History,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(store: Store, collection_path: PathBuf, input: R, output: W) -> Self {
        let registry = REGISTRY.iter().map(|spec| (spec.name, spec)).collect();
        Self {
            store,
            collection_path,
            registry,
            history: History::new(),
            input,
            output,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the interactive loop until `exit` or end of input
    ///
    /// Parse failures print one message and the loop continues;
    /// recoverable command failures are reported by the commands
    /// themselves.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Welcome to Wayline! See \"help\" for the list of commands."
        )?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match self.run_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    /// Parse and run one line at the top level, recording history
    pub fn run_line(&mut self, raw: &str) -> Result<Flow> {
        match self.parse_line(raw)? {
            None => Ok(Flow::Continue),
            Some(command) => {
                let name = command.name();
                let flow = self.dispatch(command, 0)?;
                self.history.record(name);
                Ok(flow)
            }
        }
    }

    /// Parse a raw input line into a ready-to-run command
    ///
    /// Returns `Ok(None)` for a blank line (the no-op outcome). Fails
    /// fast with the first applicable error: unknown name, arity
    /// mismatch, unparseable ID, or a failed element assembly.
    pub fn parse_line(&mut self, raw: &str) -> Result<Option<Command>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let tokens: Vec<&str> = trimmed.split(' ').collect();
        let name = tokens[0];
        let Some(spec) = self.registry.get(name).copied() else {
            return Err(WaylineError::UnknownCommand {
                name: name.to_string(),
            });
        };
        if tokens.len() > 2 {
            return Err(WaylineError::TooManyArguments);
        }
        let argument = tokens.get(1).copied();
        match spec.arg {
            ArgKind::None => {
                if argument.is_some() {
                    return Err(WaylineError::UnexpectedArgument);
                }
            }
            ArgKind::Text(_) | ArgKind::Id => {
                if argument.is_none() {
                    return Err(WaylineError::MissingArgument);
                }
            }
        }
        let argument = argument.unwrap_or("");

        let command = match spec.name {
            "add" => Command::Add {
                route: self.assemble_route(None)?,
            },
            "add_if_min" => Command::AddIfMin {
                route: self.assemble_route(None)?,
            },
            "clear" => Command::Clear,
            "execute_script" => Command::ExecuteScript {
                path: argument.to_string(),
            },
            "exit" => Command::Exit,
            "filter_contains_name" => Command::FilterContainsName {
                needle: argument.to_string(),
            },
            "help" => Command::Help,
            "history" => Command::History,
            "info" => Command::Info,
            "print_ascending" => Command::PrintAscending,
            "print_unique_distance" => Command::PrintUniqueDistance,
            "remove_by_id" => Command::RemoveById {
                id: parse_id(argument)?,
            },
            "remove_greater" => Command::RemoveGreater {
                route: self.assemble_route(None)?,
            },
            "save" => Command::Save,
            "show" => Command::Show,
            "update" => {
                let id = parse_id(argument)?;
                Command::Update {
                    route: self.assemble_route(Some(id))?,
                }
            }
            other => {
                return Err(WaylineError::UnknownCommand {
                    name: other.to_string(),
                })
            }
        };
        Ok(Some(command))
    }

    /// Assemble an element on the interactive stream and bind it to a
    /// fresh ID, or to `id` for the update path
    fn assemble_route(&mut self, id: Option<i32>) -> Result<Route> {
        let draft = builder::read_route_draft(&mut self.input, &mut self.output)
            .map_err(wrap_construction)?;
        let RouteDraft {
            name,
            coordinates,
            from,
            to,
        } = draft;
        let route = match id {
            Some(id) => Route::with_id(id, name, coordinates, from, to),
            None => Route::new(name, coordinates, from, to),
        }
        .map_err(wrap_construction)?;
        writeln!(self.output, "Assembled a route named \"{}\"", route.name())?;
        Ok(route)
    }

    /// Execute a parsed command
    ///
    /// Recoverable failures (lookups, duplicates, empty collection, save
    /// errors) are printed here and never propagate; only stream
    /// failures do. `depth` is the current script nesting level.
    fn dispatch(&mut self, command: Command, depth: usize) -> Result<Flow> {
        match command {
            Command::Add { route } => {
                let name = route.name().to_string();
                match self.store.add(route) {
                    Ok(()) => writeln!(self.output, "Added \"{name}\" to the collection")?,
                    Err(err) => writeln!(self.output, "{err}")?,
                }
            }
            Command::AddIfMin { route } => {
                // An empty collection has no minimum to be beaten, so the
                // element goes in unconditionally.
                let below_min = self.store.is_empty()
                    || matches!(self.store.min(), Ok(min) if route.distance() < min.distance());
                if below_min {
                    let name = route.name().to_string();
                    match self.store.add(route) {
                        Ok(()) => writeln!(self.output, "Added \"{name}\" to the collection")?,
                        Err(err) => writeln!(self.output, "{err}")?,
                    }
                } else {
                    writeln!(
                        self.output,
                        "Skipped \"{}\": its distance is not below the collection minimum",
                        route.name()
                    )?;
                }
            }
            Command::Clear => {
                self.store.clear();
                writeln!(self.output, "Removed all elements from the collection")?;
            }
            Command::ExecuteScript { path } => self.run_script(&path, depth + 1)?,
            Command::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(Flow::Exit);
            }
            Command::FilterContainsName { needle } => {
                writeln!(
                    self.output,
                    "Elements containing \"{needle}\" in the name:"
                )?;
                for route in self.store.filter_by_name(&needle) {
                    writeln!(self.output, "{}", route.detailed())?;
                }
            }
            Command::Help => {
                writeln!(self.output, "Available commands:")?;
                for spec in REGISTRY {
                    let mut usage = format!(" - {}", spec.name);
                    match spec.arg {
                        ArgKind::Text(placeholder) => {
                            usage.push(' ');
                            usage.push_str(placeholder);
                        }
                        ArgKind::Id => usage.push_str(" id"),
                        ArgKind::None => {}
                    }
                    if spec.element {
                        usage.push_str(" {element}");
                    }
                    writeln!(self.output, "{usage} : {}", spec.description)?;
                }
                writeln!(
                    self.output,
                    "Note: {{element}} commands take no element argument; the fields are prompted for interactively"
                )?;
            }
            Command::History => {
                writeln!(self.output, "Recently used commands:")?;
                for name in self.history.snapshot() {
                    writeln!(self.output, "{name}")?;
                }
            }
            Command::Info => {
                writeln!(self.output, "Information about this collection:")?;
                writeln!(self.output, "Type: Route")?;
                writeln!(self.output, "Creation date: {}", self.store.created_at())?;
                writeln!(self.output, "Number of elements: {}", self.store.len())?;
                let extremes = self
                    .store
                    .min()
                    .map(Route::distance)
                    .and_then(|lo| self.store.max().map(|hi| (lo, hi.distance())));
                match extremes {
                    Ok((lo, hi)) => {
                        writeln!(self.output, "Min distance: {lo}")?;
                        writeln!(self.output, "Max distance: {hi}")?;
                    }
                    Err(err) => writeln!(self.output, "{err}")?,
                }
            }
            Command::PrintAscending => {
                writeln!(self.output, "Collection elements in ascending order:")?;
                for route in self.store.ascending() {
                    writeln!(self.output, "{}", route.detailed())?;
                }
            }
            Command::PrintUniqueDistance => {
                let values: Vec<String> = self
                    .store
                    .unique_distances()
                    .iter()
                    .map(f64::to_string)
                    .collect();
                writeln!(self.output, "Unique distance values: {}", values.join(", "))?;
            }
            Command::RemoveById { id } => match self.store.remove_by_id(id) {
                Ok(_) => writeln!(self.output, "Removed the route with ID {id}")?,
                Err(err) => writeln!(self.output, "{err}")?,
            },
            Command::RemoveGreater { route } => {
                let doomed: Vec<Route> = self
                    .store
                    .greater_than(&route)
                    .into_iter()
                    .cloned()
                    .collect();
                write!(
                    self.output,
                    "Are you sure you want to remove {} elements from the collection? [Y/n]: ",
                    doomed.len()
                )?;
                self.output.flush()?;
                let mut answer = String::new();
                self.input.read_line(&mut answer)?;
                if answer.trim() == "Y" {
                    let mut removed = 0usize;
                    for route in &doomed {
                        if self.store.remove(route) {
                            removed += 1;
                        }
                    }
                    writeln!(self.output, "Removed {removed} elements")?;
                } else {
                    writeln!(self.output, "Cancelled the command")?;
                }
            }
            Command::Save => {
                let routes = self.store.copy_ordered();
                match wayline_store::save_collection(&self.collection_path, &routes) {
                    Ok(()) => writeln!(
                        self.output,
                        "Saved {} elements to {}",
                        routes.len(),
                        self.collection_path.display()
                    )?,
                    Err(err) => {
                        writeln!(self.output, "Could not save the collection: {err}")?;
                    }
                }
            }
            Command::Show => {
                for route in self.store.iter() {
                    writeln!(self.output, "{route}")?;
                }
            }
            Command::Update { route } => {
                let id = route.id();
                match self.store.replace_by_id(route) {
                    Ok(()) => writeln!(self.output, "Updated the route with ID {id}")?,
                    Err(err) => writeln!(self.output, "{err}")?,
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Run a script file at the given nesting depth
    ///
    /// An unreadable file and a refused depth are both reported and
    /// treated as zero lines. Per-line failures are reported and the
    /// next line runs; the `exit` sentinel does not stop a script.
    fn run_script(&mut self, path: &str, depth: usize) -> Result<()> {
        if depth > MAX_SCRIPT_DEPTH {
            tracing::warn!(path, depth, "script recursion limit reached");
            writeln!(self.output, "Script recursion is too deep, skipping {path}")?;
            return Ok(());
        }
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                writeln!(self.output, "Can't read the script file {path}: {err}")?;
                return Ok(());
            }
        };
        tracing::info!(path, depth, "executing script");
        writeln!(self.output, "Executing {path}...")?;

        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        for line in &lines {
            match self.parse_line(line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    let name = command.name();
                    self.dispatch(command, depth)?;
                    self.history.record(name);
                }
                Err(err) => {
                    writeln!(self.output, "Can't run \"{}\": {err}", line.trim())?;
                }
            }
        }
        writeln!(self.output, "Finished executing {path}")?;
        Ok(())
    }
}

fn parse_id(token: &str) -> Result<i32> {
    token
        .trim()
        .parse::<i32>()
        .map_err(|_| WaylineError::InvalidId {
            token: token.to_string(),
        })
}

/// Keep an existing construction failure as-is; wrap anything else
fn wrap_construction(err: WaylineError) -> WaylineError {
    match err {
        err @ WaylineError::ElementConstruction { .. } => err,
        other => WaylineError::ElementConstruction {
            reason: other.to_string(),
        },
    }
}
