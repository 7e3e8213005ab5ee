//! Command inventory for the terminal
//!
//! Two layers: the static registry of `CommandSpec` entries describing
//! every command's name, line-argument discipline and description, and
//! the `Command` enum - a parsed line with its argument, ID or assembled
//! element already bound, ready for the dispatcher.

use wayline_core::Route;

/// Line-argument discipline of a command
///
/// `Text` carries the placeholder shown by `help`. Element construction
/// is tracked separately on `CommandSpec` because the element never
/// arrives as a line token - it is prompted for interactively - which is
/// how `update` takes an ID argument *and* an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    None,
    Text(&'static str),
    Id,
}

/// Registry entry for one command
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub arg: ArgKind,
    pub element: bool,
    pub description: &'static str,
}

/// All registered commands, alphabetically; `help` prints this table in
/// source order. The table is turned into a name-keyed map once at
/// terminal construction and never mutated afterwards.
pub const REGISTRY: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        arg: ArgKind::None,
        element: true,
        description: "add a new element to the collection",
    },
    CommandSpec {
        name: "add_if_min",
        arg: ArgKind::None,
        element: true,
        description: "add a new element if its distance is below the collection minimum",
    },
    CommandSpec {
        name: "clear",
        arg: ArgKind::None,
        element: false,
        description: "remove all elements from the collection",
    },
    CommandSpec {
        name: "execute_script",
        arg: ArgKind::Text("file_name"),
        element: false,
        description: "read and run a script from the specified file",
    },
    CommandSpec {
        name: "exit",
        arg: ArgKind::None,
        element: false,
        description: "exit the program without saving the collection",
    },
    CommandSpec {
        name: "filter_contains_name",
        arg: ArgKind::Text("name"),
        element: false,
        description: "output elements whose names contain a given substring",
    },
    CommandSpec {
        name: "help",
        arg: ArgKind::None,
        element: false,
        description: "list all available commands",
    },
    CommandSpec {
        name: "history",
        arg: ArgKind::None,
        element: false,
        description: "output the last 15 used commands (without their arguments)",
    },
    CommandSpec {
        name: "info",
        arg: ArgKind::None,
        element: false,
        description: "output information about the collection",
    },
    CommandSpec {
        name: "print_ascending",
        arg: ArgKind::None,
        element: false,
        description: "output the collection elements in ascending order",
    },
    CommandSpec {
        name: "print_unique_distance",
        arg: ArgKind::None,
        element: false,
        description: "output all unique distance values",
    },
    CommandSpec {
        name: "remove_by_id",
        arg: ArgKind::Id,
        element: false,
        description: "remove the element with the specified ID",
    },
    CommandSpec {
        name: "remove_greater",
        arg: ArgKind::None,
        element: true,
        description: "remove all elements with a distance exceeding the given element's",
    },
    CommandSpec {
        name: "save",
        arg: ArgKind::None,
        element: false,
        description: "save the collection to the collection file",
    },
    CommandSpec {
        name: "show",
        arg: ArgKind::None,
        element: false,
        description: "output all elements of the collection",
    },
    CommandSpec {
        name: "update",
        arg: ArgKind::Id,
        element: true,
        description: "update the element with the specified ID",
    },
];

/// A parsed input line, fully bound and ready to run
#[derive(Debug, Clone)]
pub enum Command {
    Add { route: Route },
    AddIfMin { route: Route },
    Clear,
    ExecuteScript { path: String },
    Exit,
    FilterContainsName { needle: String },
    Help,
    History,
    Info,
    PrintAscending,
    PrintUniqueDistance,
    RemoveById { id: i32 },
    RemoveGreater { route: Route },
    Save,
    Show,
    Update { route: Route },
}

impl Command {
    /// The registry name this command was parsed from
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::AddIfMin { .. } => "add_if_min",
            Command::Clear => "clear",
            Command::ExecuteScript { .. } => "execute_script",
            Command::Exit => "exit",
            Command::FilterContainsName { .. } => "filter_contains_name",
            Command::Help => "help",
            Command::History => "history",
            Command::Info => "info",
            Command::PrintAscending => "print_ascending",
            Command::PrintUniqueDistance => "print_unique_distance",
            Command::RemoveById { .. } => "remove_by_id",
            Command::RemoveGreater { .. } => "remove_greater",
            Command::Save => "save",
            Command::Show => "show",
            Command::Update { .. } => "update",
        }
    }
}
