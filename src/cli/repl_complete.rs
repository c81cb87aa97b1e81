//! Tab completion for the gwalk interactive REPL.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Event, EventContext, EventHandler, Helper, KeyEvent, RepeatCount,
};

/// All available REPL slash commands.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/node", "Add a node"),
    ("/edge", "Add an edge: <from> <to> [kind], or comma-separated"),
    ("/arc", "Add a directed edge: <from> <to>, or comma-separated"),
    ("/bfs", "Breadth-first traversal from a node"),
    ("/dfs", "Depth-first traversal from a node"),
    ("/show", "Print the adjacency list"),
    ("/vertices", "List all nodes"),
    ("/clear", "Remove every node and edge"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// gwalk REPL helper providing command completion and hints.
#[derive(Debug, Default)]
pub struct GwalkHelper;

impl GwalkHelper {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for GwalkHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        // Only command names complete; node labels are free text
        if input.contains(' ') {
            return Ok((pos, Vec::new()));
        }

        let matches: Vec<Pair> = COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| Pair {
                display: format!("{cmd:<12} {desc}"),
                replacement: format!("{cmd} "),
            })
            .collect();
        Ok((0, matches))
    }
}

impl Hinter for GwalkHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .map(|(cmd, _)| *cmd)
            .find(|cmd| cmd.starts_with(line) && *cmd != line)
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Highlighter for GwalkHelper {}
impl Validator for GwalkHelper {}
impl Helper for GwalkHelper {}

/// Tab accepts hint if present, else triggers completion.
pub struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Bind custom key sequences.
pub fn bind_keys(rl: &mut rustyline::Editor<GwalkHelper, rustyline::history::DefaultHistory>) {
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );
}

/// Find the closest matching command within edit distance 2.
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();
    COMMANDS
        .iter()
        .map(|(cmd, _)| (*cmd, levenshtein(&input, &cmd[1..])))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(cmd, _)| cmd)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
