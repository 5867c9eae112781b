use super::{Context, Word};
use crate::error;
use crate::lang::Error;
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// Something a command name can run.
///
/// `argv[0]` is always the matched command name. Failures are reported as
/// negative return values, never by panicking.
pub trait Handler {
    fn call(&self, context: &mut Context, argv: &[&str]) -> Word;
}

impl<F> Handler for F
where
    F: Fn(&mut Context, &[&str]) -> Word,
{
    fn call(&self, context: &mut Context, argv: &[&str]) -> Word {
        self(context, argv)
    }
}

/// A named node in the command tree, with an optional handler and an
/// optional table of sub-commands.
pub struct Command {
    name: String,
    handler: Option<Box<dyn Handler>>,
    children: Vec<Command>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("handler", &self.handler.is_some())
            .field("children", &self.children)
            .finish()
    }
}

impl Command {
    pub fn new(name: &str) -> Command {
        Command {
            name: name.to_string(),
            handler: None,
            children: vec![],
        }
    }

    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Command {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn child(mut self, command: Command) -> Command {
        self.children.push(command);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }
}

/// ## Command dispatcher
///
/// Built once from the root table and read-only afterwards.

#[derive(Debug, Default)]
pub struct Commands {
    root: Vec<Command>,
}

impl Commands {
    pub fn new(root: Vec<Command>) -> Commands {
        Commands { root }
    }

    /// Find the node that handles `argv` and the offset of its name in
    /// `argv`.
    ///
    /// Descends while names match and words remain. A leaf without a
    /// handler falls back to the closest matched ancestor that has one.
    pub fn resolve(&self, argv: &[&str]) -> Option<(&Command, usize)> {
        let mut table = &self.root[..];
        let mut chain: Vec<(&Command, usize)> = vec![];
        for (depth, word) in argv.iter().enumerate() {
            let node = match table.iter().find(|c| c.name == *word) {
                Some(node) => node,
                None => break,
            };
            chain.push((node, depth));
            if !node.children.is_empty() && depth + 1 < argv.len() {
                table = &node.children[..];
                continue;
            }
            break;
        }
        chain.into_iter().rev().find(|(node, _)| node.has_handler())
    }

    pub fn exec(&self, context: &mut Context, argv: &[&str]) -> Result<Word> {
        match self.resolve(argv) {
            Some((command, depth)) => {
                trace!("exec {} {:?}", command.name, &argv[depth..]);
                match &command.handler {
                    Some(handler) => Ok(handler.call(context, &argv[depth..])),
                    None => Err(error!(CommandNotFound)),
                }
            }
            None => Err(error!(CommandNotFound)),
        }
    }
}
