/// Sizes fixed when a runtime is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Bytes in the arena shared by the script and the variables.
    pub arena_size: usize,
    /// Entries the expression stack holds.
    pub eval_depth: usize,
    /// Nested gosubs allowed.
    pub return_depth: usize,
    /// Longest line accepted, and the room `$` expansion has to work in.
    pub line_len: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            arena_size: 1024,
            eval_depth: 10,
            return_depth: 8,
            line_len: 80,
        }
    }
}
