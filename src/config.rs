//! Process-wide tunables for the list container.
//!
//! Grounded on `src/config/settings.rs`'s pattern of a plain
//! `serde::Deserialize` struct with one `default_*` function per field,
//! rather than that module's full `config`-crate layered loader (files +
//! env + CLI) — this crate is a library, not a server, so it takes
//! configuration as constructor arguments instead of reading it from a
//! process environment.

use serde::Deserialize;

/// Per-node soft byte cap and initial buffer capacity for `QuickList`.
///
/// `max_listpack_size` is never enforced by `ListPack` itself — it exists
/// purely so `QuickList` knows when to start a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuickListConfig {
    #[serde(default = "default_max_listpack_size")]
    pub max_listpack_size: usize,

    #[serde(default = "default_listpack_cap")]
    pub default_listpack_cap: usize,
}

fn default_max_listpack_size() -> usize {
    8 * 1024
}

fn default_listpack_cap() -> usize {
    128
}

impl Default for QuickListConfig {
    fn default() -> Self {
        Self {
            max_listpack_size: default_max_listpack_size(),
            default_listpack_cap: default_listpack_cap(),
        }
    }
}
