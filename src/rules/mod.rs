//! Static fashion-matching rules
//!
//! Both tables are built on first use and never mutated afterwards.

use std::sync::LazyLock;

mod authored;
mod offline;
pub mod substitution;
mod table;

pub use table::{ItemTemplate, RuleEntry, RuleTable};

static AUTHORED: LazyLock<RuleTable> = LazyLock::new(authored::build);
static OFFLINE: LazyLock<RuleTable> = LazyLock::new(offline::build);

impl RuleTable {
    /// Rule set used by the service
    pub fn authored() -> &'static RuleTable {
        &AUTHORED
    }

    /// Reduced rule set for degraded operation when the service is unreachable
    pub fn offline() -> &'static RuleTable {
        &OFFLINE
    }
}
