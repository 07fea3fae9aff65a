//! Marquee's catalog query engine: reduces confirmed filter fragments into
//! a filter-state patch and merges patches into the caller's filter state.

mod filter_state;
mod reduce;

pub use filter_state::*;
pub use marquee_syntax::{
    builtin_table, compile, ContentType, Fragment, FragmentId, FragmentKind, FragmentValue,
    PatternRule, PatternTable, TableError,
};
pub use reduce::*;
