pub(crate) mod chain;
pub(crate) mod common;
pub(crate) mod flat;
pub(crate) mod jacobsthal;
pub(crate) mod pairs;
pub(crate) mod recursive;
