pub(crate) mod brute;
pub(crate) mod fixtures;
pub(crate) mod graph_enumerator;
