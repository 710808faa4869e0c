pub(crate) mod library;
pub(crate) mod plan;
pub(crate) mod viewbox;
