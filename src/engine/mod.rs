pub(crate) mod drawable;
pub(crate) mod morph_engine;
pub(crate) mod target;
