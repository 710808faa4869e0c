pub(crate) mod color;
pub(crate) mod pair;
pub(crate) mod transform;
