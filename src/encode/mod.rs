pub(crate) mod gif;
pub(crate) mod meta;
pub(crate) mod sink;
