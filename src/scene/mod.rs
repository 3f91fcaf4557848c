pub(crate) mod layout;
pub(crate) mod palette;
pub(crate) mod select;
