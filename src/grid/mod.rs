pub(crate) mod model;
pub(crate) mod stats;
pub(crate) mod synth;
