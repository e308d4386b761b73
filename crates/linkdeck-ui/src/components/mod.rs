pub(crate) mod daisy;
pub(crate) mod favicon;
pub(crate) mod toast;
