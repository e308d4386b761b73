//! DaisyUI-inspired component wrappers used by the dashboard.

pub(crate) mod button;
pub(crate) mod foundations;
pub(crate) mod loading;
pub(crate) mod modal;

pub(crate) use button::Button;
pub(crate) use foundations::{DaisyColor, DaisySize, DaisyVariant};
pub(crate) use loading::Loading;
pub(crate) use modal::Modal;
