mod components;
mod view;

pub(crate) use view::{PopupRender, ScreenView, UiContext, draw};
