mod ui_state_store;

pub(crate) use ui_state_store::UiStateStore;
