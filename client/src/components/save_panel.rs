//! Manual save / clear panel shown above the task form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes the task list on demand through the same [`SharedStorage`] the
//! page's persisted list uses. Automatic persistence keeps running
//! regardless of what this panel does.

use leptos::prelude::*;

use crate::state::save_panel::SavePanelState;
use crate::state::todo::Task;
use crate::util::clock::now_ms;
use crate::util::storage::{SharedStorage, default_storage};

#[component]
pub fn SavePanel(#[prop(into)] tasks: Signal<Vec<Task>>) -> impl IntoView {
    let storage = use_context::<SharedStorage>().unwrap_or_else(default_storage);
    let panel = RwSignal::new(SavePanelState::default());

    let save_storage = storage.clone();
    let on_save = move |_| {
        let current = tasks.get_untracked();
        panel.update(|p| match p.save_now(save_storage.as_ref(), &current, now_ms()) {
            Ok(()) => leptos::logging::log!("saved {} tasks", current.len()),
            Err(e) => leptos::logging::error!("error saving to storage: {e}"),
        });
    };

    let on_clear = move |_| {
        panel.update(|p| {
            if let Err(e) = p.clear(storage.as_ref()) {
                leptos::logging::error!("error clearing storage: {e}");
            }
        });
    };

    view! {
        <div class="save-panel">
            <h3 class="save-panel__title">"💾 Local Save"</h3>
            <div class="save-panel__actions">
                <button
                    class="save-panel__button"
                    on:click=on_save
                    disabled=move || panel.with(|p| p.is_saving)
                >
                    {move || panel.with(SavePanelState::save_label)}
                </button>
                <button class="save-panel__button save-panel__button--danger" on:click=on_clear>
                    "Clear data"
                </button>
            </div>
            {move || {
                panel
                    .with(SavePanelState::last_saved_label)
                    .map(|label| view! { <p class="save-panel__saved">"✅ " {label}</p> })
            }}
            <p class="save-panel__note">"Tasks are saved automatically in your browser"</p>
        </div>
    }
}
