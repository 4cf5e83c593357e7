use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Escape, the close button and a click on the overlay all
/// call `on_close`.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Buttons rendered in the footer (Save, Cancel, etc.)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    /// Extra class on the dialog, e.g. `modal--wide`
    #[prop(optional, into)]
    class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=format!("modal {}", class) on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer.run()}</div> })}
            </div>
        </div>
    }
}
