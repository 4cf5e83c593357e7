use contracts::shared::capabilities::{Capabilities, RowAction};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// View / Edit / Delete buttons allowed by `capabilities`. With no
/// capability the cell stays empty.
#[component]
pub fn RowActions(capabilities: Capabilities, on_action: Callback<RowAction>) -> impl IntoView {
    view! {
        <div class="row-actions">
            {capabilities.row_actions().into_iter().map(|action| view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_action.run(action)
                    attr:title=action.label()
                >
                    {icon(action.icon())}
                </Button>
            }).collect_view()}
        </div>
    }
}
