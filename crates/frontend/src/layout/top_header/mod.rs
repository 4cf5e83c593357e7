//! Top bar: sidebar toggle, organization branding, signed-in user and sign-out.

use contracts::domain::a006_logo::Logo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_logo::api::fetch_logos;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

const DEFAULT_TITLE: &str = "Admin Dashboard";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let (active_logo, set_active_logo) = signal(None::<Logo>);

    spawn_local(async move {
        match fetch_logos().await {
            Ok(logos) => set_active_logo.set(logos.into_iter().find(|l| l.is_active)),
            Err(e) => log::debug!("no branding logo: {}", e),
        }
    });

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
            ctx.close_all();
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                {move || active_logo.get().map(|logo| view! {
                    <img class="top-header__logo" src=logo.preview_src() alt=logo.name.clone() />
                })}
                <span class="top-header__title">
                    {move || active_logo
                        .get()
                        .map(|l| l.organization_name)
                        .unwrap_or_else(|| DEFAULT_TITLE.to_string())}
                </span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.with(|s| {
                            s.user.as_ref().map(|u| u.display_name()).unwrap_or_default()
                        })}
                    </span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
