use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the layout mounts after sign-in.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

/// Sign-in gate. While a stored session is being checked the shell is held
/// back so screens do not render without permissions.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <Show
                when=move || !auth_state.with(|s| s.restoring)
                fallback=|| view! { <div class="app-loading">"Restoring session..."</div> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
