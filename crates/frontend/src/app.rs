use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notification::{NotificationService, Toasts};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <Toasts />
        </AuthProvider>
    }
}
