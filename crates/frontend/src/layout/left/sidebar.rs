//! Sidebar menu built from the permission catalog.
//!
//! A section is listed when the user may access it; inside, each screen is
//! listed when the user holds the access permission of its module.

use contracts::system::permissions::{PermissionAction, PermissionSection, PermissionSet};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{
    icon_for_key, module_for_key, screens_in_section, section_icon, tab_label_for_key, HOME,
};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    section: PermissionSection,
    items: Vec<&'static str>,
}

fn visible_groups(permissions: &PermissionSet) -> Vec<MenuGroup> {
    PermissionSection::ALL
        .into_iter()
        .filter(|section| permissions.can_access_section(*section))
        .map(|section| MenuGroup {
            section,
            items: screens_in_section(section)
                .into_iter()
                .filter(|key| {
                    module_for_key(key)
                        .map(|m| permissions.allows(PermissionAction::Access, m))
                        .unwrap_or(false)
                })
                .collect(),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

#[component]
fn MenuItem(key: &'static str) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active.get().as_deref() == Some(key)
            on:click=move |_| ctx.open_tab(key, tab_label_for_key(key))
        >
            <div class="app-sidebar__item-content">
                {icon(icon_for_key(key))}
                <span>{tab_label_for_key(key)}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let expanded = RwSignal::new(Vec::<PermissionSection>::new());
    let groups = Memo::new(move |_| auth_state.with(|s| visible_groups(&s.permissions)));

    view! {
        <div class="app-sidebar__content">
            <MenuItem key=HOME />
            <For
                each=move || groups.get()
                key=|group| group.section
                children=move |group| {
                    let section = group.section;
                    let is_expanded = move || expanded.with(|e| e.contains(&section));
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                on:click=move |_| expanded.update(|e| {
                                    if let Some(pos) = e.iter().position(|s| *s == section) {
                                        e.remove(pos);
                                    } else {
                                        e.push(section);
                                    }
                                })
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(section_icon(section))}
                                    <span>{section.label()}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group.items.clone().into_iter()
                                        .map(|key| view! { <MenuItem key=key /> })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::permissions::{permission_name, PermissionModule};

    #[test]
    fn test_menu_follows_permissions() {
        let permissions = PermissionSet::new([
            PermissionSection::Setup.permission(),
            permission_name(PermissionAction::Access, PermissionModule::Department),
            // module access without section access is not listed
            permission_name(PermissionAction::Access, PermissionModule::Users),
        ]);
        let groups = visible_groups(&permissions);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].section, PermissionSection::Setup);
        assert_eq!(groups[0].items, vec!["department"]);
    }

    #[test]
    fn test_no_permissions_no_groups() {
        assert!(visible_groups(&PermissionSet::default()).is_empty());
    }
}
