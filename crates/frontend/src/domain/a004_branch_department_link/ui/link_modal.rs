//! "Add links" dialog: pick a branch, then tick sub-departments grouped by department.

use std::collections::BTreeSet;

use contracts::domain::a001_division_branch::DivisionBranch;
use contracts::domain::a002_department::Department;
use contracts::domain::a003_sub_department::SubDepartment;
use contracts::domain::a004_branch_department_link::{
    created_message, group_options, linked_keys, plan_links, LinkKey, LinkPlan, ALL_LINKED_MESSAGE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_department::api as department_api;
use crate::domain::a003_sub_department::api as sub_department_api;
use crate::domain::a004_branch_department_link::api;
use crate::shared::modal::Modal;
use crate::shared::notification::use_notifications;

#[component]
pub fn AddLinksModal(
    #[prop(into)] branches: Signal<Vec<DivisionBranch>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let departments = RwSignal::new(Vec::<Department>::new());
    let sub_departments = RwSignal::new(Vec::<SubDepartment>::new());
    let (loading, set_loading) = signal(true);
    let branch = RwSignal::new(None::<i64>);
    let linked = RwSignal::new(BTreeSet::<LinkKey>::new());
    let selected = RwSignal::new(BTreeSet::<LinkKey>::new());
    let is_active = RwSignal::new(true);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        let (depts, subs) = futures::join!(department_api::fetch_all(), sub_department_api::fetch_all());
        match depts {
            Ok(list) => departments.set(list),
            Err(e) => notifications.api_error("Failed to load departments", &e),
        }
        match subs {
            Ok(list) => sub_departments.set(list),
            Err(e) => notifications.api_error("Failed to load sub-departments", &e),
        }
        set_loading.set(false);
    });

    let select_branch = move |id: Option<i64>| {
        branch.set(id);
        selected.set(BTreeSet::new());
        linked.set(BTreeSet::new());
        let Some(id) = id else {
            return;
        };
        spawn_local(async move {
            match api::fetch_links(Some(id)).await {
                // A later branch pick wins.
                Ok(links) if branch.get_untracked() == Some(id) => {
                    linked.set(linked_keys(id, &links))
                }
                Ok(_) => {}
                Err(e) => notifications.api_error("Failed to load existing links", &e),
            }
        });
    };

    let groups = Memo::new(move |_| {
        departments.with(|d| sub_departments.with(|s| linked.with(|l| group_options(d, s, l))))
    });

    let on_save = move |_| {
        let plan = selected.with_untracked(|sel| {
            linked.with_untracked(|l| plan_links(branch.get_untracked(), sel, l, is_active.get_untracked()))
        });
        let links = match plan {
            Err(message) => {
                notifications.error(message);
                return;
            }
            Ok(LinkPlan::NothingNew) => {
                notifications.info(ALL_LINKED_MESSAGE);
                on_close.run(());
                return;
            }
            Ok(LinkPlan::Create(links)) => links,
        };
        set_saving.set(true);
        spawn_local(async move {
            let failed = api::create_links(&links).await;
            set_saving.set(false);
            if failed == 0 {
                notifications.success(created_message(links.len()));
                on_saved.run(());
            } else {
                notifications.error(format!(
                    "{} of {} links could not be created",
                    failed,
                    links.len()
                ));
            }
        });
    };

    let disabled = Signal::derive(move || saving.get() || loading.get());

    view! {
        <Modal
            title=String::from("Link Sub-Departments to Branch")
            on_close=on_close
            class="modal--wide"
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                    {move || if saving.get() { "Saving..." } else { "Save Links" }}
                </Button>
            }
        >
            <div class="form__group">
                <label for="link-branch">"Branch *"</label>
                <select
                    id="link-branch"
                    class="form__select"
                    on:change=move |ev| select_branch(event_target_value(&ev).parse().ok())
                >
                    <option value="">"Select Branch"</option>
                    {move || branches.with(|list| list.iter().map(|b| view! {
                        <option value=b.id.to_string()>{format!("{} (ID: {})", b.name, b.id)}</option>
                    }).collect_view())}
                </select>
            </div>
            <div class="form__group">
                <Checkbox checked=is_active label="Active" />
            </div>

            <div class="link-tree">
                {move || {
                    if loading.get() {
                        return view! { <div class="text-muted">"Loading..."</div> }.into_any();
                    }
                    if branch.get().is_none() {
                        return view! { <div class="text-muted">"Please select a branch first"</div> }.into_any();
                    }
                    groups.get().into_iter().map(|group| {
                        let department = group.department;
                        let empty = group.is_empty();
                        view! {
                            <div class="link-tree__department">
                                <div class={if empty { "link-tree__label text-muted" } else { "link-tree__label" }}>
                                    {group.label.clone()}
                                    {empty.then_some(" (No sub-departments available)")}
                                </div>
                                <div class="link-tree__options">
                                    {group.options.into_iter().map(|option| {
                                        let key = (department, option.sub_department);
                                        let linked = option.linked;
                                        let id = format!("link-sub-{}", option.sub_department);
                                        view! {
                                            <div class="form__check">
                                                <input
                                                    type="checkbox"
                                                    id=id.clone()
                                                    disabled=linked
                                                    prop:checked=move || linked || selected.with(|s| s.contains(&key))
                                                    on:change=move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        selected.update(|s| {
                                                            if checked {
                                                                s.insert(key);
                                                            } else {
                                                                s.remove(&key);
                                                            }
                                                        });
                                                    }
                                                />
                                                <label for=id>
                                                    {option.name.clone()}
                                                    {linked.then(|| view! {
                                                        <span class="text-success">" (Already Linked)"</span>
                                                    })}
                                                </label>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </Modal>
    }
}
