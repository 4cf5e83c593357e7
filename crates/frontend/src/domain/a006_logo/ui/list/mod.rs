use contracts::domain::a006_logo::{Logo, LogoUploadDto};
use contracts::shared::load_state::LoadState;
use contracts::shared::pending_delete::PendingDelete;
use contracts::system::permissions::PermissionModule;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_logo::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime_or;
use crate::shared::files::{files_from_input, read_as_data_url};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::notification::use_notifications;
use crate::system::auth::context::use_capabilities;

const COLUMNS: usize = 5;

#[derive(Clone, Debug, Default)]
struct LogoListState {
    logos: Vec<Logo>,
    load: LoadState,
    preview: Option<Logo>,
    pending_delete: PendingDelete<Logo>,
}

/// Upload form values. `logo_data` holds the picked file as a `data:` URL.
#[derive(Clone, Copy)]
struct UploadForm {
    name: RwSignal<String>,
    organization_name: RwSignal<String>,
    logo_data: RwSignal<Option<String>>,
    is_active: RwSignal<bool>,
}

impl UploadForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            organization_name: RwSignal::new(String::new()),
            logo_data: RwSignal::new(None),
            is_active: RwSignal::new(false),
        }
    }

    fn to_dto(&self) -> Result<LogoUploadDto, String> {
        LogoUploadDto::from_form(
            &self.name.get_untracked(),
            &self.organization_name.get_untracked(),
            self.logo_data.get_untracked(),
            self.is_active.get_untracked(),
        )
    }

    fn reset(&self) {
        self.name.set(String::new());
        self.organization_name.set(String::new());
        self.logo_data.set(None);
        self.is_active.set(false);
    }
}

fn status_badge(logo: &Logo) -> (&'static str, &'static str) {
    if logo.is_active {
        ("badge badge--success", "Active")
    } else {
        ("badge badge--secondary", "Inactive")
    }
}

#[component]
pub fn LogoList() -> impl IntoView {
    let state = RwSignal::new(LogoListState::default());
    let form = UploadForm::new();
    let (uploading, set_uploading) = signal(false);
    // Bumped after each upload so the file input is rebuilt empty.
    let input_generation = RwSignal::new(0u32);
    let notifications = use_notifications();
    let capabilities = use_capabilities(PermissionModule::LogoUpload);

    let load = move || {
        state.update(|s| s.load = LoadState::Loading);
        spawn_local(async move {
            let result = api::fetch_logos().await;
            state.update(|s| s.load.finish(&result));
            match result {
                Ok(logos) => state.update(|s| s.logos = logos),
                Err(e) => notifications.api_error("Failed to load logos", &e),
            }
        });
    };
    load();

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = files_from_input(&ev).into_iter().next() else {
            form.logo_data.set(None);
            return;
        };
        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data_url) => form.logo_data.set(Some(data_url)),
                Err(e) => {
                    log::warn!("{}", e);
                    notifications.error("Failed to read the selected file");
                }
            }
        });
    };

    let on_upload = move |_| {
        if !capabilities.get_untracked().can_create {
            notifications.error("You do not have permission to create logos");
            return;
        }
        let dto = match form.to_dto() {
            Ok(dto) => dto,
            Err(message) => {
                notifications.error(message);
                return;
            }
        };
        set_uploading.set(true);
        spawn_local(async move {
            let result = api::upload_logo(&dto).await;
            set_uploading.set(false);
            match result {
                Ok(()) => {
                    notifications.success("Logo uploaded successfully");
                    form.reset();
                    input_generation.update(|g| *g += 1);
                    load();
                }
                Err(e) => notifications.api_error("Failed to upload logo", &e),
            }
        });
    };

    let set_active = move |id: i64| {
        spawn_local(async move {
            match api::set_active(id).await {
                Ok(()) => {
                    notifications.success("Logo set as active");
                    load();
                }
                Err(e) => notifications.api_error("Failed to set logo as active", &e),
            }
        });
    };

    let confirm_delete = move || {
        let Some(logo) = state.try_update(|s| s.pending_delete.confirm()).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::delete_logo(logo.id).await {
                Ok(()) => {
                    notifications.success("Logo deleted successfully");
                    load();
                }
                Err(e) => notifications.api_error("Failed to delete logo", &e),
            }
        });
    };

    let preview = Memo::new(move |_| state.with(|s| s.preview.clone()));
    let deleting = Memo::new(move |_| state.with(|s| s.pending_delete.is_open()));
    let form_preview = form.logo_data;

    view! {
        <div class="page">
            <PageHeader title="Logo Upload" />

            <div class="page__content">
                <Show when=move || capabilities.get().can_create>
                    <div class="card">
                        <h2 class="card__title">"Upload Logo"</h2>
                        <div class="form__row">
                            <div class="form__group">
                                <Label>"Organization Name *"</Label>
                                <Input value=form.organization_name />
                            </div>
                            <div class="form__group">
                                <Label>"Logo Name *"</Label>
                                <Input value=form.name />
                            </div>
                        </div>
                        <div class="form__group">
                            <label for="logo-file">"Logo File *"</label>
                            {move || {
                                input_generation.track();
                                view! {
                                    <input id="logo-file" type="file" accept="image/*" on:change=on_file />
                                }
                            }}
                        </div>
                        {move || form_preview.get().map(|src| view! {
                            <img class="logo-preview" src=src alt="Logo preview" />
                        })}
                        <div class="form__group">
                            <Checkbox checked=form.is_active label="Set as active logo" />
                        </div>
                        <div class="form__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=on_upload
                                disabled=Signal::derive(move || uploading.get())
                            >
                                {icon("upload")}
                                {move || if uploading.get() { " Uploading..." } else { " Upload" }}
                            </Button>
                        </div>
                    </div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Organization"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.load.is_loaded() && s.logos.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan=COLUMNS.to_string()>"No logos uploaded"</TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || state.with(|s| s.logos.clone())
                                key=|l| (l.id, l.is_active)
                                children=move |logo| {
                                    let (badge_class, badge_label) = status_badge(&logo);
                                    let id = logo.id;
                                    let is_active = logo.is_active;
                                    let for_preview = logo.clone();
                                    let for_delete = logo.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{logo.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{logo.organization_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class=badge_class>{badge_label}</span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime_or(logo.created_at.as_deref(), "N/A")}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="row-actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        attr:title="Preview"
                                                        on_click=move |_| state.update(|s| s.preview = Some(for_preview.clone()))
                                                    >
                                                        {icon("eye")}
                                                    </Button>
                                                    <Show when=move || capabilities.get().can_update>
                                                        <Button
                                                            appearance=ButtonAppearance::Secondary
                                                            disabled=is_active
                                                            on_click=move |_| set_active(id)
                                                        >
                                                            {icon("check")}
                                                            " Set Active"
                                                        </Button>
                                                    </Show>
                                                    <Show when=move || capabilities.get().can_delete>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            attr:title="Delete"
                                                            on_click={
                                                                let logo = for_delete.clone();
                                                                move |_| state.update(|s| s.pending_delete.request(logo.clone()))
                                                            }
                                                        >
                                                            {icon("trash")}
                                                        </Button>
                                                    </Show>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || preview.get().map(|logo| view! {
                    <Modal
                        title=logo.name.clone()
                        on_close=Callback::new(move |_| state.update(|s| s.preview = None))
                    >
                        <img class="logo-preview logo-preview--large" src=logo.preview_src() alt=logo.name.clone() />
                    </Modal>
                })}

                {move || deleting.get().then(|| view! {
                    <ConfirmDialog
                        message="Are you sure you want to delete this logo?"
                        on_confirm=Callback::new(move |_| confirm_delete())
                        on_cancel=Callback::new(move |_| state.update(|s| s.pending_delete.cancel()))
                    />
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge() {
        let logo: Logo = serde_json::from_value(serde_json::json!({
            "id": 3, "name": "Main", "is_active": true
        }))
        .unwrap();
        assert_eq!(status_badge(&logo), ("badge badge--success", "Active"));
        let inactive = Logo {
            is_active: false,
            ..logo
        };
        assert_eq!(status_badge(&inactive).1, "Inactive");
    }
}
