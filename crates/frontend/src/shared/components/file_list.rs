//! Drag-and-drop upload area with the queued file list.

use contracts::domain::a005_data_entry::UploadQueue;
use contracts::shared::format::{format_file_size, FileIconKind};
use leptos::prelude::*;

use crate::shared::files::{files_from_drop, files_from_input};
use crate::shared::icons::icon;

/// Browser files waiting to be uploaded. `web_sys::File` is not `Send`, so
/// the queue lives in local storage.
pub type FileQueue = RwSignal<UploadQueue<web_sys::File>, LocalStorage>;

pub fn new_file_queue() -> FileQueue {
    RwSignal::new_local(UploadQueue::new())
}

fn enqueue(queue: FileQueue, files: Vec<web_sys::File>) {
    queue.update(|q| {
        for file in files {
            let name = file.name();
            if !q.add(name.clone(), file) {
                log::debug!("{} already queued", name);
            }
        }
    });
}

#[component]
pub fn FileDropZone(
    queue: FileQueue,
    #[prop(optional)] input_id: &'static str,
    #[prop(optional)] multiple: bool,
) -> impl IntoView {
    let (dragging, set_dragging) = signal(false);
    let input_id = if input_id.is_empty() { "file-upload" } else { input_id };

    view! {
        <div class="file-upload">
            <div
                class=move || {
                    if dragging.get() { "drop-zone drop-zone--active" } else { "drop-zone" }
                }
                on:dragover=move |ev| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=move |ev| {
                    ev.prevent_default();
                    set_dragging.set(false);
                    let mut files = files_from_drop(&ev);
                    if !multiple {
                        files.truncate(1);
                        queue.update(|q| q.clear());
                    }
                    enqueue(queue, files);
                }
            >
                {icon("upload")}
                <span>"Drag files here or "</span>
                <label for=input_id class="drop-zone__browse">"browse"</label>
                <input
                    id=input_id
                    type="file"
                    class="drop-zone__input"
                    multiple=multiple
                    on:change=move |ev| {
                        let files = files_from_input(&ev);
                        if !multiple {
                            queue.update(|q| q.clear());
                        }
                        enqueue(queue, files);
                    }
                />
            </div>
            <FileList queue=queue />
        </div>
    }
}

/// Queued files with icon and size; each can be removed, or all at once.
#[component]
pub fn FileList(queue: FileQueue) -> impl IntoView {
    view! {
        <Show when=move || queue.with(|q| !q.is_empty())>
            <div class="file-list">
                <div class="file-list__header">
                    <span>{move || format!("{} file(s) selected", queue.with(|q| q.len()))}</span>
                    <button
                        type="button"
                        class="file-list__clear"
                        on:click=move |_| queue.update(|q| q.clear())
                    >
                        "Remove all"
                    </button>
                </div>
                <ul>
                    {move || {
                        queue.with(|q| {
                            q.iter()
                                .map(|(name, file)| {
                                    let kind = FileIconKind::from_mime(&file.type_());
                                    let size = format_file_size(file.size() as u64);
                                    let remove_name = name.clone();
                                    view! {
                                        <li class="file-list__item">
                                            {icon(kind.icon_name())}
                                            <span class="file-list__name">{name.clone()}</span>
                                            <span class="file-list__size">{size}</span>
                                            <button
                                                type="button"
                                                class="file-list__remove"
                                                title="Remove"
                                                on:click=move |_| {
                                                    queue.update(|q| {
                                                        q.remove(&remove_name);
                                                    })
                                                }
                                            >
                                                {icon("x")}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </ul>
            </div>
        </Show>
    }
}
