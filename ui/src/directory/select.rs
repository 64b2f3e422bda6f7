use dioxus::prelude::*;

use super::{find_entry, DirectoryEntry};
use crate::t;

/// Selection control listing the directory. The leading empty option clears
/// the selection.
#[component]
pub fn UserSelect(
    entries: Vec<DirectoryEntry>,
    #[props(!optional)] selected: Option<u32>,
    on_select: EventHandler<Option<DirectoryEntry>>,
) -> Element {
    let lookup = entries.clone();
    let current = selected.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div { class: "chart-toolbar__field",
            label { r#for: "user_id", class: "chart-toolbar__label", {t!("select-user-label")} }
            select {
                id: "user_id",
                class: "chart-toolbar__select",
                value: "{current}",
                oninput: move |evt: FormEvent| {
                    let value = evt.value();
                    on_select.call(find_entry(&lookup, &value).cloned());
                },
                option { value: "", {t!("select-user-placeholder")} }
                for entry in entries.iter() {
                    option {
                        key: "{entry.id}",
                        value: "{entry.id}",
                        "data-avatar": entry.avatar_uri.clone().unwrap_or_default(),
                        "{entry.display_name}"
                    }
                }
            }
        }
    }
}
