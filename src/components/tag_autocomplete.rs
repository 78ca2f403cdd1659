//! Tag Autocomplete Component
//!
//! Product tag entry box with server-side suggestions.
//! Supports comma-separated batch input for pasting multiple tags.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_admin_context;

/// Suggestions are only requested for segments at least this long
pub const MIN_TERM_LEN: usize = 2;

/// Get the current search segment (text after the last comma)
pub fn current_segment(input: &str) -> &str {
    input.rsplit(',').next().unwrap_or("").trim()
}

/// Replace the current segment with a picked suggestion, leaving the
/// cursor ready for the next tag
pub fn replace_current_segment(input: &str, tag: &str) -> String {
    let mut values: Vec<&str> = input.split(',').map(str::trim).collect();
    if let Some(last) = values.last_mut() {
        *last = tag;
    }
    format!("{}, ", values.join(", "))
}

/// All non-empty comma-separated tags in `input`
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Append `tag` unless already present
pub fn add_unique(tags: &mut Vec<String>, tag: String) -> bool {
    if tags.contains(&tag) {
        return false;
    }
    tags.push(tag);
    true
}

/// Move the highlighted suggestion, wrapping at both ends
pub fn step_selection(current: Option<usize>, len: usize, down: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, down) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    })
}

/// Value of the hidden `product_tags` input
pub fn hidden_value(tags: &[String]) -> String {
    tags.join(", ")
}

/// Tag entry box with suggestions and a removable tag list
#[component]
pub fn TagAutocomplete(
    /// Tags already attached to the product
    initial_tags: Vec<String>,
) -> impl IntoView {
    let ctx = use_admin_context();

    let (tags, set_tags) = signal(initial_tags);
    let (input_value, set_input_value) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<String>::new());
    let (selected_idx, set_selected_idx) = signal::<Option<usize>>(None);

    let clear_suggestions = move || {
        set_suggestions.set(Vec::new());
        set_selected_idx.set(None);
    };

    let fetch_suggestions = move |term: String| {
        let api = ctx.api().clone();
        spawn_local(async move {
            let found = match api.tag_suggestions(&term).await {
                Ok(found) => found,
                Err(e) => {
                    log::error!("[TAGS] Suggestions for {:?} failed: {}", term, e);
                    Vec::new()
                }
            };
            // Drop answers for a segment the user has already moved past
            if current_segment(&input_value.get_untracked()) == term {
                set_suggestions.set(found);
            }
        });
    };

    let commit_input = move || {
        let entered = split_tags(&input_value.get_untracked());
        if entered.is_empty() {
            return;
        }
        set_tags.update(|list| {
            for tag in entered {
                if !add_unique(list, tag.clone()) {
                    log::debug!("[TAGS] Skipping duplicate {:?}", tag);
                }
            }
        });
        set_input_value.set(String::new());
        clear_suggestions();
    };

    let pick_suggestion = move |name: String| {
        set_input_value.update(|value| *value = replace_current_segment(value, &name));
        clear_suggestions();
    };

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let value = input.value();
        let term = current_segment(&value).to_string();
        set_input_value.set(value);
        clear_suggestions();
        if term.chars().count() >= MIN_TERM_LEN {
            fetch_suggestions(term);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let len = suggestions.with_untracked(Vec::len);
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_selected_idx.set(step_selection(selected_idx.get_untracked(), len, true));
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_selected_idx.set(step_selection(selected_idx.get_untracked(), len, false));
            }
            "Enter" => {
                ev.prevent_default();
                let picked = selected_idx
                    .get_untracked()
                    .and_then(|i| suggestions.with_untracked(|s| s.get(i).cloned()));
                match picked {
                    Some(name) => pick_suggestion(name),
                    None => commit_input(),
                }
            }
            _ => {}
        }
    };

    let remove_tag = move |tag: String| {
        set_tags.update(|list| list.retain(|t| *t != tag));
    };

    view! {
        <div class="tag-input-wrapper">
            <div class="tag-entry">
                <input
                    type="text"
                    name="prod_tags_entry"
                    placeholder="Add tags, separated by commas"
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <button type="button" class="btn" on:click=move |_| commit_input()>"Add"</button>
            </div>

            <Show when=move || suggestions.with(|s| !s.is_empty())>
                <ul class="autocomplete-list">
                    {move || {
                        let selected = selected_idx.get();
                        suggestions.get().into_iter().enumerate().map(|(i, name)| {
                            let name_for_click = name.clone();
                            view! {
                                <li
                                    class=if selected == Some(i) { "tag-suggestion selected" } else { "tag-suggestion" }
                                    on:mouseover=move |_| set_selected_idx.set(Some(i))
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        pick_suggestion(name_for_click.clone());
                                    }
                                >
                                    {name}
                                </li>
                            }
                        }).collect_view()
                    }}
                </ul>
            </Show>

            <div class="tag-list">
                <For
                    each=move || tags.get()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let tag_for_remove = tag.clone();
                        view! {
                            <div class="tag-list-item">
                                <span class="title" title=tag.clone()>{tag.clone()}</span>
                                <button
                                    type="button"
                                    class="tag-del-btn"
                                    aria-label=format!("Remove {}", tag)
                                    on:click=move |_| remove_tag(tag_for_remove.clone())
                                >"×"</button>
                            </div>
                        }
                    }
                />
            </div>

            <input type="hidden" name="product_tags" prop:value=move || hidden_value(&tags.get()) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_segment() {
        assert_eq!(current_segment("red, blu"), "blu");
        assert_eq!(current_segment("  wool "), "wool");
        assert_eq!(current_segment("red,"), "");
    }

    #[test]
    fn test_replace_current_segment() {
        assert_eq!(replace_current_segment("red, blu", "blue"), "red, blue, ");
        assert_eq!(replace_current_segment("wo", "wool"), "wool, ");
    }

    #[test]
    fn test_split_tags_ignores_blanks() {
        assert_eq!(split_tags(" red, ,blue,, "), vec!["red", "blue"]);
        assert!(split_tags(" , ").is_empty());
    }

    #[test]
    fn test_add_unique() {
        let mut tags = vec!["red".to_string()];
        assert!(!add_unique(&mut tags, "red".to_string()));
        assert!(add_unique(&mut tags, "blue".to_string()));
        assert_eq!(hidden_value(&tags), "red, blue");
    }

    #[test]
    fn test_step_selection_wraps() {
        assert_eq!(step_selection(None, 3, true), Some(0));
        assert_eq!(step_selection(Some(2), 3, true), Some(0));
        assert_eq!(step_selection(None, 3, false), Some(2));
        assert_eq!(step_selection(Some(0), 3, false), Some(2));
        assert_eq!(step_selection(Some(1), 0, true), None);
    }
}
