use dioxus::prelude::*;

/// Checkbox grid bound to a string-list selection signal.
///
/// Shared by the register, practice, and settings forms, which all edit
/// topic/company lists the same way.
pub(crate) fn preference_picker(
    legend: String,
    options: Vec<String>,
    mut selection: Signal<Vec<String>>,
) -> Element {
    let items = options.into_iter().map(move |option| {
        let checked = selection().contains(&option);
        let value = option.clone();
        rsx! {
            label { class: "picker-item", key: "{option}",
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |_| {
                        let mut current = selection();
                        if let Some(pos) = current.iter().position(|entry| *entry == value) {
                            current.remove(pos);
                        } else {
                            current.push(value.clone());
                        }
                        selection.set(current);
                    },
                }
                span { "{option}" }
            }
        }
    });

    rsx! {
        fieldset { class: "picker",
            legend { "{legend}" }
            {items}
        }
    }
}
