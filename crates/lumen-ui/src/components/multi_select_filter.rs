use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use lumen_types::{FilterOption, SelectionSet};

/// Whether the option list is showing. This is the only state the filter
/// keeps; the selection itself belongs to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    TriggerPressed,
    ItemSelected,
    Dismissed,
}

impl DropdownState {
    pub fn apply(self, event: DropdownEvent) -> Self {
        match (self, event) {
            (DropdownState::Closed, DropdownEvent::TriggerPressed) => DropdownState::Open,
            (DropdownState::Open, DropdownEvent::TriggerPressed) => DropdownState::Closed,
            // picking an item keeps the list up for further picks
            (state, DropdownEvent::ItemSelected) => state,
            (_, DropdownEvent::Dismissed) => DropdownState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == DropdownState::Open
    }
}

/// Toggles `value` against the host's selection and reports the whole new
/// set through `on_change`. The dropdown stays open.
pub fn select_item(
    value: &str,
    selected: Signal<SelectionSet>,
    on_change: Callback<SelectionSet>,
    state: RwSignal<DropdownState>,
) {
    state.update(|s| *s = s.apply(DropdownEvent::ItemSelected));
    let next = selected.with_untracked(|current| current.toggle(value));
    on_change.run(next);
}

/// Controlled multi-select dropdown.
///
/// Renders a trigger summarizing `selected` and a checklist of `options`.
/// Selecting an item never mutates anything locally: the new selection is
/// handed to `on_change` and shows up once the host feeds it back.
#[component]
pub fn MultiSelectFilter(
    /// Caption above the trigger
    #[prop(into)]
    title: String,
    /// Trigger text when nothing is selected, "All" if unset
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Options in display order
    options: Vec<FilterOption>,
    /// Currently selected values, owned by the host
    #[prop(into)]
    selected: Signal<SelectionSet>,
    /// Receives the full new selection after every toggle
    #[prop(into)]
    on_change: Callback<SelectionSet>,
    /// Extra classes for the root element
    #[prop(optional, into)]
    class: Option<String>,
    /// Start with the option list showing
    #[prop(optional)]
    default_open: bool,
) -> impl IntoView {
    let state = RwSignal::new(if default_open {
        DropdownState::Open
    } else {
        DropdownState::Closed
    });

    let rootClass = match class {
        Some(extra) => format!("multi-select {extra}"),
        None => "multi-select".to_string(),
    };

    let triggerOptions = options.clone();
    let triggerText = move || {
        selected.with(|current| current.trigger_text(&triggerOptions, placeholder.as_deref()))
    };

    let isOpen = move || state.get().is_open();
    let dismiss = move || state.update(|s| *s = s.apply(DropdownEvent::Dismissed));

    let items = options
        .into_iter()
        .map(|option| {
            let FilterOption { value, label } = option;
            let checkedValue = value.clone();
            let isChecked = move || selected.with(|current| current.contains(&checkedValue));
            let isCheckedMark = isChecked.clone();
            let isCheckedAria = isChecked.clone();

            let onSelect = move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                select_item(&value, selected, on_change, state);
            };

            view! {
                <li
                    role="menuitemcheckbox"
                    class="multi-select-item"
                    class:checked=isChecked
                    aria-checked=move || isCheckedAria().to_string()
                    on:click=onSelect
                >
                    <span class="multi-select-check">
                        {move || if isCheckedMark() { "\u{2713}" } else { "" }}
                    </span>
                    <span class="multi-select-item-label">{label}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div
            class=rootClass
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    dismiss();
                }
            }
        >
            <span class="multi-select-title">{title}</span>
            <button
                type="button"
                class="multi-select-trigger"
                aria-haspopup="menu"
                aria-expanded=move || isOpen().to_string()
                on:click=move |_| state.update(|s| *s = s.apply(DropdownEvent::TriggerPressed))
            >
                <span class="multi-select-label">{triggerText}</span>
                <span class="multi-select-caret">"\u{25BE}"</span>
            </button>
            <div class="multi-select-backdrop" hidden=move || !isOpen() on:click=move |_| dismiss()></div>
            <ul class="multi-select-menu" role="menu" hidden=move || !isOpen()>
                {items}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_open_and_close_on_trigger() {
        let opened = DropdownState::Closed.apply(DropdownEvent::TriggerPressed);
        assert!(opened.is_open());
        assert!(!opened.apply(DropdownEvent::TriggerPressed).is_open());
    }

    #[test]
    fn should_stay_open_when_item_selected() {
        let opened = DropdownState::Open;
        assert_eq!(opened.apply(DropdownEvent::ItemSelected), DropdownState::Open);
    }

    #[test]
    fn should_close_when_dismissed() {
        assert_eq!(
            DropdownState::Open.apply(DropdownEvent::Dismissed),
            DropdownState::Closed
        );
        assert_eq!(
            DropdownState::Closed.apply(DropdownEvent::Dismissed),
            DropdownState::Closed
        );
    }

    #[test]
    fn should_register_two_selections_in_one_open_session() {
        let owner = Owner::new();
        owner.with(|| {
            let hostSelection = RwSignal::new(SelectionSet::new());
            let notifications = RwSignal::new(Vec::<SelectionSet>::new());
            let onChange = Callback::new(move |next: SelectionSet| {
                notifications.update(|n| n.push(next.clone()));
                hostSelection.set(next);
            });
            let state = RwSignal::new(DropdownState::Closed);

            state.update(|s| *s = s.apply(DropdownEvent::TriggerPressed));
            select_item("bug", hostSelection.into(), onChange, state);
            assert!(state.get_untracked().is_open());
            select_item("task", hostSelection.into(), onChange, state);
            assert!(state.get_untracked().is_open());

            let expected: SelectionSet = ["bug", "task"].into_iter().collect();
            assert_eq!(hostSelection.get_untracked(), expected);
            assert_eq!(
                notifications.get_untracked(),
                vec![["bug"].into_iter().collect(), expected]
            );
        });
    }

    #[test]
    fn should_propose_removal_without_touching_host_state() {
        let owner = Owner::new();
        owner.with(|| {
            let hostSelection = RwSignal::new(["bug", "task"].into_iter().collect::<SelectionSet>());
            let proposed = RwSignal::new(None::<SelectionSet>);
            let onChange = Callback::new(move |next: SelectionSet| proposed.set(Some(next)));
            let state = RwSignal::new(DropdownState::Open);

            select_item("bug", hostSelection.into(), onChange, state);

            assert_eq!(
                proposed.get_untracked(),
                Some(["task"].into_iter().collect::<SelectionSet>())
            );
            assert_eq!(
                hostSelection.get_untracked(),
                ["bug", "task"].into_iter().collect::<SelectionSet>()
            );
        });
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn should_render_trigger_text_and_checked_items() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let options = vec![
                FilterOption::new("bug", "Bug"),
                FilterOption::new("feature", "Feature"),
            ];
            let selected: SelectionSet = ["bug"].into_iter().collect();
            view! {
                <MultiSelectFilter
                    title="Type"
                    options=options
                    selected=selected
                    on_change=Callback::new(move |_next: SelectionSet| {})
                    class="toolbar-filter"
                />
            }
                .to_html()
        });
        assert!(html.contains("multi-select toolbar-filter"));
        assert!(html.contains("Type"));
        assert!(html.contains("multi-select-label"));
        assert!(html.matches("Bug").count() >= 2);
        assert!(html.contains("aria-checked=\"true\""));
        assert!(html.contains("aria-checked=\"false\""));
        assert!(html.contains("Feature"));
    }

    #[cfg(feature = "ssr")]
    fn render_menu(defaultOpen: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let options = vec![
                FilterOption::new("low", "Low"),
                FilterOption::new("high", "High"),
            ];
            view! {
                <MultiSelectFilter
                    title="Priority"
                    options=options
                    selected=SelectionSet::new()
                    on_change=Callback::new(move |_next: SelectionSet| {})
                    default_open=defaultOpen
                />
            }
                .to_html()
        })
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn should_hide_menu_and_backdrop_until_opened() {
        let html = render_menu(false);
        assert_eq!(html.matches("hidden").count(), 2);
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn should_show_menu_when_open() {
        let html = render_menu(true);
        assert!(!html.contains("hidden"));
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("multi-select-menu"));
        assert!(html.contains("Low"));
        assert!(html.contains("High"));
    }
}
