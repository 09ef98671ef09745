use leptos::prelude::*;
use lumen_types::{
    Issue, IssueFilter, IssueKind, IssuePriority, IssueStats, SelectionSet, StatDisplay, StatTone,
};

use crate::components::multi_select_filter::MultiSelectFilter;
use crate::components::stat_card::StatCard;

#[server]
async fn get_issues() -> Result<Vec<Issue>, ServerFnError> {
    use lumen_providers::IssueStore;
    let store = use_context::<IssueStore>()
        .ok_or_else(|| ServerFnError::new("issue store missing from context"))?;
    Ok(store.issues().to_vec())
}

/// Picks one counter out of the stats, or `Loading` while the dataset is absent.
fn stat_display(stats: Option<&IssueStats>, pick: fn(&IssueStats) -> u64) -> StatDisplay {
    StatDisplay::from(stats.map(pick))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (issues, setIssues) = signal(Option::<Result<Vec<Issue>, String>>::None);
    let kinds = RwSignal::new(SelectionSet::new());
    let priorities = RwSignal::new(SelectionSet::new());

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = get_issues().await.map_err(|e| e.to_string());
            setIssues.set(Some(result));
        });
    }

    let stats = Memo::new(move |_| {
        let filter = IssueFilter {
            kinds: kinds.get(),
            priorities: priorities.get(),
        };
        issues.with(|loaded| match loaded {
            Some(Ok(list)) => Some(IssueStats::collect(list, &filter)),
            _ => None,
        })
    });

    let card = move |pick: fn(&IssueStats) -> u64| {
        Signal::derive(move || stats.with(|s| stat_display(s.as_ref(), pick)))
    };

    let clearFilters = move |_: leptos::ev::MouseEvent| {
        kinds.set(SelectionSet::new());
        priorities.set(SelectionSet::new());
    };

    view! {
        <div class="dashboard-header">
            <h1>"Issue Dashboard"</h1>
            <p class="subtitle">"Backlog at a glance"</p>
        </div>
        <div class="filter-bar">
            <MultiSelectFilter
                title="Type"
                placeholder="All types"
                options=IssueKind::filter_options()
                selected=kinds
                on_change=Callback::new(move |next: SelectionSet| kinds.set(next))
            />
            <MultiSelectFilter
                title="Priority"
                placeholder="All priorities"
                options=IssuePriority::filter_options()
                selected=priorities
                on_change=Callback::new(move |next: SelectionSet| priorities.set(next))
            />
            <button type="button" class="btn btn-secondary" on:click=clearFilters>
                "Clear filters"
            </button>
        </div>
        {move || {
            issues
                .with(|loaded| match loaded {
                    Some(Err(e)) => Some(e.clone()),
                    _ => None,
                })
                .map(|e| {
                    view! {
                        <div class="card">
                            <p class="error-text">"Failed to load issues: " {e}</p>
                        </div>
                    }
                })
        }}
        <div class="dashboard-grid">
            <StatCard
                title="Total issues"
                display={card(|s| s.total)}
                icon="\u{2630}"
                tone=StatTone::Neutral
            />
            <StatCard
                title="Open"
                display={card(|s| s.open)}
                icon="\u{25CB}"
                tone=StatTone::Primary
            />
            <StatCard
                title="In progress"
                display={card(|s| s.in_progress)}
                icon="\u{25D4}"
                tone=StatTone::Warning
            />
            <StatCard
                title="Closed"
                display={card(|s| s.closed)}
                icon="\u{2713}"
                tone=StatTone::Success
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_types::StatValue;

    #[test]
    fn should_show_loading_until_stats_exist() {
        assert_eq!(stat_display(None, |s| s.total), StatDisplay::Loading);
    }

    #[test]
    fn should_show_picked_counter_once_stats_exist() {
        let stats = IssueStats {
            total: 9,
            open: 4,
            in_progress: 2,
            closed: 3,
        };
        assert_eq!(
            stat_display(Some(&stats), |s| s.in_progress),
            StatDisplay::Loaded(StatValue::Count(2))
        );
    }
}
