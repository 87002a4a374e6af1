use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::debounce::DebounceSlot;
use super::query::{Exit, QueryAction, QueryState, Selection};
use crate::catalog::TRENDING_SEARCHES;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct SearchOverlayProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Called once per completed interaction, never on a plain close.
    pub on_search: Callback<String>,
}

#[function_component(SearchOverlay)]
pub fn search_overlay(props: &SearchOverlayProps) -> Html {
    let state = use_reducer(QueryState::default);
    let slot = use_mut_ref(DebounceSlot::default);
    let input_ref = use_node_ref();

    // Every opening starts a fresh session; closing drops the pending lookup.
    {
        let dispatcher = state.dispatcher();
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open {
                    dispatcher.dispatch(QueryAction::Open);
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                } else {
                    dispatcher.dispatch(QueryAction::Close);
                }
                || ()
            },
            props.is_open,
        );
    }

    // Each new ticket replaces the timer in the slot.
    {
        let dispatcher = state.dispatcher();
        let slot = slot.clone();
        use_effect_with_deps(
            move |pending| {
                match *pending {
                    Some(ticket) => slot.borrow_mut().schedule(config::SEARCH_DEBOUNCE_MS, move || {
                        dispatcher.dispatch(QueryAction::Fire(ticket));
                    }),
                    None => slot.borrow_mut().cancel(),
                }
                || ()
            },
            state.pending(),
        );
    }

    {
        let slot = slot.clone();
        use_effect_with_deps(move |_| move || slot.borrow_mut().cancel(), ());
    }

    // Every exit cancels the pending lookup and resets before telling the owner.
    let finish = {
        let slot = slot.clone();
        let dispatcher = state.dispatcher();
        let on_search = props.on_search.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |exit: Exit| {
            slot.borrow_mut().cancel();
            dispatcher.dispatch(QueryAction::Close);
            if let Exit::Search(query) = &exit {
                log::info!("search overlay completed with {:?}", query);
            }
            exit.notify(&on_search, &on_close);
        })
    };

    let close = {
        let finish = finish.clone();
        Callback::from(move |_: MouseEvent| finish.emit(Exit::Dismiss))
    };

    if !props.is_open {
        return html! {};
    }

    let oninput = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(QueryAction::SetText(input.value()));
        })
    };

    let onkeydown = {
        let finish = finish.clone();
        let text = state.text.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                finish.emit(Selection::Submit(&text).into());
            }
        })
    };

    let text = state.text.clone();
    let searchable = QueryState::is_searchable(&text);

    let body = if text.is_empty() {
        html! {
            <div class="search-section">
                <div class="search-section-title">
                    <i class="fas fa-arrow-trend-up"></i>
                    <h3>{"Trending Searches"}</h3>
                </div>
                <div class="trending-list">
                    { for TRENDING_SEARCHES.iter().map(|term| {
                        let finish = finish.clone();
                        let exit = Exit::from(Selection::Trending(*term));
                        html! {
                            <button key={*term} class="trending-chip" onclick={Callback::from(move |_| finish.emit(exit.clone()))}>
                                {*term}
                            </button>
                        }
                    }) }
                </div>
            </div>
        }
    } else if !searchable {
        html! {
            <div class="search-empty">
                <i class="fas fa-book-open"></i>
                <p>{"Type at least 3 characters to search"}</p>
            </div>
        }
    } else if state.is_loading {
        html! {
            <div class="search-empty">
                <div class="search-spinner"></div>
                <p>{"Searching courses..."}</p>
            </div>
        }
    } else if state.results.is_empty() {
        html! {
            <div class="search-empty">
                <i class="fas fa-magnifying-glass"></i>
                <p>{format!("No courses found for \"{}\"", text)}</p>
                <p class="search-hint">{"Try different keywords or browse our categories"}</p>
            </div>
        }
    } else {
        html! {
            <div class="search-results">
                { for state.results.iter().map(|entry| {
                    let finish = finish.clone();
                    let exit = Exit::from(Selection::Result(entry));
                    html! {
                        <div key={entry.id} class="search-result" onclick={Callback::from(move |_| finish.emit(exit.clone()))}>
                            <div class="search-result-icon"><i class="fas fa-book-open"></i></div>
                            <div class="search-result-body">
                                <h4>{entry.title}</h4>
                                <p>{entry.description}</p>
                                <div class="search-result-meta">
                                    <span class="search-badge">{entry.category}</span>
                                    <span><i class="far fa-clock"></i>{" "}{entry.duration}</span>
                                    <span class={entry.level.badge_class()}>{entry.level.label()}</span>
                                    <span>{format!("⭐ {}", entry.rating)}</span>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    let footer = if searchable && !state.results.is_empty() {
        let finish = finish.clone();
        let exit = Exit::from(Selection::Submit(&text));
        html! {
            <div class="search-footer">
                <button class="search-view-all" onclick={Callback::from(move |_| finish.emit(exit.clone()))}>
                    {format!("View all results for \"{}\"", text)}
                </button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="search-overlay">
            <div class="search-backdrop" onclick={close.clone()}></div>
            <div class="search-modal">
                <div class="search-header">
                    <div class="search-header-icon"><i class="fas fa-magnifying-glass"></i></div>
                    <input
                        ref={input_ref}
                        type="text"
                        class="search-input"
                        placeholder="Search for courses, topics, or skills..."
                        value={text.clone()}
                        {oninput}
                        {onkeydown}
                    />
                    <button class="search-close" onclick={close}>{"×"}</button>
                </div>
                <div class="search-body">
                    {body}
                </div>
                {footer}
            </div>
            <style>
                {r#"
                .search-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: flex-start;
                    justify-content: center;
                    padding: 4rem 1rem 0;
                }
                .search-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                }
                .search-modal {
                    position: relative;
                    width: 100%;
                    max-width: 42rem;
                    background: white;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .search-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    border-bottom: 1px solid #e2e8f0;
                }
                .search-header-icon {
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #6366f1, #8b5cf6);
                    color: white;
                }
                .search-input {
                    flex: 1;
                    font-size: 1.125rem;
                    border: none;
                    outline: none;
                    background: transparent;
                }
                .search-close {
                    border: none;
                    background: transparent;
                    font-size: 1.5rem;
                    cursor: pointer;
                    color: #64748b;
                }
                .search-body {
                    max-height: 24rem;
                    overflow-y: auto;
                }
                .search-section {
                    padding: 1.5rem;
                }
                .search-section-title {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #6366f1;
                }
                .search-section-title h3 {
                    margin: 0;
                    color: #0f172a;
                }
                .trending-list {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .trending-chip {
                    border: none;
                    border-radius: 9999px;
                    padding: 0.375rem 0.875rem;
                    background: #f1f5f9;
                    cursor: pointer;
                }
                .trending-chip:hover {
                    background: #e2e8f0;
                }
                .search-empty {
                    padding: 2rem;
                    text-align: center;
                    color: #64748b;
                }
                .search-empty i {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .search-hint {
                    font-size: 0.875rem;
                }
                .search-spinner {
                    width: 2rem;
                    height: 2rem;
                    margin: 0 auto 1rem;
                    border: 4px solid rgba(99, 102, 241, 0.2);
                    border-top-color: #6366f1;
                    border-radius: 50%;
                    animation: search-spin 1s linear infinite;
                }
                @keyframes search-spin {
                    to { transform: rotate(360deg); }
                }
                .search-results {
                    padding: 1rem;
                }
                .search-result {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 1rem;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .search-result:hover {
                    background: #f8fafc;
                }
                .search-result:hover h4 {
                    color: #6366f1;
                }
                .search-result-icon {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #06b6d4, #3b82f6);
                    color: white;
                }
                .search-result-body h4 {
                    margin: 0;
                }
                .search-result-body p {
                    margin: 0.25rem 0 0;
                    font-size: 0.875rem;
                    color: #64748b;
                }
                .search-result-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 0.75rem;
                    font-size: 0.75rem;
                    color: #64748b;
                }
                .search-badge {
                    padding: 0.125rem 0.5rem;
                    border-radius: 9999px;
                    background: #f1f5f9;
                    color: #0f172a;
                }
                .search-footer {
                    padding: 1rem;
                    border-top: 1px solid #e2e8f0;
                    background: #f8fafc;
                }
                .search-view-all {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #6366f1, #8b5cf6);
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
