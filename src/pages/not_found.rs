use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    let location = use_location();
    let path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        move |path| {
            log::error!("404 Error: User attempted to access non-existent route: {}", path);
            || ()
        },
        path.clone(),
    );

    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };
    let go_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };

    html! {
        <div class="not-found">
            <div class="not-found-card">
                <div class="not-found-code">{"404"}</div>
                <h1>{"Page Not Found"}</h1>
                <p>{"Oops! The page you're looking for doesn't exist. It might have been moved, deleted, or you entered the wrong URL."}</p>
                <code class="not-found-path">{path}</code>
                <div class="not-found-actions">
                    <button class="not-found-primary" onclick={go(Route::Home)}>
                        <i class="fas fa-house"></i>
                        {"Return Home"}
                    </button>
                    <button class="not-found-outline" onclick={go(Route::Search)}>
                        <i class="fas fa-magnifying-glass"></i>
                        {"Browse Courses"}
                    </button>
                    <button class="not-found-ghost" onclick={go_back}>
                        <i class="fas fa-arrow-left"></i>
                        {"Go Back"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: linear-gradient(135deg, #eef2ff, #fdf2f8);
                }
                .not-found-card {
                    max-width: 32rem;
                    text-align: center;
                }
                .not-found-code {
                    font-size: 8rem;
                    font-weight: 800;
                    background: linear-gradient(90deg, #6366f1, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .not-found-card p {
                    color: #64748b;
                    font-size: 1.125rem;
                }
                .not-found-path {
                    display: inline-block;
                    margin: 1rem 0 2rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 0.5rem;
                    background: rgba(99, 102, 241, 0.08);
                    color: #4f46e5;
                }
                .not-found-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .not-found-actions button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.75rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .not-found-primary {
                    border: none;
                    background: #6366f1;
                    color: white;
                }
                .not-found-outline {
                    border: 1px solid #cbd5e1;
                    background: white;
                    color: #0f172a;
                }
                .not-found-ghost {
                    border: none;
                    background: none;
                    color: #64748b;
                }
                "#}
            </style>
        </div>
    }
}
