use yew::prelude::*;

use crate::components::particles::FloatingParticles;
use crate::components::typewriter::TypewriterText;
use crate::content::{GOALS, HERO_STATS};
use crate::search::SearchOverlay;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub on_search: Callback<String>,
    pub on_goal_select: Callback<String>,
    #[prop_or_default]
    pub on_signup: Callback<()>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let search_open = use_state(|| false);

    let open_search = {
        let search_open = search_open.clone();
        Callback::from(move |_: MouseEvent| search_open.set(true))
    };
    let close_search = {
        let search_open = search_open.clone();
        Callback::from(move |_: ()| search_open.set(false))
    };
    let on_signup = {
        let on_signup = props.on_signup.clone();
        Callback::from(move |_: MouseEvent| on_signup.emit(()))
    };

    html! {
        <>
            <section class="hero">
                <div class="hero-gradient"></div>
                <div class="hero-blobs">
                    <div class="blob blob-a"></div>
                    <div class="blob blob-b"></div>
                    <div class="blob blob-c"></div>
                </div>
                <FloatingParticles count={20} />

                <div class="hero-inner">
                    <div class="hero-logo">
                        <img src="/assets/optgrad-logo.png" alt="OptGrad by Techoptima" />
                    </div>
                    <div class="hero-grid">
                        <div class="hero-copy">
                            <div class="hero-badge">
                                <i class="fas fa-circle-check"></i>
                                <span>{"Guided from industry leaders"}</span>
                            </div>
                            <h1 class="hero-title">
                                <span>{"Transform Your"}</span>
                                <span class="hero-title-dynamic"><TypewriterText /></span>
                                <span>{"Today"}</span>
                            </h1>
                            <p class="hero-subtitle">
                                {"Master cutting-edge skills with "}
                                <span class="hero-accent">{"India's most advanced"}</span>
                                {" upskilling platform"}
                            </p>

                            <div class="hero-search" onclick={open_search}>
                                <i class="fas fa-magnifying-glass"></i>
                                <span>{"What would you like to learn today?"}</span>
                                <div class="hero-search-dots">
                                    <span></span><span></span><span></span>
                                </div>
                            </div>

                            <p class="hero-goals-label">
                                <i class="fas fa-wand-magic-sparkles"></i>
                                {"Or select your goal:"}
                            </p>
                            <div class="hero-goals">
                                { for GOALS.iter().map(|goal| {
                                    let on_goal_select = props.on_goal_select.clone();
                                    let text = goal.text.to_string();
                                    html! {
                                        <button key={goal.text} class="glass-button"
                                            onclick={Callback::from(move |_| on_goal_select.emit(text.clone()))}>
                                            <i class={classes!("fas", goal.icon)}></i>
                                            {goal.text}
                                        </button>
                                    }
                                }) }
                            </div>

                            <button class="hero-signup" onclick={on_signup}>{"Create Free Account"}</button>

                            <div class="hero-stats">
                                { for HERO_STATS.iter().map(|stat| html! {
                                    <div key={stat.label} class="hero-stat">
                                        <div class={classes!("hero-stat-icon", stat.gradient)}>
                                            <i class={classes!("fas", stat.icon)}></i>
                                        </div>
                                        <div class="hero-stat-value">{stat.value}</div>
                                        <div class="hero-stat-label">{stat.label}</div>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="hero-visual">
                            <img src="/assets/hero-learning.jpg" alt="Modern Learning Platform" />
                            <button class="hero-play"><i class="fas fa-play"></i></button>
                        </div>
                    </div>
                </div>
            </section>

            <SearchOverlay
                is_open={*search_open}
                on_close={close_search}
                on_search={props.on_search.clone()}
            />

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    color: white;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, #4f46e5, #7c3aed, #db2777);
                    background-size: 200% 200%;
                    animation: gradient-shift 12s ease infinite;
                }
                @keyframes gradient-shift {
                    0%, 100% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                }
                .blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    background: rgba(255, 255, 255, 0.1);
                }
                .blob-a { top: 5rem; left: 2.5rem; width: 18rem; height: 18rem; }
                .blob-b { bottom: 5rem; right: 2.5rem; width: 24rem; height: 24rem; }
                .blob-c { top: 50%; left: 33%; width: 16rem; height: 16rem; }
                .hero-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }
                .hero-logo {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 3rem;
                }
                .hero-logo img {
                    height: 5rem;
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 4rem;
                    align-items: center;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.15);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                .hero-title {
                    font-size: 4rem;
                    line-height: 1.1;
                }
                .hero-title span {
                    display: block;
                }
                .hero-title-dynamic {
                    min-height: 1.2em;
                    background: linear-gradient(90deg, #a5f3fc, #fbcfe8);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .typewriter-caret {
                    animation: caret 1s step-end infinite;
                }
                @keyframes caret {
                    50% { opacity: 0; }
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    max-width: 32rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                .hero-accent {
                    color: #a5f3fc;
                    font-weight: 600;
                }
                .hero-search {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    height: 4rem;
                    padding: 0 2rem;
                    margin: 2rem 0;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.95);
                    color: #64748b;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .hero-search:hover {
                    transform: scale(1.02);
                }
                .hero-search > span {
                    flex: 1;
                }
                .hero-search-dots span {
                    display: inline-block;
                    width: 0.5rem;
                    height: 0.5rem;
                    margin-left: 0.5rem;
                    border-radius: 50%;
                    background: #6366f1;
                }
                .hero-goals {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 0.75rem;
                }
                .glass-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 0.875rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.1);
                    color: white;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .glass-button:hover {
                    background: rgba(255, 255, 255, 0.9);
                    color: #0f172a;
                }
                .hero-signup {
                    margin-top: 2rem;
                    padding: 0.875rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: white;
                    color: #4f46e5;
                    font-weight: 700;
                    cursor: pointer;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    text-align: center;
                }
                .hero-stat-icon {
                    display: inline-flex;
                    padding: 0.75rem;
                    border-radius: 1rem;
                }
                .hero-stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .hero-stat-label {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .hero-visual {
                    position: relative;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .hero-visual img {
                    width: 100%;
                    height: 600px;
                    object-fit: cover;
                    display: block;
                }
                .hero-play {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    background: rgba(255, 255, 255, 0.15);
                    color: white;
                    font-size: 2rem;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero-title {
                        font-size: 3rem;
                    }
                    .hero-goals {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </>
    }
}
