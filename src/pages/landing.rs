use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::signup::SignupModal;
use crate::components::category_nav::CategoryNavigation;
use crate::components::course_card::CourseCard;
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::particles::FloatingParticles;
use crate::components::toast::use_toaster;
use crate::config;
use crate::content::{initial, FEATURED_COURSES, FEATURES, TESTIMONIALS, TRUST_STATS};
use crate::utils::search_params::SearchParams;
use crate::Route;

fn go_to_search(navigator: &Option<Navigator>, params: &SearchParams) {
    let Some(navigator) = navigator else {
        log::warn!("no router available, dropping search navigation");
        return;
    };
    if let Err(e) = navigator.push_with_query(&Route::Search, params) {
        log::error!("Failed to navigate to search: {:?}", e);
    }
}

fn go_to_later(navigator: &Option<Navigator>, route: Route, delay_ms: u32) {
    let Some(navigator) = navigator.clone() else {
        log::warn!("no router available, dropping navigation to {:?}", route);
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        navigator.push(&route);
    });
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigator = use_navigator();
    let toaster = use_toaster();
    let signup_open = use_state(|| false);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_search = {
        let navigator = navigator.clone();
        let toaster = toaster.clone();
        Callback::from(move |query: String| {
            toaster.show(
                "Searching courses...",
                format!("Looking for \"{}\" in our course catalog", query),
            );
            let navigator = navigator.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SEARCH_NAVIGATION_DELAY_MS).await;
                go_to_search(&navigator, &SearchParams::query(query));
            });
        })
    };

    let on_goal_select = {
        let navigator = navigator.clone();
        let toaster = toaster.clone();
        Callback::from(move |goal: String| {
            toaster.show(
                "Goal Selected!",
                format!("Finding courses to help you: {}", goal.to_lowercase()),
            );
            go_to_search(&navigator, &SearchParams::goal(goal));
        })
    };

    let on_category_click = {
        let navigator = navigator.clone();
        let toaster = toaster.clone();
        Callback::from(move |name: String| {
            toaster.show("Category Selected", format!("Exploring {} courses", name));
            go_to_search(&navigator, &SearchParams::category(name));
        })
    };

    let on_start_trial = {
        let toaster = toaster.clone();
        Callback::from(move |_: MouseEvent| {
            toaster.show(
                "Free Trial Activated!",
                "Welcome! You now have access to premium content for 7 days.",
            );
        })
    };

    let push_now = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    let open_signup = {
        let signup_open = signup_open.clone();
        Callback::from(move |_: ()| signup_open.set(true))
    };
    let close_signup = {
        let signup_open = signup_open.clone();
        Callback::from(move |_: ()| signup_open.set(false))
    };

    let course_cards = FEATURED_COURSES.iter().map(|course| {
        let id = course.id;
        let on_view_program = {
            let navigator = navigator.clone();
            let toaster = toaster.clone();
            Callback::from(move |_: ()| {
                toaster.show("Loading Course Details", "Preparing comprehensive course information...");
                go_to_later(&navigator, Route::CourseDetails { id }, config::COURSE_NAVIGATION_DELAY_MS);
            })
        };
        let on_take_test = {
            let navigator = navigator.clone();
            let toaster = toaster.clone();
            Callback::from(move |_: ()| {
                toaster.show("Assessment Ready!", "Starting your skill assessment test");
                go_to_later(&navigator, Route::Assessment { id }, config::COURSE_NAVIGATION_DELAY_MS);
            })
        };
        html! {
            <div key={course.id} class="fade-up">
                <CourseCard
                    title={course.title}
                    description={course.description}
                    duration={course.duration}
                    students={course.students}
                    rating={course.rating}
                    instructor={course.instructor}
                    level={course.level}
                    price={course.price.map(AttrValue::from)}
                    original_price={course.original_price.map(AttrValue::from)}
                    image={course.image.map(AttrValue::from)}
                    category={course.category}
                    {on_view_program}
                    {on_take_test}
                />
            </div>
        }
    });

    html! {
        <div class="landing-page">
            <HeroSection {on_search} {on_goal_select} on_signup={open_signup} />

            <CategoryNavigation {on_category_click} />

            <section id="features" class="features">
                <div class="section-inner">
                    <div class="section-heading">
                        <div class="pill"><i class="fas fa-wand-magic-sparkles"></i>{"Why 1.8M+ Learners Choose Us"}</div>
                        <h2>
                            {"Experience the"}
                            <span class="gradient-text block">{"Future of Learning"}</span>
                        </h2>
                        <p>{"Revolutionary learning experience designed to accelerate your career growth with cutting-edge technology"}</p>
                    </div>
                    <div class="feature-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div key={feature.title} class="feature-card">
                                <div class={classes!("feature-icon", feature.gradient)}>
                                    <i class={classes!("fas", feature.icon)}></i>
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                                <span class={classes!("feature-stat", feature.gradient)}>{feature.stats}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="courses" class="courses">
                <div class="section-inner">
                    <div class="courses-heading">
                        <div>
                            <div class="pill"><i class="fas fa-book-open"></i>{"Featured Programs"}</div>
                            <h2>
                                {"Handpicked by"}
                                <span class="gradient-text block">{"Industry Leaders"}</span>
                            </h2>
                            <p>{"Carefully curated programs designed by experts from top tech companies"}</p>
                        </div>
                        <button class="outline-button" onclick={push_now(Route::Courses)}>
                            {"View All Courses"}
                            <i class="fas fa-arrow-right"></i>
                        </button>
                    </div>
                    <div class="course-grid">
                        { for course_cards }
                    </div>
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <div class="section-inner">
                    <div class="section-heading">
                        <div class="pill"><i class="fas fa-star"></i>{"Success Stories"}</div>
                        <h2>
                            {"Transforming "}
                            <span class="gradient-text">{"Careers Worldwide"}</span>
                        </h2>
                        <p>{"Join thousands who've accelerated their careers with our programs"}</p>
                    </div>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <div key={t.name} class="testimonial-card">
                                <div class="testimonial-stars">
                                    { for (0..t.rating).map(|i| html! { <i key={i} class="fas fa-star"></i> }) }
                                </div>
                                <blockquote>{format!("\"{}\"", t.content)}</blockquote>
                                <div class="testimonial-author">
                                    <div class="testimonial-avatar">{initial(t.name)}</div>
                                    <div>
                                        <div class="testimonial-name">{t.name}</div>
                                        <div class="testimonial-role">{t.role}</div>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta">
                <FloatingParticles count={15} />
                <div class="cta-inner">
                    <div class="pill pill-light"><i class="fas fa-arrow-trend-up"></i>{"Join 1.8M+ Successful Learners"}</div>
                    <h2>
                        {"Ready to Transform"}
                        <span class="block">{"Your Future?"}</span>
                    </h2>
                    <p>{"Start your learning journey today and join millions who've accelerated their careers"}</p>
                    <div class="cta-actions">
                        <button class="secondary-button large" onclick={on_start_trial}>
                            <i class="fas fa-play"></i>
                            {"Start Free Trial"}
                            <i class="fas fa-chevron-right"></i>
                        </button>
                        <button class="glass-button large" onclick={push_now(Route::Programs)}>
                            {"Explore Programs"}
                            <i class="fas fa-arrow-right"></i>
                        </button>
                    </div>
                    <div class="trust-grid">
                        { for TRUST_STATS.iter().map(|stat| html! {
                            <div key={stat.label} class="trust-stat">
                                <i class={classes!("fas", stat.icon)}></i>
                                <div class="trust-value">{stat.value}</div>
                                <div class="trust-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <Footer />

            <SignupModal is_open={*signup_open} on_close={close_signup} />

            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    min-height: 100vh;
    overflow: hidden;
}
.block {
    display: block;
}
.section-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 2rem;
}
.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}
.section-heading h2,
.courses-heading h2 {
    font-size: 3rem;
    margin: 1.5rem 0;
}
.section-heading p,
.courses-heading p {
    font-size: 1.25rem;
    color: #64748b;
    max-width: 48rem;
    margin: 0 auto;
}
.gradient-text {
    background: linear-gradient(90deg, #6366f1, #ec4899);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.pill {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 9999px;
    border: 1px solid rgba(99, 102, 241, 0.2);
    background: rgba(255, 255, 255, 0.6);
    font-weight: 500;
}
.pill i {
    color: #6366f1;
}
.pill-light {
    color: white;
    background: rgba(255, 255, 255, 0.15);
    border-color: rgba(255, 255, 255, 0.3);
}
.pill-light i {
    color: white;
}
.outline-button,
.secondary-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.625rem 1rem;
    border-radius: 0.75rem;
    font-weight: 600;
    cursor: pointer;
    transition: all 0.3s ease;
}
.outline-button {
    border: 1px solid #cbd5e1;
    background: white;
    color: #0f172a;
}
.outline-button:hover {
    background: #6366f1;
    border-color: #6366f1;
    color: white;
}
.secondary-button {
    border: none;
    background: #f472b6;
    color: white;
}
.large {
    padding: 1rem 2rem;
    font-size: 1.125rem;
}
.grad-purple-pink { background: linear-gradient(135deg, #a855f7, #ec4899); }
.grad-blue-cyan { background: linear-gradient(135deg, #3b82f6, #06b6d4); }
.grad-yellow-orange { background: linear-gradient(135deg, #eab308, #f97316); }
.grad-red-pink { background: linear-gradient(135deg, #ef4444, #ec4899); }
.grad-green-emerald { background: linear-gradient(135deg, #22c55e, #10b981); }
.grad-indigo-purple { background: linear-gradient(135deg, #6366f1, #a855f7); }
.grad-gray { background: linear-gradient(135deg, #6b7280, #4b5563); }
.badge-success { background: #16a34a; color: white; }
.badge-warning { background: #f59e0b; color: white; }
.badge-destructive { background: #dc2626; color: white; }
.features,
.testimonials {
    padding: 6rem 0;
    background: linear-gradient(180deg, #eef2ff, #f8fafc);
}
.feature-grid,
.testimonial-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 2rem;
}
.feature-card,
.testimonial-card {
    padding: 2.5rem;
    border-radius: 1.5rem;
    background: rgba(255, 255, 255, 0.9);
    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
    transition: transform 0.5s ease;
}
.feature-card:hover,
.testimonial-card:hover {
    transform: scale(1.05);
}
.feature-icon {
    display: inline-flex;
    padding: 1rem;
    border-radius: 1rem;
    color: white;
    font-size: 2rem;
    margin-bottom: 2rem;
}
.feature-card h3 {
    font-size: 1.5rem;
}
.feature-card p {
    color: #64748b;
    font-size: 1.125rem;
    line-height: 1.6;
}
.feature-stat {
    display: inline-flex;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    color: white;
    font-weight: 600;
    font-size: 0.875rem;
}
.courses {
    padding: 6rem 0;
}
.courses-heading {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
    margin-bottom: 4rem;
}
.courses-heading p {
    margin: 0;
}
.course-grid {
    display: grid;
    grid-template-columns: repeat(4, minmax(0, 1fr));
    gap: 2rem;
}
.fade-up {
    animation: fade-up 0.6s ease-out both;
}
@keyframes fade-up {
    from { opacity: 0; transform: translateY(1.5rem); }
    to { opacity: 1; transform: translateY(0); }
}
.testimonial-stars {
    color: #eab308;
    margin-bottom: 1.5rem;
}
.testimonial-card blockquote {
    margin: 0 0 1.5rem;
    font-size: 1.125rem;
    line-height: 1.6;
}
.testimonial-author {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.testimonial-avatar {
    width: 3rem;
    height: 3rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: linear-gradient(135deg, #6366f1, #8b5cf6);
    color: white;
    font-weight: 600;
}
.testimonial-name {
    font-weight: 600;
}
.testimonial-role {
    font-size: 0.875rem;
    color: #64748b;
}
.cta {
    position: relative;
    padding: 6rem 0;
    overflow: hidden;
    background: linear-gradient(135deg, #4f46e5, #7c3aed, #db2777);
    color: white;
    text-align: center;
}
.cta-inner {
    position: relative;
    z-index: 1;
    max-width: 64rem;
    margin: 0 auto;
    padding: 0 2rem;
}
.cta h2 {
    font-size: 3.5rem;
    line-height: 1.15;
}
.cta p {
    font-size: 1.5rem;
    color: rgba(255, 255, 255, 0.9);
}
.cta-actions {
    display: flex;
    justify-content: center;
    gap: 1.5rem;
    padding-top: 2rem;
}
.trust-grid {
    display: grid;
    grid-template-columns: repeat(4, minmax(0, 1fr));
    gap: 2rem;
    margin-top: 4rem;
    padding-top: 4rem;
    border-top: 1px solid rgba(255, 255, 255, 0.2);
}
.trust-stat i {
    font-size: 1.5rem;
    color: #a5f3fc;
}
.trust-value {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0.5rem 0;
}
.trust-label {
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.7);
}
@media (max-width: 1024px) {
    .course-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
    .feature-grid,
    .testimonial-grid {
        grid-template-columns: 1fr;
    }
    .courses-heading {
        flex-direction: column;
        align-items: flex-start;
    }
}
@media (max-width: 640px) {
    .course-grid,
    .trust-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
    .cta-actions {
        flex-direction: column;
    }
}
"#;
