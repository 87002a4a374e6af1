use yew::prelude::*;
use yew_router::prelude::*;

pub mod auth;
pub mod catalog;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod search;
pub mod utils;

use components::toast::ToastProvider;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/search")]
    Search,
    #[at("/course-details/:id")]
    CourseDetails { id: u32 },
    #[at("/assessment/:id")]
    Assessment { id: u32 },
    #[at("/programs")]
    Programs,
    #[at("/courses")]
    Courses,
    #[not_found]
    #[at("/404")]
    NotFound,
}

// Only the landing page is built; every other route lands on the 404 screen.
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Search
        | Route::CourseDetails { .. }
        | Route::Assessment { .. }
        | Route::Programs
        | Route::Courses
        | Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("Failed to initialize logging: {}", e));
    }
    log::info!("starting optgrad frontend");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_routes_carry_their_id() {
        assert_eq!(Route::CourseDetails { id: 3 }.to_path(), "/course-details/3");
        assert_eq!(Route::Assessment { id: 1 }.to_path(), "/assessment/1");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/course-details/7"), Some(Route::CourseDetails { id: 7 }));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
