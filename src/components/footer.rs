use web_sys::js_sys;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="site-footer">
            <p>
                {format!("© {} OptGrad by ", year)}
                <span class="site-footer-brand">{"Techoptima"}</span>
                {". All rights reserved. Made with "}
                <i class="fas fa-heart"></i>
            </p>
            <style>
                {r#"
                .site-footer {
                    padding: 2rem 1rem;
                    border-top: 1px solid rgba(15, 23, 42, 0.08);
                    text-align: center;
                    color: #64748b;
                }
                .site-footer-brand {
                    font-weight: 600;
                    color: #6366f1;
                }
                .site-footer .fa-heart {
                    color: #ef4444;
                }
                "#}
            </style>
        </footer>
    }
}
