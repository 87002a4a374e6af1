use yew::prelude::*;

use crate::content::CATEGORIES;

#[derive(Properties, PartialEq)]
pub struct CategoryNavigationProps {
    pub on_category_click: Callback<String>,
}

#[function_component(CategoryNavigation)]
pub fn category_navigation(props: &CategoryNavigationProps) -> Html {
    html! {
        <section class="categories">
            <div class="categories-inner">
                <div class="section-heading">
                    <h2>
                        {"Explore Our "}
                        <span class="gradient-text">{"Top Categories"}</span>
                    </h2>
                    <p>{"Discover industry-leading programs designed by experts from top companies"}</p>
                </div>

                <div class="category-grid">
                    { for CATEGORIES.iter().map(|category| {
                        let on_category_click = props.on_category_click.clone();
                        let name = category.name.to_string();
                        html! {
                            <div key={category.name} class="category-card"
                                onclick={Callback::from(move |_| on_category_click.emit(name.clone()))}>
                                <div class={classes!("category-icon", category.gradient)}>
                                    <i class={classes!("fas", category.icon)}></i>
                                </div>
                                <h3>{category.name}</h3>
                                <p>{category.description}</p>
                            </div>
                        }
                    }) }
                </div>

                <div class="categories-cta">
                    <p>{"Can't find what you're looking for?"}</p>
                    <button class="outline-button">{"Browse All Programs"}</button>
                </div>
            </div>
            <style>
                {r#"
                .categories {
                    padding: 2rem 0 4rem;
                    background: linear-gradient(180deg, #f8fafc, #eef2ff);
                }
                .categories-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .category-grid {
                    display: grid;
                    grid-template-columns: repeat(6, minmax(0, 1fr));
                    gap: 1.5rem;
                }
                .category-card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.8);
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .category-card:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.1);
                }
                .category-card:hover h3 {
                    color: #6366f1;
                }
                .category-icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    color: white;
                    margin-bottom: 1rem;
                }
                .category-card h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1rem;
                }
                .category-card p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #64748b;
                }
                .categories-cta {
                    margin-top: 3rem;
                    text-align: center;
                    color: #64748b;
                }
                @media (max-width: 1024px) {
                    .category-grid {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                }
                @media (max-width: 640px) {
                    .category-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </section>
    }
}
