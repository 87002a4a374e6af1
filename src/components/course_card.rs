use yew::prelude::*;

use crate::catalog::Level;
use crate::content::{category_gradient, initial};

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub duration: AttrValue,
    pub students: AttrValue,
    pub rating: f32,
    pub instructor: AttrValue,
    pub level: Level,
    #[prop_or_default]
    pub price: Option<AttrValue>,
    #[prop_or_default]
    pub original_price: Option<AttrValue>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    pub category: AttrValue,
    pub on_view_program: Callback<()>,
    pub on_take_test: Callback<()>,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let gradient = category_gradient(&props.category);

    let on_view_program = {
        let cb = props.on_view_program.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_take_test = {
        let cb = props.on_take_test.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let media = match &props.image {
        Some(src) => html! { <img src={src.clone()} alt={props.title.clone()} /> },
        None => html! {
            <div class={classes!("course-placeholder", gradient)}>
                <i class="fas fa-book-open"></i>
            </div>
        },
    };

    let price = match &props.price {
        Some(price) => html! {
            <div class="course-price">
                <span class="course-price-current">{price.clone()}</span>
                if let Some(original) = &props.original_price {
                    <span class="course-price-original">{original.clone()}</span>
                }
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="course-card">
            <div class="course-media">
                {media}
                <span class={classes!("course-badge", "course-category", gradient)}>{props.category.clone()}</span>
                <span class={classes!("course-badge", "course-level", props.level.badge_class())}>{props.level.label()}</span>
            </div>
            <div class="course-body">
                <h3>{props.title.clone()}</h3>
                <p class="course-description">{props.description.clone()}</p>

                <div class="course-instructor">
                    <div class="course-avatar">{initial(&props.instructor)}</div>
                    <span>{props.instructor.clone()}</span>
                </div>

                <div class="course-stats">
                    <span><i class="far fa-clock"></i>{props.duration.clone()}</span>
                    <span><i class="fas fa-users"></i>{props.students.clone()}</span>
                    <span><i class="fas fa-star"></i>{props.rating.to_string()}</span>
                </div>

                {price}

                <div class="course-actions">
                    <button class="outline-button" onclick={on_view_program}>{"View Program"}</button>
                    <button class="secondary-button" onclick={on_take_test}>
                        {"Take Test"}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .course-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    background: white;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    border: 1px solid rgba(15, 23, 42, 0.06);
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
                    transition: transform 0.5s ease, box-shadow 0.5s ease;
                }
                .course-card:hover {
                    transform: scale(1.02);
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
                }
                .course-media {
                    position: relative;
                    height: 12rem;
                    overflow: hidden;
                }
                .course-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .course-placeholder {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 4rem;
                }
                .course-badge {
                    position: absolute;
                    top: 1rem;
                    padding: 0.25rem 0.625rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: white;
                }
                .course-category { left: 1rem; }
                .course-level { right: 1rem; }
                .course-body {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    flex: 1;
                }
                .course-body h3 {
                    margin: 0;
                    font-size: 1.25rem;
                }
                .course-card:hover h3 {
                    color: #6366f1;
                }
                .course-description {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #64748b;
                    line-height: 1.6;
                }
                .course-instructor {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .course-avatar {
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #6366f1, #8b5cf6);
                    color: white;
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .course-stats {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1rem;
                    padding: 1rem 0;
                    border-top: 1px solid rgba(15, 23, 42, 0.06);
                    border-bottom: 1px solid rgba(15, 23, 42, 0.06);
                    font-size: 0.75rem;
                    color: #64748b;
                }
                .course-stats i {
                    margin-right: 0.375rem;
                }
                .course-stats .fa-star {
                    color: #facc15;
                }
                .course-price-current {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .course-price-original {
                    margin-left: 0.75rem;
                    font-size: 1.125rem;
                    color: #94a3b8;
                    text-decoration: line-through;
                }
                .course-actions {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: auto;
                }
                .course-actions button {
                    flex: 1;
                }
                "#}
            </style>
        </div>
    }
}
