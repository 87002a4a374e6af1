pub mod category_nav;
pub mod course_card;
pub mod footer;
pub mod hero;
pub mod particles;
pub mod toast;
pub mod typewriter;
