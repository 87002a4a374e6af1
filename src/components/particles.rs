use web_sys::js_sys;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    delay: f64,
    duration: f64,
}

impl Particle {
    fn random() -> Self {
        Self {
            left: js_sys::Math::random() * 100.0,
            top: js_sys::Math::random() * 100.0,
            delay: js_sys::Math::random() * 5.0,
            duration: 3.0 + js_sys::Math::random() * 4.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay, self.duration
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingParticlesProps {
    pub count: usize,
}

/// Decorative dots scattered once per mount.
#[function_component(FloatingParticles)]
pub fn floating_particles(props: &FloatingParticlesProps) -> Html {
    let count = props.count;
    let particles = use_memo(|count| (0..*count).map(|_| Particle::random()).collect::<Vec<_>>(), count);

    html! {
        <div class="particles">
            { for particles.iter().enumerate().map(|(i, p)| html! {
                <div key={i} class="particle" style={p.style()}></div>
            }) }
            <style>
                {r#"
                .particles {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .particle {
                    position: absolute;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    animation: float 6s ease-in-out infinite;
                }
                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }
                "#}
            </style>
        </div>
    }
}
