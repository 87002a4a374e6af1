use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

pub enum ToastAction {
    Push { title: String, description: String },
    Dismiss(u64),
}

impl ToastQueue {
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id: self.next_id,
            title: title.into(),
            description: description.into(),
        });
        while self.toasts.len() > config::TOAST_CAPACITY {
            self.toasts.pop_front();
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { title, description } => {
                next.push(title, description);
            }
            ToastAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Handle passed through context so any component can raise a toast.
/// Outside a `ToastProvider` it only logs.
#[derive(Clone, Default, PartialEq)]
pub struct Toaster(Option<UseReducerDispatcher<ToastQueue>>);

impl Toaster {
    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) {
        let title = title.into();
        let description = description.into();
        log::debug!("toast: {} - {}", title, description);
        match &self.0 {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Push { title, description }),
            None => log::warn!("toast {:?} raised outside ToastProvider", title),
        }
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = Toaster(Some(queue.dispatcher()));

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <div class="toast-viewport">
                { for queue.toasts().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} dispatcher={queue.dispatcher()} />
                }) }
            </div>
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    max-width: 24rem;
                }
                .toast {
                    position: relative;
                    padding: 1rem 2.5rem 1rem 1.25rem;
                    border-radius: 0.75rem;
                    background: white;
                    border: 1px solid #e2e8f0;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.12);
                    animation: toast-in 0.25s ease-out;
                }
                .toast-title {
                    font-weight: 600;
                }
                .toast-description {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: #64748b;
                }
                .toast-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.75rem;
                    border: none;
                    background: none;
                    cursor: pointer;
                    color: #94a3b8;
                }
                @keyframes toast-in {
                    from { transform: translateY(1rem); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                });
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let on_dismiss = {
        let dispatcher = props.dispatcher.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toast" role="status">
            <div class="toast-title">{props.toast.title.clone()}</div>
            <div class="toast-description">{props.toast.description.clone()}</div>
            <button class="toast-close" onclick={on_dismiss}>{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_capacity_evicts_oldest() {
        let mut queue = ToastQueue::default();
        let ids: Vec<_> = (0..5).map(|i| queue.push(format!("t{i}"), "")).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let kept: Vec<_> = queue.toasts().map(|t| t.title.as_str()).collect();
        assert_eq!(kept.len(), config::TOAST_CAPACITY);
        assert_eq!(kept.last(), Some(&"t4"));
        assert_eq!(kept.first(), Some(&"t2"));
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push("a", "first");
        let b = queue.push("b", "second");
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.toasts().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn reducer_skips_unknown_dismiss() {
        let queue = Rc::new(ToastQueue::default());
        let same = Rc::clone(&queue).reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &same));
    }
}
