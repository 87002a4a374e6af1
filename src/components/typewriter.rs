use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

pub static HEADLINE_WORDS: &[&str] = &["Skills", "Knowledge", "Expertise", "Career", "Future"];

/// Types a word one character at a time, holds it, deletes it, then moves
/// on to the next word.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    shown: usize,
    deleting: bool,
    delay: u32,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            deleting: false,
            delay: config::TYPEWRITER_TYPE_MS,
        }
    }

    fn current(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or("")
    }

    /// The visible prefix of the current word.
    pub fn text(&self) -> &'static str {
        let word = self.current();
        let end = word
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(word.len());
        &word[..end]
    }

    /// Milliseconds until the next `tick`.
    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn tick(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let len = self.current().chars().count();
        self.delay = if !self.deleting {
            if self.shown < len {
                self.shown += 1;
                if self.shown == len {
                    config::TYPEWRITER_HOLD_MS
                } else {
                    config::TYPEWRITER_TYPE_MS
                }
            } else {
                self.deleting = true;
                config::TYPEWRITER_DELETE_MS
            }
        } else if self.shown > 0 {
            self.shown -= 1;
            config::TYPEWRITER_DELETE_MS
        } else {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
            config::TYPEWRITER_TYPE_MS
        };
    }
}

impl Reducible for Typewriter {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut next = (*self).clone();
        next.tick();
        Rc::new(next)
    }
}

#[function_component(TypewriterText)]
pub fn typewriter_text() -> Html {
    let state = use_reducer(|| Typewriter::new(HEADLINE_WORDS));
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(_, _, delay)| {
                let timeout = Timeout::new(*delay, move || dispatcher.dispatch(()));
                move || drop(timeout)
            },
            (state.text(), state.deleting, state.delay()),
        );
    }

    html! {
        <span class="typewriter">
            {state.text()}
            <span class="typewriter-caret">{"|"}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tw: &mut Typewriter, ticks: usize) -> Vec<(&'static str, u32)> {
        (0..ticks)
            .map(|_| {
                tw.tick();
                (tw.text(), tw.delay())
            })
            .collect()
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        static WORDS: &[&str] = &["Go", "Up"];
        let mut tw = Typewriter::new(WORDS);
        assert_eq!(tw.text(), "");
        assert_eq!(
            run(&mut tw, 6),
            vec![
                ("G", config::TYPEWRITER_TYPE_MS),
                ("Go", config::TYPEWRITER_HOLD_MS),
                ("Go", config::TYPEWRITER_DELETE_MS),
                ("G", config::TYPEWRITER_DELETE_MS),
                ("", config::TYPEWRITER_DELETE_MS),
                ("", config::TYPEWRITER_TYPE_MS),
            ]
        );
        tw.tick();
        assert_eq!(tw.text(), "U");
    }

    #[test]
    fn wraps_to_first_word() {
        static WORDS: &[&str] = &["a"];
        let mut tw = Typewriter::new(WORDS);
        // type, start deleting, delete, advance
        run(&mut tw, 4);
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn slices_on_char_boundaries() {
        static WORDS: &[&str] = &["héllo"];
        let mut tw = Typewriter::new(WORDS);
        run(&mut tw, 2);
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn empty_word_list_is_inert() {
        let mut tw = Typewriter::new(&[]);
        tw.tick();
        assert_eq!(tw.text(), "");
    }
}
