use yew::prelude::*;

/// The image set a lightbox is bound to, plus which one is showing.
/// `source_room` is the index of the room whose gallery opened it.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxState {
    images: Vec<String>,
    index: usize,
    source_room: Option<usize>,
}

impl LightboxState {
    /// Returns `None` for an empty image set, since there would be nothing
    /// to show. An out of range start index wraps around.
    pub fn open(images: Vec<String>, index: usize, source_room: Option<usize>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let index = index % images.len();
        Some(Self { images, index, source_room })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn source_room(&self) -> Option<usize> {
        self.source_room
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub state: LightboxState,
    /// Label for the booking shortcut; hidden when the lightbox has no room.
    #[prop_or_default]
    pub book_label: Option<String>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_close: Callback<()>,
    pub on_book: Callback<usize>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_prev.emit(());
        })
    };

    let next = {
        let on_next = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_next.emit(());
        })
    };

    let book_button = match (props.state.source_room(), props.book_label.as_ref()) {
        (Some(room), Some(label)) => {
            let on_book = props.on_book.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_book.emit(room);
            });
            html! {
                <button class="lightbox-book-btn" {onclick}>{label}</button>
            }
        }
        _ => html! {},
    };

    html! {
        <div class="lightbox-overlay" onclick={close.clone()}>
            <button class="lightbox-close-btn" onclick={close}>{"✕"}</button>
            <button class="lightbox-nav-btn prev" onclick={prev}>{"‹"}</button>
            <img
                src={props.state.current().to_string()}
                alt="Full view"
                class="lightbox-image"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            />
            <button class="lightbox-nav-btn next" onclick={next}>{"›"}</button>
            <div
                class="lightbox-counter"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                {format!("{} / {}", props.state.index() + 1, props.state.len())}
            </div>
            { book_button }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_set_does_not_open() {
        assert!(LightboxState::open(Vec::new(), 0, None).is_none());
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut lb = LightboxState::open(images(&["A", "B", "C"]), 1, Some(0)).unwrap();
        assert_eq!(lb.current(), "B");
        lb.next();
        assert_eq!((lb.index(), lb.current()), (2, "C"));
        lb.next();
        assert_eq!((lb.index(), lb.current()), (0, "A"));
        lb.prev();
        assert_eq!((lb.index(), lb.current()), (2, "C"));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=6 {
            let set: Vec<String> = (0..len).map(|i| format!("/img-{}.jpg", i)).collect();
            for start in 0..len {
                let mut lb = LightboxState::open(set.clone(), start, None).unwrap();
                for _ in 0..len {
                    lb.next();
                }
                assert_eq!(lb.index(), start);

                lb.prev();
                lb.next();
                assert_eq!(lb.index(), start);
            }
        }
    }

    #[test]
    fn single_image_navigation_stays_put() {
        let mut lb = LightboxState::open(images(&["only"]), 0, None).unwrap();
        lb.next();
        lb.prev();
        lb.prev();
        assert_eq!(lb.index(), 0);
        assert_eq!(lb.current(), "only");
    }

    #[test]
    fn out_of_range_start_wraps() {
        let lb = LightboxState::open(images(&["A", "B"]), 5, Some(3)).unwrap();
        assert_eq!(lb.index(), 1);
        assert_eq!(lb.source_room(), Some(3));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;
    use crate::components::test_support::{cleanup, click, create_mount_point, settle};

    wasm_bindgen_test_configure!(run_in_browser);

    async fn mount_lightbox(closed: Rc<Cell<bool>>) -> web_sys::Element {
        let state = LightboxState::open(vec!["/a.jpg".into(), "/b.jpg".into()], 0, None)
            .expect("non-empty set opens");
        let mount = create_mount_point();
        yew::Renderer::<Lightbox>::with_root_and_props(
            mount.clone(),
            LightboxProps {
                state,
                book_label: None,
                on_prev: Callback::noop(),
                on_next: Callback::noop(),
                on_close: Callback::from(move |_: ()| closed.set(true)),
                on_book: Callback::noop(),
            },
        )
        .render();
        settle().await;
        mount
    }

    #[wasm_bindgen_test]
    async fn clicks_inside_the_viewer_keep_it_open() {
        let closed = Rc::new(Cell::new(false));
        let mount = mount_lightbox(closed.clone()).await;

        for selector in [".lightbox-image", ".lightbox-counter", ".lightbox-nav-btn.next"] {
            click(&mount, selector);
            assert!(!closed.get(), "click on {} closed the lightbox", selector);
        }

        click(&mount, ".lightbox-overlay");
        assert!(closed.get());

        cleanup(&mount);
    }
}
