use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    pub fn delta(self, step: f64) -> f64 {
        match self {
            ScrollDirection::Left => -step,
            ScrollDirection::Right => step,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RoomGalleryProps {
    pub images: Vec<String>,
    pub room_name: String,
    /// Emits the index of the clicked image.
    pub on_image_click: Callback<usize>,
}

#[function_component(RoomGallery)]
pub fn room_gallery(props: &RoomGalleryProps) -> Html {
    let strip_ref = use_node_ref();

    // The scroll container clamps at both ends, so no bounds checks here.
    let scroll = {
        let strip_ref = strip_ref.clone();
        move |direction: ScrollDirection| {
            let strip_ref = strip_ref.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(strip) = strip_ref.cast::<Element>() {
                    let options = ScrollToOptions::new();
                    options.set_left(direction.delta(config::GALLERY_SCROLL_STEP_PX));
                    options.set_behavior(ScrollBehavior::Smooth);
                    strip.scroll_by_with_scroll_to_options(&options);
                }
            })
        }
    };

    html! {
        <div class="room-gallery-container">
            <button class="gallery-nav-btn prev-btn" onclick={scroll(ScrollDirection::Left)}>{"‹"}</button>
            <div class="room-gallery" ref={strip_ref}>
                {
                    for props.images.iter().enumerate().map(|(i, src)| {
                        let on_image_click = props.on_image_click.clone();
                        html! {
                            <img
                                key={i}
                                src={src.clone()}
                                alt={format!("{} detail {}", props.room_name, i + 1)}
                                class="room-gallery-img"
                                onclick={Callback::from(move |_: MouseEvent| on_image_click.emit(i))}
                            />
                        }
                    })
                }
            </div>
            <button class="gallery-nav-btn next-btn" onclick={scroll(ScrollDirection::Right)}>{"›"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_sets_sign_of_step() {
        assert_eq!(ScrollDirection::Left.delta(200.0), -200.0);
        assert_eq!(ScrollDirection::Right.delta(200.0), 200.0);
    }
}
