use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::catalog::Property;
use crate::components::booking_form::BookingForm;
use crate::components::lightbox::{Lightbox, LightboxState};
use crate::components::room_gallery::RoomGallery;
use crate::config;

/// Everything the panel shows on top of the room list. Rooms are referred to
/// by their index in `Property::rooms`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub selected_room: Option<usize>,
    pub lightbox: Option<LightboxState>,
    /// Room whose booking form opens once the handoff delay has passed.
    pub pending_booking: Option<usize>,
}

pub enum ViewAction {
    OpenBooking(usize),
    CloseBooking,
    OpenLightbox {
        images: Vec<String>,
        index: usize,
        room: Option<usize>,
    },
    CloseLightbox,
    NextImage,
    PrevImage,
    /// "Book this" pressed inside the lightbox.
    BookFromLightbox(usize),
    /// The handoff delay for this room ran out.
    HandoffElapsed(usize),
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::OpenBooking(room) => {
                next.selected_room = Some(room);
                next.pending_booking = None;
            }
            ViewAction::CloseBooking => next.selected_room = None,
            ViewAction::OpenLightbox { images, index, room } => {
                next.lightbox = LightboxState::open(images, index, room);
            }
            ViewAction::CloseLightbox => next.lightbox = None,
            ViewAction::NextImage => {
                if let Some(lightbox) = next.lightbox.as_mut() {
                    lightbox.next();
                }
            }
            ViewAction::PrevImage => {
                if let Some(lightbox) = next.lightbox.as_mut() {
                    lightbox.prev();
                }
            }
            ViewAction::BookFromLightbox(room) => {
                next.lightbox = None;
                next.pending_booking = Some(room);
            }
            ViewAction::HandoffElapsed(room) => {
                // A newer handoff or a direct "Book Now" supersedes this one.
                if next.pending_booking != Some(room) {
                    return self;
                }
                next.pending_booking = None;
                next.selected_room = Some(room);
            }
        }
        Rc::new(next)
    }
}

/// Owns the timer of a scheduled lightbox-to-booking handoff. Cancelling,
/// rescheduling or dropping the holder stops a pending callback from firing.
#[derive(Default)]
pub struct Handoff {
    timer: Option<Timeout>,
}

impl Handoff {
    pub fn schedule<F>(&mut self, delay_ms: u32, fire: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.timer = Some(Timeout::new(delay_ms, fire));
    }

    /// Dropping a gloo `Timeout` clears it.
    pub fn cancel(&mut self) {
        self.timer = None;
    }
}

#[derive(Properties, PartialEq)]
pub struct PropertyDetailsProps {
    pub property: Rc<Property>,
    pub on_close: Callback<()>,
}

#[function_component(PropertyDetails)]
pub fn property_details(props: &PropertyDetailsProps) -> Html {
    let view = use_reducer(ViewState::default);
    let property = &props.property;

    // Closing the panel mid-handoff cancels the timer, so no form opens on a
    // panel that is gone.
    {
        let dispatcher = view.dispatcher();
        use_effect_with_deps(move |pending: &Option<usize>| {
            let mut handoff = Handoff::default();
            if let Some(room) = *pending {
                handoff.schedule(config::LIGHTBOX_HANDOFF_MS, move || {
                    dispatcher.dispatch(ViewAction::HandoffElapsed(room));
                });
            }
            move || handoff.cancel()
        }, view.pending_booking);
    }

    let close_panel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let open_booking = {
        let view = view.clone();
        move |room: usize| {
            let view = view.clone();
            Callback::from(move |_: MouseEvent| view.dispatch(ViewAction::OpenBooking(room)))
        }
    };

    let open_lightbox = {
        let view = view.clone();
        move |room: usize, images: Vec<String>| {
            let view = view.clone();
            Callback::from(move |index: usize| {
                view.dispatch(ViewAction::OpenLightbox {
                    images: images.clone(),
                    index,
                    room: Some(room),
                })
            })
        }
    };

    let booking_form = view
        .selected_room
        .and_then(|index| property.rooms.get(index).cloned().map(|room| (index, room)))
        .map(|(index, room)| {
            let view = view.clone();
            html! {
                <BookingForm
                    key={index}
                    {room}
                    on_close={Callback::from(move |_: ()| view.dispatch(ViewAction::CloseBooking))}
                />
            }
        })
        .unwrap_or_default();

    let lightbox = view.lightbox.clone().map(|state| {
        let book_label = state
            .source_room()
            .and_then(|index| property.rooms.get(index))
            .map(|room| format!("Book This {}", room.booking_noun()));
        let on_prev = { let view = view.clone(); Callback::from(move |_: ()| view.dispatch(ViewAction::PrevImage)) };
        let on_next = { let view = view.clone(); Callback::from(move |_: ()| view.dispatch(ViewAction::NextImage)) };
        let on_close = { let view = view.clone(); Callback::from(move |_: ()| view.dispatch(ViewAction::CloseLightbox)) };
        let on_book = {
            let view = view.clone();
            Callback::from(move |room: usize| {
                log::debug!("Handing off from lightbox to booking for room {}", room);
                view.dispatch(ViewAction::BookFromLightbox(room))
            })
        };
        html! {
            <Lightbox {state} {book_label} {on_prev} {on_next} {on_close} {on_book} />
        }
    }).unwrap_or_default();

    html! {
        <div class="property-details-overlay" onclick={close_panel.clone()}>
            <div class="property-details-container" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="close-details-btn" onclick={close_panel}>{"✕"}</button>

                <div class="property-details-header">
                    <img src={property.hero_image.clone()} alt={property.name.clone()} class="property-details-hero" />
                    <div class="property-details-title-section">
                        <h1>{&property.name}</h1>
                        <p class="property-location">{format!("📍 {}", property.location)}</p>
                        <p class="property-description">{&property.description}</p>
                    </div>
                </div>

                <div class="property-amenities-section">
                    <h2>{"Amenities & Features"}</h2>
                    <div class="amenities-grid">
                        {
                            for property.amenities.iter().map(|amenity| html! {
                                <div class="amenity-item">
                                    <span class="amenity-icon">{&amenity.icon}</span>
                                    <span>{&amenity.label}</span>
                                </div>
                            })
                        }
                    </div>
                </div>

                <div class="rooms-section">
                    <h2>{"Available Accommodations"}</h2>
                    <div class="rooms-grid">
                        {
                            for property.rooms.iter().enumerate().map(|(index, room)| html! {
                                <div key={index} class="room-card">
                                    <img src={room.hero_image.clone()} alt={room.name.clone()} class="room-image" />
                                    <div class="room-info">
                                        <h3>{&room.name}</h3>
                                        <p class="room-description">{&room.description}</p>
                                        {
                                            if room.gallery_images.is_empty() {
                                                html! {}
                                            } else {
                                                html! {
                                                    <RoomGallery
                                                        images={room.gallery_images.clone()}
                                                        room_name={room.name.clone()}
                                                        on_image_click={open_lightbox(index, room.gallery_images.clone())}
                                                    />
                                                }
                                            }
                                        }
                                        <div class="room-tags">
                                            { for room.feature_tags.iter().map(|tag| html! { <span class="room-tag">{tag}</span> }) }
                                        </div>
                                        <div class="room-features">
                                            <span>{format!("👥 {} Guests", room.capacity)}</span>
                                            <span>{format!("🛏️ {}", room.bed_config)}</span>
                                            <span>{format!("📏 {}", room.size_label)}</span>
                                        </div>
                                        <div class="room-price-section">
                                            <div class="room-price">
                                                <span class="price-amount">{format!("₹{}", room.price)}</span>
                                                <span class="price-period">{"/night"}</span>
                                            </div>
                                            <button class="btn btn-primary book-room-btn" onclick={open_booking(index)}>
                                                {"Book Now"}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>

                { booking_form }
                { lightbox }
            </div>
            <style>
                {r#"
                .property-details-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    background: rgba(6, 20, 14, 0.75);
                    backdrop-filter: blur(6px);
                    overflow-y: auto;
                    padding: 4vh 1rem;
                }

                .property-details-container {
                    position: relative;
                    max-width: 1100px;
                    margin: 0 auto;
                    background: #fdfaf3;
                    color: #1f2b1c;
                    border-radius: 20px;
                    overflow: hidden;
                    animation: detailsRise 0.35s ease-out;
                }

                @keyframes detailsRise {
                    from { transform: translateY(100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                .close-details-btn, .close-modal-btn, .lightbox-close-btn {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 40px;
                    height: 40px;
                    border: none;
                    border-radius: 50%;
                    background: rgba(0, 0, 0, 0.55);
                    color: #fff;
                    cursor: pointer;
                    z-index: 5;
                }

                .property-details-hero {
                    width: 100%;
                    height: 360px;
                    object-fit: cover;
                }

                .property-details-title-section,
                .property-amenities-section,
                .rooms-section {
                    padding: 1.5rem 2rem;
                }

                .amenities-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                    gap: 0.75rem;
                }

                .amenity-item {
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                    padding: 0.75rem;
                    border-radius: 10px;
                    background: #eef3e6;
                }

                .rooms-grid {
                    display: grid;
                    gap: 2rem;
                }

                .room-card {
                    display: grid;
                    grid-template-columns: minmax(240px, 2fr) 3fr;
                    gap: 1.5rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                    overflow: hidden;
                }

                .room-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .room-info {
                    padding: 1.25rem 1.25rem 1.25rem 0;
                }

                .room-gallery-container {
                    position: relative;
                    margin: 1rem 0;
                }

                .room-gallery {
                    display: flex;
                    gap: 0.5rem;
                    overflow-x: auto;
                    scroll-behavior: smooth;
                    scrollbar-width: none;
                }

                .room-gallery-img {
                    flex: 0 0 140px;
                    height: 96px;
                    object-fit: cover;
                    border-radius: 8px;
                    cursor: zoom-in;
                }

                .gallery-nav-btn {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    border: none;
                    border-radius: 50%;
                    width: 32px;
                    height: 32px;
                    background: rgba(255, 255, 255, 0.9);
                    cursor: pointer;
                    z-index: 2;
                }

                .prev-btn { left: -8px; }
                .next-btn { right: -8px; }

                .room-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.4rem;
                    margin-bottom: 0.75rem;
                }

                .room-tag {
                    font-size: 0.8rem;
                    padding: 0.2rem 0.6rem;
                    border-radius: 999px;
                    background: #e4eedb;
                }

                .room-features {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    font-size: 0.9rem;
                }

                .room-price-section {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 1rem;
                }

                .price-amount {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #2d5016;
                }

                .booking-modal-overlay, .lightbox-overlay {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1100;
                    background: rgba(0, 0, 0, 0.7);
                }

                .lightbox-overlay {
                    background: rgba(0, 0, 0, 0.92);
                }

                .booking-modal {
                    position: relative;
                    width: min(440px, 92vw);
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                }

                .booking-form .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                    margin-bottom: 1rem;
                }

                .booking-error {
                    color: #b3261e;
                    font-size: 0.9rem;
                }

                .lightbox-image {
                    max-width: 86vw;
                    max-height: 80vh;
                    border-radius: 8px;
                }

                .lightbox-nav-btn {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    font-size: 2.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                }

                .lightbox-nav-btn.prev { left: 2vw; }
                .lightbox-nav-btn.next { right: 2vw; }

                .lightbox-counter {
                    position: absolute;
                    top: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: rgba(255, 255, 255, 0.8);
                }

                .lightbox-book-btn {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.8rem 1.8rem;
                    border: none;
                    border-radius: 999px;
                    background: #52b788;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }

                @media (max-width: 768px) {
                    .room-card {
                        grid-template-columns: 1fr;
                    }
                    .room-info {
                        padding: 0 1.25rem 1.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlSelectElement;

    use super::*;
    use crate::catalog::Catalog;
    use crate::components::test_support::{cleanup, click, create_mount_point, fire_change, settle};

    wasm_bindgen_test_configure!(run_in_browser);

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let fired = Rc::new(Cell::new(0));
        let hit = fired.clone();
        (fired, move || hit.set(hit.get() + 1))
    }

    async fn wait_past_delay() {
        TimeoutFuture::new(config::LIGHTBOX_HANDOFF_MS * 3).await;
    }

    #[wasm_bindgen_test]
    async fn scheduled_handoff_fires_after_delay() {
        let (fired, fire) = counter();
        let mut handoff = Handoff::default();
        handoff.schedule(config::LIGHTBOX_HANDOFF_MS, fire);
        assert_eq!(fired.get(), 0);

        wait_past_delay().await;
        assert_eq!(fired.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn cancelled_handoff_never_fires() {
        let (fired, fire) = counter();
        let mut handoff = Handoff::default();
        handoff.schedule(config::LIGHTBOX_HANDOFF_MS, fire);
        handoff.cancel();

        wait_past_delay().await;
        assert_eq!(fired.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn dropped_handoff_never_fires() {
        let (fired, fire) = counter();
        {
            let mut handoff = Handoff::default();
            handoff.schedule(config::LIGHTBOX_HANDOFF_MS, fire);
        }

        wait_past_delay().await;
        assert_eq!(fired.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn rescheduling_replaces_pending_handoff() {
        let (first, fire_first) = counter();
        let (second, fire_second) = counter();
        let mut handoff = Handoff::default();
        handoff.schedule(config::LIGHTBOX_HANDOFF_MS, fire_first);
        handoff.schedule(config::LIGHTBOX_HANDOFF_MS, fire_second);

        wait_past_delay().await;
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    fn guest_select(mount: &web_sys::Element) -> HtmlSelectElement {
        mount
            .query_selector(".booking-form select")
            .unwrap()
            .expect("booking form should be open")
            .unchecked_into()
    }

    #[wasm_bindgen_test]
    async fn switching_rooms_starts_a_fresh_booking_draft() {
        let property = Catalog::load()
            .unwrap()
            .get("mowgli-camp-packages")
            .expect("bundled catalog has the Mowgli Camp packages");
        assert!(property.rooms.len() >= 2);

        let mount = create_mount_point();
        yew::Renderer::<PropertyDetails>::with_root_and_props(
            mount.clone(),
            PropertyDetailsProps { property, on_close: Callback::noop() },
        )
        .render();
        settle().await;

        click(&mount, ".room-card:nth-child(1) .book-room-btn");
        settle().await;
        let select = guest_select(&mount);
        assert_eq!(select.value(), "2");
        select.set_value("1");
        fire_change(&select);
        settle().await;
        assert_eq!(guest_select(&mount).value(), "1");

        click(&mount, ".room-card:nth-child(2) .book-room-btn");
        settle().await;
        assert_eq!(guest_select(&mount).value(), "2");

        cleanup(&mount);
    }
}
