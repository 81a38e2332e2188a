use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod catalog;
mod components {
    pub mod card_stack;
    pub mod room_gallery;
    pub mod lightbox;
    pub mod booking_form;
    pub mod property_details;
    #[cfg(all(test, target_arch = "wasm32"))]
    pub mod test_support;
}
mod pages {
    pub mod home;
}

use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

/// Smooth-scrolls the page to the element with the given id, if present.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("about", "About"),
    ("properties", "Properties"),
    ("experiences", "Experiences"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(scroll_y) = window().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(scroll_y > config::HEADER_SCROLL_THRESHOLD_PX);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = window() {
                if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    warn!("Failed to attach scroll listener: {:?}", err);
                }
            }

            move || {
                if let Some(window) = window() {
                    if let Err(err) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        warn!("Failed to detach scroll listener: {:?}", err);
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll_to_section(id);
            })
        }
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("header", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav container">
                <Link<Route> to={Route::Home} classes="logo">
                    {"Journey of Kodai"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={menu_class}>
                    {
                        for NAV_SECTIONS.iter().map(|(id, label)| html! {
                            <li>
                                <a href={format!("#{}", id)} onclick={go_to(*id)}>{*label}</a>
                            </li>
                        })
                    }
                </ul>
                <a href="#contact" class="nav-book-btn" onclick={go_to("contact")}>
                    {"Book Now"}
                </a>
            </nav>
        </header>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::components::test_support::{cleanup, create_mount_point, settle};

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(NavHarness)]
    fn nav_harness() -> Html {
        html! {
            <BrowserRouter>
                <Nav />
                <div style="height: 5000px"></div>
            </BrowserRouter>
        }
    }

    fn header_is_scrolled(mount: &web_sys::Element) -> bool {
        mount
            .query_selector("header.header")
            .unwrap()
            .expect("nav renders a header")
            .class_list()
            .contains("scrolled")
    }

    #[wasm_bindgen_test]
    async fn header_tracks_page_scroll() {
        let mount = create_mount_point();
        yew::Renderer::<NavHarness>::with_root(mount.clone()).render();
        settle().await;
        let window = window().unwrap();
        window.scroll_to_with_x_and_y(0.0, 0.0);
        TimeoutFuture::new(100).await;
        assert!(!header_is_scrolled(&mount));

        window.scroll_to_with_x_and_y(0.0, config::HEADER_SCROLL_THRESHOLD_PX + 150.0);
        TimeoutFuture::new(100).await;
        assert!(header_is_scrolled(&mount));

        window.scroll_to_with_x_and_y(0.0, 0.0);
        cleanup(&mount);
    }
}
