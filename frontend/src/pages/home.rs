use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::{Brand, Catalog, Property};
use crate::components::card_stack::CardStack;
use crate::components::property_details::PropertyDetails;
use crate::scroll_to_section;

const EXPERIENCES: [(&str, &str, &str); 6] = [
    ("🔥", "Campfire Nights", "Gather around the warmth, share stories under the stars"),
    ("🌲", "Forest Walks", "Guided trails through shola forests and misty valleys"),
    ("🚙", "Jeep Trekking", "Off-road rides to viewpoints most visitors never reach"),
    ("💧", "Waterfall Visits", "Cool off at hidden falls a short hike from camp"),
    ("👨‍👩‍👧‍👦", "Family Activities", "Games, a pool and dinosaurs for the little explorers"),
    ("📷", "Photography Tours", "Golden-hour fog and sunsets worth waking up for"),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "An absolutely magical experience! The A-Frame cottage was stunning, and waking up to the sounds of the forest was pure bliss. Can't wait to return!",
        "Sarah & Michael",
        "Bangalore",
    ),
    (
        "Dinosaur Park was perfect for our family. The kids loved the themed accommodations, and we appreciated the thoughtful design and peaceful surroundings.",
        "The Sharma Family",
        "Mumbai",
    ),
    (
        "A true escape from city life. The luxury tents at Mowgli Camp exceeded our expectations. The campfire nights and forest walks were unforgettable.",
        "Priya & Raj",
        "Chennai",
    ),
];

#[derive(Properties, PartialEq)]
struct AccommodationCardProps {
    property: Rc<Property>,
    on_select: Callback<Rc<Property>>,
}

#[function_component(AccommodationCard)]
fn accommodation_card(props: &AccommodationCardProps) -> Html {
    let onclick = {
        let property = props.property.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(property.clone()))
    };
    let listing = &props.property.listing;

    html! {
        <div class="accommodation-card">
            <div class="accommodation-image">
                <img src={listing.image.clone()} alt={listing.title.clone()} />
            </div>
            <div class="accommodation-info">
                <h4>{&listing.title}</h4>
                <span class="accommodation-capacity">{&listing.availability}</span>
                <button class="btn btn-primary" {onclick}>
                    {"View Details & Book"}
                </button>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_state(|| match Catalog::load() {
        Ok(catalog) => {
            log::debug!("Loaded {} properties", catalog.len());
            Rc::new(catalog)
        }
        Err(e) => {
            log::error!("Failed to load property catalog: {}", e);
            Rc::new(Catalog::default())
        }
    });
    // Only one property panel is ever open; picking another replaces it.
    let selected = use_state(|| None::<Rc<Property>>);

    // A property slug in the URL fragment opens that property on load.
    {
        let catalog = catalog.clone();
        let selected = selected.clone();
        use_effect_with_deps(move |_| {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            if let Some(property) = catalog.get(hash.trim_start_matches('#')) {
                log::info!("Opening {} from link", property.name);
                selected.set(Some(property));
            }
            || ()
        }, ());
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |property: Rc<Property>| {
            log::info!("Opening details for {}", property.name);
            selected.set(Some(property));
        })
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| {
            log::info!("Closing property details");
            selected.set(None);
        })
    };

    let cta = |id: &'static str| Callback::from(move |_: MouseEvent| scroll_to_section(id));

    let properties_section = if catalog.is_empty() {
        html! {}
    } else {
        html! {
            <section id="properties" class="properties section-large">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Our Properties"}</h2>
                        <p>{"Two distinct experiences, one incredible destination"}</p>
                    </div>
                    {
                        for Brand::ALL.iter().map(|brand| html! {
                            <div class="property-block" id={brand.anchor()}>
                                <div class="property-header">
                                    <h3>{brand.title()}</h3>
                                    <p>{brand.tagline()}</p>
                                </div>
                                <div class="accommodation-grid">
                                    {
                                        for catalog.by_brand(*brand).map(|property| html! {
                                            <AccommodationCard
                                                key={property.slug.clone()}
                                                property={property.clone()}
                                                on_select={on_select.clone()}
                                            />
                                        })
                                    }
                                </div>
                            </div>
                        })
                    }
                </div>
            </section>
        }
    };

    let details = match (*selected).clone() {
        Some(property) => {
            let key = property.slug.clone();
            html! {
                // Keyed by slug so a different property starts from fresh view state.
                <PropertyDetails key={key} {property} on_close={on_close} />
            }
        }
        None => html! {},
    };

    html! {
        <div class="home">
            <section class="hero">
                <img src="/hero-rocks.jpg" alt="Misty rock formations in forest" class="hero-background" />
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <div class="hero-trust-badge">
                        {"Trusted by "}<strong>{"150+ explorers and hikers"}</strong>
                    </div>
                    <h1 class="hero-title">{"Escape Into Nature"}</h1>
                    <p class="hero-subtitle">
                        {"Led by locals, built for those who want more than a pretty view."}
                        <br/>
                        {"Real connection, fresh air, and stories to take home."}
                    </p>
                    <div class="hero-cta">
                        <button class="btn btn-white" onclick={cta("properties")}>{"Start Your Journey →"}</button>
                        <button class="btn btn-secondary-light" onclick={cta("contact")}>{"Check Availability"}</button>
                    </div>
                </div>
            </section>

            <section id="about" class="about section-large">
                <div class="container about-content">
                    <div class="about-text">
                        <h2>{"Welcome to Journey of Kodai"}</h2>
                        <p>
                            {"Nestled in the heart of lush forests, Journey of Kodai offers an escape from the ordinary. We believe in the transformative power of nature and have created two unique properties that blend adventure, comfort, and sustainability."}
                        </p>
                        <p>
                            {"Each stay is thoughtfully designed to immerse you in the beauty of the forest while providing modern comforts. Whether you're seeking adventure at Mowgli Camp or family fun at Dinosaur Park, we promise an unforgettable experience."}
                        </p>
                    </div>
                    <div class="about-image-grid">
                        <img src="/kodai-9.jpg" alt="Golden Hour Fog" class="about-grid-tall" />
                        <img src="/kodai-4.jpg" alt="Forest Retreat" />
                        <img src="/kodai-8.jpg" alt="Resort Gazebo" />
                        <img src="/kodai-10.jpg" alt="Sunset Clouds" />
                    </div>
                </div>
            </section>

            { properties_section }

            <section id="experiences" class="experiences section-large">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Experiences & Activities"}</h2>
                        <p>{"Create memories that last a lifetime"}</p>
                    </div>
                    <div class="experiences-grid">
                        {
                            for EXPERIENCES.iter().map(|(icon, title, text)| html! {
                                <div class="experience-card">
                                    <div class="experience-icon">{*icon}</div>
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section id="testimonials" class="testimonials section-large">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Guest Testimonials"}</h2>
                        <p>{"What our guests say about their journey. Tap a card to see the next."}</p>
                    </div>
                    <CardStack>
                        {
                            for TESTIMONIALS.iter().map(|(text, author, from)| html! {
                                <div class="testimonial-card">
                                    <p class="testimonial-text">{format!("\"{}\"", text)}</p>
                                    <p class="testimonial-author">{*author}</p>
                                    <p class="testimonial-location">{*from}</p>
                                </div>
                            })
                        }
                    </CardStack>
                </div>
            </section>

            <section id="contact" class="contact section-large">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Location & Contact"}</h2>
                        <p>{"Plan your journey to the forest"}</p>
                    </div>
                    <div class="contact-info">
                        <p>{"📍 Kodaikanal Forest Region, Tamil Nadu"}</p>
                        <p>{"📧 hello@journeyofkodai.com"}</p>
                        <p>{"📱 +91 98765 43210"}</p>
                        <div class="contact-actions">
                            <a href="tel:+919876543210" class="btn btn-white">{"Call Now"}</a>
                            <a href="https://wa.me/919876543210" class="btn btn-secondary" target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                            <a href="mailto:hello@journeyofkodai.com" class="btn btn-secondary">{"Email"}</a>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <p>{"© 2024 Journey of Kodai. All rights reserved. Crafted with 💚 for nature lovers."}</p>
            </footer>

            { details }

            <style>
                {r#"
                .home {
                    font-family: 'Inter', sans-serif;
                    color: #1f2b1c;
                    background: #fdfaf3;
                }

                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 900;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .header.scrolled {
                    background: rgba(13, 40, 32, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.2);
                }

                .nav {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 2rem;
                }

                .nav a, .logo {
                    color: #fff;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                }

                .burger-menu {
                    display: none;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-large {
                    padding: 96px 0;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .hero {
                    position: relative;
                    height: 100vh;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    text-align: center;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(180deg, rgba(0, 0, 0, 0.2), rgba(0, 0, 0, 0.6));
                }

                .hero-content {
                    position: relative;
                    max-width: 760px;
                }

                .hero-title {
                    font-family: 'Playfair Display', serif;
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                }

                .btn {
                    display: inline-block;
                    padding: 0.8rem 1.6rem;
                    border-radius: 999px;
                    border: none;
                    cursor: pointer;
                    font-weight: 600;
                    text-decoration: none;
                }

                .btn-primary { background: #2d5016; color: #fff; }
                .btn-white { background: #fff; color: #2d5016; }
                .btn-secondary, .btn-secondary-light {
                    background: transparent;
                    color: inherit;
                    border: 1px solid currentColor;
                }

                .about-content {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }

                .about-image-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                }

                .about-image-grid img {
                    width: 100%;
                    height: 180px;
                    object-fit: cover;
                    border-radius: 12px;
                }

                .about-image-grid .about-grid-tall {
                    grid-row: span 2;
                    height: 372px;
                }

                .property-block {
                    margin-bottom: 4rem;
                }

                .accommodation-grid, .experiences-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .accommodation-card, .experience-card {
                    border-radius: 16px;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                }

                .accommodation-image img {
                    width: 100%;
                    height: 200px;
                    object-fit: cover;
                }

                .accommodation-info, .experience-card {
                    padding: 1.25rem;
                }

                .accommodation-info .btn {
                    margin-top: 15px;
                    width: 100%;
                }

                .experience-icon {
                    font-size: 2rem;
                }

                .testimonial-card {
                    height: 100%;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    text-align: center;
                }

                .testimonial-author {
                    font-weight: 700;
                    margin-top: 1rem;
                }

                .contact {
                    background: #0d2820;
                    color: #fff;
                }

                .contact-info {
                    text-align: center;
                }

                .contact-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    margin-top: 1.5rem;
                }

                .footer {
                    padding: 2rem;
                    text-align: center;
                    background: #0a1f1a;
                    color: rgba(255, 255, 255, 0.7);
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                        background: none;
                        border: none;
                    }

                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                    }

                    .nav-links, .nav-book-btn {
                        display: none;
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem 2rem;
                        background: rgba(13, 40, 32, 0.97);
                    }

                    .about-content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
