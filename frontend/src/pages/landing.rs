use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::contact_form::ContactForm;
use crate::components::contact_popup::ContactPopup;
use crate::components::footer::Footer;
use crate::components::header::Header;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "/assets/global.png",
        title: "10+ Years of Experience",
        description: "Distributing Ginger to Local and International Markets",
    },
    Feature {
        icon: "/assets/export.png",
        title: "20+ Tons",
        description: "Large Production Volume (20+ Tons / Week)",
    },
    Feature {
        icon: "/assets/countries.png",
        title: "10+ Countries",
        description: "We have shipped our product to India, Pakistan, Bangladesh, China, and many European Countries.",
    },
];

const PRODUCT_TILES: [(&str, &str); 2] = [
    ("/assets/fresh-ginger.png", "Fresh Ginger"),
    ("/assets/dried-ginger.png", "Dried Ginger (Sun-Dried)"),
];

const DIFFERENTIATORS: [(&str, &str, &str); 4] = [
    ("Premium Quality", "Carefully selected and handled at every step.", "/assets/premium-quality.jpg"),
    ("Reliable Supply Chain", "From farm to port, with consistent delivery.", "/assets/supply-chain.png"),
    ("Export Expertise", "We understand documentation, compliance, and logistics.", "/assets/export-expertise.jpg"),
    ("Sustainable & Ethical", "We support local communities and the environment.", "/assets/farmer.png"),
];

#[derive(Properties, PartialEq)]
struct ProductDetailProps {
    title: AttrValue,
    description: AttrValue,
    image: AttrValue,
    specs: Vec<&'static str>,
    #[prop_or_default]
    image_first: bool,
    #[prop_or_default]
    shaded: bool,
}

#[function_component(ProductDetail)]
fn product_detail(props: &ProductDetailProps) -> Html {
    let text = html! {
        <div class="product-text">
            <h2>{props.title.clone()}</h2>
            <p>{props.description.clone()}</p>
            <ul class="product-specs">
                { for props.specs.iter().map(|spec| html! {
                    <li><span class="bullet">{"•"}</span><span>{*spec}</span></li>
                }) }
            </ul>
        </div>
    };
    let image = html! {
        <div class="product-image">
            <img src={props.image.clone()} alt={props.title.clone()} width="500" height="500" />
        </div>
    };

    html! {
        <section class={classes!("product-detail", props.shaded.then(|| "shaded"))}>
            <div class="section-container split">
                if props.image_first {
                    { image }
                    { text }
                } else {
                    { text }
                    { image }
                }
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_popup = use_state(|| false);

    // Start at the hero on first mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_popup = {
        let show_popup = show_popup.clone();
        Callback::from(move |_: MouseEvent| show_popup.set(true))
    };

    let close_popup = {
        let show_popup = show_popup.clone();
        Callback::from(move |_: ()| show_popup.set(false))
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_STYLES}</style>
            <Header />

            // Hero
            <section class="hero">
                <img class="hero-background" src="/assets/hero.png" alt="Mountain landscape with green fields" />
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1>{"Premium Spices, Straight from the Heart of Indonesia"}</h1>
                    <p class="hero-subtitle">
                        {"Edenic delivers the finest quality fresh and dried ginger to global markets — naturally grown, carefully harvested, and reliably exported."}
                    </p>
                    <button class="hero-cta" onclick={open_popup.clone()}>
                        {"Contact Us"}
                    </button>
                </div>
            </section>

            <section id="about" class="about shaded">
                <div class="section-container split">
                    <div class="about-image">
                        <img src="/assets/edenic-logo.jpg" alt="Edenic logo" />
                    </div>
                    <div class="about-text">
                        <div class="eyebrow">{"About Us"}</div>
                        <h2>{"Rooted in Nature. Driven by Integrity."}</h2>
                        <p>
                            {"Edenic is a trusted Indonesian exporter of fresh and dried ginger, committed to sharing the richness of our soil with the world. Based in the heart of Indonesia’s fertile highlands, we partner with local farmers who follow sustainable agricultural practices. With a focus on quality, transparency, and consistency, Edenic ensures that every shipment meets international standards and satisfies our clients' needs."}
                        </p>
                        <p>
                            {"We believe in ethical farming that respects the environment and animals while producing nutritious food. Our commitment to sustainability guides everything we do, from seed to harvest."}
                        </p>
                    </div>
                </div>
            </section>

            <section id="why-us" class="why-us">
                <div class="section-container">
                    <div class="section-heading">
                        <h2>{"Why Choose Us"}</h2>
                        <p>{"Discover what makes us the trusted choice for ginger exports worldwide."}</p>
                    </div>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <img src={feature.icon} alt={feature.title} width="60" height="60" />
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="products" class="products shaded">
                <div class="section-container">
                    <h2 class="centered">{"Our Products"}</h2>
                    <div class="product-tiles">
                        { for PRODUCT_TILES.iter().map(|(src, title)| html! {
                            <div class="product-tile">
                                <img src={*src} alt={*title} width="300" height="300" />
                                <div class="product-tile-overlay">
                                    <p>{*title}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <ProductDetail
                title="Fresh Ginger"
                description="Vibrant, aromatic, and full of flavor — our fresh ginger is carefully selected and packed to retain its natural freshness."
                image="/assets/fresh-ginger.png"
                specs={vec![
                    "Available sizes: 100g+",
                    "Packaging: Mesh bag, carton box",
                    "Shelf Life: 4–6 weeks with proper storage",
                ]}
            />
            <ProductDetail
                title="Dried Ginger (Sun-Dried)"
                description="Our dried ginger offers concentrated flavor and longer shelf life, perfect for medicinal, culinary, or industrial use."
                image="/assets/dried-ginger.png"
                specs={vec![
                    "Moisture Content: <10%",
                    "Packaging: PP bag, paper sack",
                    "Shelf Life: 12 months",
                ]}
                image_first=true
                shaded=true
            />

            <section class="banner">
                <img class="banner-background" src="/assets/hero.png" alt="Ginger fields" />
                <div class="banner-overlay"></div>
                <h2>{"Why Edenic?"}</h2>
            </section>

            <section id="why-edenic" class="why-edenic">
                <div class="section-container">
                    <h2 class="centered">{"What Sets Us Apart"}</h2>
                    <div class="differentiators-grid">
                        { for DIFFERENTIATORS.iter().map(|(name, role, picture)| html! {
                            <div class="differentiator">
                                <img src={*picture} alt={*name} width="250" height="300" />
                                <h3>{*name}</h3>
                                <p>{*role}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact-form" class="contact shaded">
                <div class="section-container">
                    <div class="section-heading">
                        <h2 class="eyebrow">{"Contact Us"}</h2>
                        <h1>{"Get in Touch with Edenic"}</h1>
                        <p>
                            {"Interested in importing fresh or dried ginger from Indonesia?"}
                            <br />
                            {"Let’s talk. Whether you're a wholesaler, distributor, or food processor, we're ready to serve your needs."}
                        </p>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <Footer />

            <button class="whatsapp-float" aria-label="Contact us" onclick={open_popup}>
                <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none"
                    stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z"></path>
                </svg>
            </button>

            if *show_popup {
                <ContactPopup on_close={close_popup} />
            }
        </div>
    }
}

const LANDING_STYLES: &str = r#"
    .landing-page { display: flex; flex-direction: column; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; color: #1f2937; }
    .section-container { max-width: 1200px; margin: 0 auto; padding: 4rem 1.25rem; }
    .section-container.split { display: flex; flex-wrap: wrap; align-items: center; gap: 3rem; }
    .section-container.split > * { flex: 1 1 320px; }
    .shaded { background: #f3f4f6; }
    .centered { text-align: center; }
    .eyebrow { color: #8B4513; font-size: 0.875rem; font-weight: 600; margin-bottom: 0.5rem; }
    .section-heading { text-align: center; margin-bottom: 2.5rem; }
    h2 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }

    .site-header { position: absolute; top: 0; left: 0; right: 0; z-index: 10; }
    .header-content { max-width: 1200px; margin: 0 auto; padding: 1rem; display: flex; justify-content: space-between; align-items: center; }
    .header-logo img { height: 4rem; width: auto; }
    .desktop-nav { display: flex; gap: 1.5rem; }
    .nav-link { color: #fff; text-decoration: none; transition: color 0.2s; }
    .desktop-nav .nav-link:hover { color: #8B4513; }
    .burger-menu { display: none; background: none; border: none; color: #fff; font-size: 1.25rem; cursor: pointer; }
    .mobile-menu { position: absolute; top: 0; left: 0; right: 0; background: #8B4513; padding: 1.5rem; z-index: 20; box-shadow: 0 10px 20px rgba(0,0,0,0.2); }
    .mobile-menu-close { position: absolute; top: 1rem; right: 1rem; background: none; border: none; color: #fff; font-size: 1.5rem; cursor: pointer; }
    .mobile-nav { display: flex; flex-direction: column; gap: 1rem; margin-top: 1.5rem; }

    .hero { position: relative; height: 100vh; overflow: hidden; }
    .hero-background, .banner-background { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
    .hero-overlay { position: absolute; inset: 0; background: rgba(0,0,0,0.3); }
    .hero-content { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; color: #fff; padding: 0 1rem; }
    .hero-content h1 { font-size: 3.5rem; font-weight: 700; max-width: 56rem; letter-spacing: 0.025em; }
    .hero-subtitle { margin-top: 1rem; font-size: 1.25rem; max-width: 48rem; }
    .hero-cta { margin-top: 1.5rem; padding: 0.75rem 2rem; font-size: 1.125rem; font-weight: 600; border: none; border-radius: 0.375rem; background: #8B3E2F; color: #fff; cursor: pointer; }

    .about-image img { width: 100%; max-width: 400px; aspect-ratio: 1 / 1; object-fit: cover; border-radius: 0.5rem; }
    .about-text p { color: #4b5563; margin-bottom: 1rem; }

    .features-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 2rem; text-align: center; }
    .feature-card { display: flex; flex-direction: column; align-items: center; background: #fff; box-shadow: 0 4px 6px rgba(0,0,0,0.1); border-radius: 0.5rem; padding: 1.5rem; }
    .feature-card img { margin-bottom: 1rem; }
    .feature-card p { color: #4b5563; font-size: 0.875rem; }

    .product-tiles { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; }
    .product-tile { position: relative; overflow: hidden; }
    .product-tile img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.3s; }
    .product-tile:hover img { transform: scale(1.1); }
    .product-tile-overlay { position: absolute; inset: 0; background: rgba(0,0,0,0.4); opacity: 0; transition: opacity 0.3s; display: flex; align-items: flex-end; padding: 1rem; color: #fff; font-weight: 500; }
    .product-tile:hover .product-tile-overlay { opacity: 1; }

    .product-text p { color: #4b5563; margin-bottom: 1.5rem; }
    .product-specs { list-style: none; padding: 0; color: #4b5563; }
    .product-specs li { display: flex; align-items: flex-start; margin-bottom: 0.5rem; }
    .bullet { color: #8B4513; margin-right: 0.5rem; }
    .product-image { display: flex; justify-content: center; }
    .product-image img { width: 100%; max-width: 500px; border-radius: 0.5rem; object-fit: cover; }

    .banner { position: relative; padding: 5rem 1rem; text-align: center; overflow: hidden; }
    .banner-overlay { position: absolute; inset: 0; background: rgba(0,0,0,0.5); }
    .banner h2 { position: relative; color: #fff; font-size: 2.25rem; margin: 0; }

    .differentiators-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; text-align: center; }
    .differentiator img { width: 100%; height: 300px; object-fit: cover; border-radius: 0.5rem; margin-bottom: 1rem; }
    .differentiator p { color: #4b5563; font-size: 0.875rem; }

    .contact-form { max-width: 48rem; margin: 0 auto; background: #fff; box-shadow: 0 10px 15px rgba(0,0,0,0.1); border-radius: 0.5rem; padding: 2.5rem; }
    .form-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
    .form-field { margin-top: 1.5rem; }
    .form-row .form-field { margin-top: 0; }
    .form-field label { display: block; color: #374151; font-weight: 500; margin-bottom: 0.25rem; }
    .form-input { width: 100%; box-sizing: border-box; padding: 1rem; border: 1px solid #d1d5db; border-radius: 0.5rem; }
    .form-input:focus { outline: none; box-shadow: 0 0 0 2px #8B4513; }
    .selected-country { margin-top: 0.5rem; color: #4b5563; }
    .form-submit { margin-top: 1.5rem; text-align: center; }
    .submit-button { padding: 1rem 2rem; background: #8B4513; color: #fff; font-weight: 600; border: none; border-radius: 0.5rem; cursor: pointer; }
    .submit-button:hover { background: #A0522D; }

    .country-select { position: relative; }
    .country-select-control { position: relative; }
    .country-select-menu { position: absolute; left: 0; right: 0; z-index: 30; max-height: 240px; overflow-y: auto; margin: 0.25rem 0 0; padding: 0; list-style: none; background: #fff; border: 1px solid #d1d5db; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
    .country-select-option { padding: 0.5rem 1rem; cursor: pointer; }
    .country-select-option:hover { background: #f3f4f6; }
    .country-select-option.selected { background: #8B4513; color: #fff; }
    .country-select-empty { padding: 0.5rem 1rem; color: #9ca3af; }

    .site-footer { background: #8B4513; color: #fff; padding: 3rem 1.25rem; }
    .footer-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
    .footer-line { display: block; margin-bottom: 0.5rem; }
    .site-footer a { color: #fff; text-decoration: underline; }
    .footer-bottom { max-width: 1200px; margin: 2rem auto 0; padding-top: 2rem; border-top: 1px solid #fff; text-align: center; font-size: 0.875rem; }

    .whatsapp-float { position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 50; width: 3rem; height: 3rem; border-radius: 9999px; border: none; background: #22c55e; color: #fff; display: flex; align-items: center; justify-content: center; box-shadow: 0 10px 15px rgba(0,0,0,0.2); cursor: pointer; }
    .whatsapp-float:hover { background: #16a34a; }

    .popup-overlay { position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 60; }
    .popup-panel { background: #fff; border-radius: 0.5rem; padding: 1.5rem; text-align: center; width: 20rem; }
    .popup-panel h2 { font-size: 1.125rem; margin-bottom: 1rem; }
    .popup-panel button { width: 100%; padding: 0.5rem; border: none; border-radius: 0.375rem; cursor: pointer; }
    .popup-whatsapp { background: #22c55e; color: #fff; margin-bottom: 0.75rem; }
    .popup-email { background: #8B4513; color: #fff; }
    .popup-cancel { margin-top: 0.75rem; background: none; color: #6b7280; }

    @media (max-width: 768px) {
        .desktop-nav { display: none; }
        .burger-menu { display: block; }
        .hero-content h1 { font-size: 2.25rem; }
        .contact-form { padding: 1.5rem; }
    }
"#;
