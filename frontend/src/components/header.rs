use yew::prelude::*;
use web_sys::MouseEvent;

const NAV_LINKS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Why Us", "#why-us"),
    ("Products", "#products"),
    ("Why Edenic", "#why-edenic"),
    ("Contact", "#contact-form"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(true);
        })
    };

    // Anchor links still scroll; only the menu state changes here.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class="site-header">
            <div class="header-content">
                <a href="/" class="header-logo">
                    <img src="/assets/edenic-logo.jpg" alt="Edenic Logo" width="80" height="80" />
                </a>

                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|(name, href)| html! {
                        <a key={*name} href={*href} class="nav-link">{*name}</a>
                    }) }
                </nav>

                <button class="burger-menu" aria-label="Open Menu" onclick={open_menu}>
                    {"☰"}
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    <button class="mobile-menu-close" aria-label="Close Menu" onclick={close_menu.clone()}>
                        {"✕"}
                    </button>
                    <nav class="mobile-nav">
                        { for NAV_LINKS.iter().map(|(name, href)| html! {
                            <a key={*name} href={*href} class="nav-link" onclick={close_menu.clone()}>
                                {*name}
                            </a>
                        }) }
                    </nav>
                </div>
            }
        </header>
    }
}
