use std::rc::Rc;

use yew::prelude::*;

use crate::components::floating_hearts::FloatingHearts;
use crate::components::gallery::Gallery;
use crate::components::proposal_widget::ProposalWidget;
use crate::config::PageConfig;

#[derive(Properties, PartialEq)]
pub struct ProposalPageProps {
    pub config: Rc<PageConfig>,
}

#[function_component(ProposalPage)]
pub fn proposal_page(props: &ProposalPageProps) -> Html {
    let config = props.config.clone();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="proposal-page">
            <header class="hero">
                <div class="hero-content">
                    <div class="hero-heart">{"❤️"}</div>
                    <h1>{&config.greeting}</h1>
                    <p class="hero-teaser">{&config.teaser}</p>
                </div>
                <div class="scroll-hint">
                    <p>{"Scroll down"}</p>
                </div>
            </header>

            <main class="proposal-main">
                <Gallery items={config.gallery.clone()} />
                <ProposalWidget config={config.clone()} />
            </main>

            <footer class="proposal-footer">
                <p>{"Made with ❤️ just for you"}</p>
            </footer>

            <FloatingHearts count={config.floating_hearts} />

            <style>
                {r#"
                .proposal-page {
                    min-height: 100vh;
                    background: #fff5f7;
                    color: #4a0e0e;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .proposal-page ::selection {
                    background: #fecdd3;
                }
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 1rem;
                    background: linear-gradient(to bottom, #fff1f2, #fff5f7);
                }
                .hero-content {
                    opacity: 0;
                    animation: heroIn 1s forwards;
                }
                .hero-heart {
                    font-size: 4rem;
                    margin-bottom: 1.5rem;
                    animation: heroPulse 2s ease-in-out infinite;
                }
                .hero h1 {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 4.5rem;
                    margin-bottom: 1rem;
                }
                .hero-teaser {
                    font-size: 1.25rem;
                    color: #fb7185;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    font-size: 0.875rem;
                    opacity: 0.5;
                    animation: bob 2s ease-in-out infinite;
                }
                .proposal-main {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .proposal-footer {
                    padding: 2.5rem 0;
                    text-align: center;
                    color: #fda4af;
                    font-size: 0.875rem;
                }
                @keyframes heroIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes heroPulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                @keyframes bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
