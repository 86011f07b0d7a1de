use std::rc::Rc;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys::Element;
use yew::prelude::*;

use crate::config::PageConfig;
use crate::proposal::controller::ProposalController;
use crate::proposal::scene::{proposal_scene, NoButtonPose, ProposalScene};
use crate::proposal::state::{ContainerBounds, RandUnits, ShakeTicket};
use crate::proposal::timer::TimeoutScheduler;

#[derive(Properties, PartialEq)]
pub struct ProposalWidgetProps {
    pub config: Rc<PageConfig>,
}

pub enum ProposalMsg {
    Accept,
    Evade,
    Settle(ShakeTicket),
}

pub struct ProposalWidget {
    controller: ProposalController<TimeoutScheduler, RandUnits<StdRng>>,
    container: NodeRef,
}

impl Component for ProposalWidget {
    type Message = ProposalMsg;
    type Properties = ProposalWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: ProposalController::new(
                TimeoutScheduler,
                RandUnits(StdRng::from_entropy()),
                ctx.props().config.evade,
            ),
            container: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ProposalMsg::Accept => self.controller.accept(),
            ProposalMsg::Evade => {
                let Some(bounds) = self.container_bounds() else {
                    debug!("Evade ignored, container not mounted");
                    return false;
                };
                let link = ctx.link().clone();
                self.controller.evade(bounds, move |ticket| {
                    link.send_message(ProposalMsg::Settle(ticket));
                })
            }
            ProposalMsg::Settle(ticket) => self.controller.settle(ticket),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let card = match proposal_scene(self.controller.model()) {
            ProposalScene::Question { no_button, show_taunt } => {
                self.question_card(ctx, no_button, show_taunt.then(|| config.taunt.as_str()))
            }
            ProposalScene::Celebration => celebration_card(),
        };

        html! {
            <section ref={self.container.clone()} class="proposal-section">
                { card }
                <style>{PROPOSAL_CSS}</style>
            </section>
        }
    }
}

impl ProposalWidget {
    fn container_bounds(&self) -> Option<ContainerBounds> {
        let rect = self.container.cast::<Element>()?.get_bounding_client_rect();
        Some(ContainerBounds::new(rect.width(), rect.height()))
    }

    fn question_card(&self, ctx: &Context<Self>, no_button: NoButtonPose, taunt: Option<&str>) -> Html {
        let accept = ctx.link().callback(|_: MouseEvent| ProposalMsg::Accept);
        let evade_on_enter = ctx.link().callback(|_: MouseEvent| ProposalMsg::Evade);
        let evade_on_click = ctx.link().callback(|_: MouseEvent| ProposalMsg::Evade);

        html! {
            <div key="proposal-card" class="proposal-card">
                if let Some(taunt) = taunt {
                    <p class="proposal-taunt">{taunt}</p>
                }
                <div class="proposal-stars">{"✨"}</div>
                <h3>{&ctx.props().config.question}</h3>
                <div class="proposal-buttons">
                    <button class="proposal-yes" onclick={accept}>{"Yes! ❤️"}</button>
                    <button
                        class={classes!("proposal-no", no_button.wobble_class())}
                        style={format!("transform: {};", no_button.transform())}
                        onmouseenter={evade_on_enter}
                        onclick={evade_on_click}
                    >
                        {"No"}
                    </button>
                </div>
            </div>
        }
    }
}

fn celebration_card() -> Html {
    html! {
        <div key="success-card" class="celebration-card">
            <div class="celebration-bar"></div>
            <div class="celebration-orb"></div>
            <div class="celebration-body">
                <div class="celebration-icons">
                    <span class="pulse" style="animation-delay: 0s;">{"❤️"}</span>
                    <span class="pulse" style="animation-delay: 0.2s;">{"✨"}</span>
                    <span class="pulse" style="animation-delay: 0.4s;">{"❤️"}</span>
                </div>
                <h2>{"I Knew You'd Say Yes!"}</h2>
                <div class="celebration-letter">
                    <p>
                        {"From the moment you walked into my life, everything changed. \
                          You are my favorite thought, my biggest inspiration, and the person \
                          I want to share all my tomorrows with."}
                    </p>
                    <p class="celebration-quote">{"\"You are the best thing that's ever been mine.\""}</p>
                    <p>
                        {"Thank you for being you. I promise to cherish every moment, \
                          to make you laugh every day, and to love you with all my heart."}
                    </p>
                </div>
                <div class="celebration-hearts">
                    { for (0..5).map(|i| html! {
                        <span class="bounce" style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}>{"♥"}</span>
                    }) }
                </div>
                <p class="celebration-signoff">{"Forever & Always"}</p>
            </div>
        </div>
    }
}

const PROPOSAL_CSS: &str = r#"
.proposal-section {
    position: relative;
    min-height: 600px;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 5rem 0;
}
.proposal-card {
    position: relative;
    z-index: 10;
    width: 100%;
    max-width: 28rem;
    background: #fff;
    padding: 3rem;
    border-radius: 2rem;
    border: 1px solid #ffe4e6;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    text-align: center;
    animation: cardIn 0.4s ease-out;
}
.proposal-stars {
    font-size: 2.5rem;
    margin-bottom: 1.5rem;
}
.proposal-card h3 {
    font-family: Georgia, serif;
    font-style: italic;
    font-size: 1.875rem;
    margin-bottom: 2rem;
}
.proposal-buttons {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1.5rem;
}
.proposal-yes {
    padding: 1rem 2.5rem;
    background: #f43f5e;
    color: #fff;
    border: none;
    border-radius: 9999px;
    font-weight: 600;
    cursor: pointer;
    transition: all 0.2s;
}
.proposal-yes:hover {
    background: #e11d48;
    transform: scale(1.05);
}
.proposal-no {
    padding: 1rem 2.5rem;
    background: #f5f5f4;
    color: #a8a29e;
    border: 1px solid #e7e5e4;
    border-radius: 9999px;
    font-weight: 600;
    cursor: default;
    transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
}
.proposal-no.wobble-even {
    animation: wobble-even 0.5s ease-in-out;
}
.proposal-no.wobble-odd {
    animation: wobble-odd 0.5s ease-in-out;
}
.proposal-taunt {
    position: absolute;
    top: -2.5rem;
    left: 0;
    right: 0;
    color: #fb7185;
    font-size: 0.875rem;
    font-weight: 500;
    animation: fadeIn 0.3s;
}
.celebration-card {
    position: relative;
    overflow: hidden;
    width: 100%;
    max-width: 42rem;
    background: #fff;
    padding: 3rem;
    border-radius: 3rem;
    border: 4px solid #ffe4e6;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    text-align: center;
    animation: celebrateIn 0.6s ease-out;
}
.celebration-bar {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 0.5rem;
    background: linear-gradient(to right, #fda4af, #f43f5e, #fda4af);
}
.celebration-orb {
    position: absolute;
    top: -5rem;
    right: -5rem;
    width: 16rem;
    height: 16rem;
    background: #fff1f2;
    border-radius: 50%;
    opacity: 0.5;
    animation: spin 20s linear infinite;
}
.celebration-body {
    position: relative;
    z-index: 10;
}
.celebration-icons {
    display: flex;
    justify-content: center;
    gap: 1rem;
    margin-bottom: 2rem;
    font-size: 3rem;
}
.celebration-card h2 {
    font-family: Georgia, serif;
    font-style: italic;
    font-size: 3rem;
    color: #e11d48;
    margin-bottom: 1.5rem;
}
.celebration-letter {
    font-size: 1.125rem;
    line-height: 1.75;
    color: #57534e;
    margin-bottom: 2.5rem;
}
.celebration-quote {
    font-family: Georgia, serif;
    font-style: italic;
    font-size: 1.5rem;
    color: #fb7185;
}
.celebration-hearts {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    color: #fda4af;
    font-size: 1.5rem;
}
.celebration-signoff {
    color: #f43f5e;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    font-size: 0.875rem;
}
.pulse {
    display: inline-block;
    animation: pulse 1.5s infinite;
}
.bounce {
    display: inline-block;
    animation: bounce 2s infinite;
}
@keyframes wobble-even {
    0% { rotate: 0deg; }
    33% { rotate: 10deg; }
    66% { rotate: -10deg; }
    100% { rotate: 0deg; }
}
@keyframes wobble-odd {
    0% { rotate: 0deg; }
    33% { rotate: 10deg; }
    66% { rotate: -10deg; }
    100% { rotate: 0deg; }
}
@keyframes cardIn {
    from { opacity: 0; transform: scale(0.9); }
    to { opacity: 1; transform: scale(1); }
}
@keyframes celebrateIn {
    from { opacity: 0; transform: translateY(50px) scale(0.8); }
    to { opacity: 1; transform: translateY(0) scale(1); }
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes spin {
    to { transform: rotate(360deg); }
}
@keyframes pulse {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.2); }
}
@keyframes bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
}
"#;
