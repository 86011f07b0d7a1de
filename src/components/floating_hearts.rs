use rand::rngs::StdRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::proposal::state::{RandUnits, UnitSource};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftingHeart {
    pub start_x_pct: f64,
    pub end_x_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl DriftingHeart {
    fn style(&self) -> String {
        format!(
            "--start-x: {:.2}; --end-x: {:.2}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.start_x_pct, self.end_x_pct, self.duration_s, self.delay_s
        )
    }
}

pub fn drifting_hearts<U: UnitSource + ?Sized>(count: usize, units: &mut U) -> Vec<DriftingHeart> {
    (0..count)
        .map(|i| {
            let start_x_pct = units.next_unit() * 100.0;
            let end_x_pct = units.next_unit() * 100.0 + (i as f64).sin() * 10.0;
            let duration_s = 10.0 + units.next_unit() * 20.0;
            let delay_s = units.next_unit() * 20.0;
            DriftingHeart { start_x_pct, end_x_pct, duration_s, delay_s }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct FloatingHeartsProps {
    pub count: usize,
}

#[function_component(FloatingHearts)]
pub fn floating_hearts(props: &FloatingHeartsProps) -> Html {
    let count = props.count;
    // Rolled once so re-renders don't restart every animation
    let hearts = use_state(move || drifting_hearts(count, &mut RandUnits(StdRng::from_entropy())));

    html! {
        <div class="floating-hearts">
            { for hearts.iter().map(|heart| html! {
                <div class="floating-heart" style={heart.style()}>{"♥"}</div>
            }) }
            <style>
                {r#"
                .floating-hearts {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 0;
                    overflow: hidden;
                }
                .floating-heart {
                    position: absolute;
                    top: 0;
                    left: 0;
                    font-size: 1rem;
                    color: #fecdd3;
                    opacity: 0;
                    animation-name: drift;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                @keyframes drift {
                    0% { opacity: 0; transform: translate(calc(var(--start-x) * 1vw), 110vh); }
                    50% { opacity: 0.5; }
                    100% { opacity: 0; transform: translate(calc(var(--end-x) * 1vw), -10vh); }
                }
                "#}
            </style>
        </div>
    }
}
