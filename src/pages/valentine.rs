use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{floating_hearts::FloatingHearts, runaway_button::RunawayButton};
use crate::config::{BACKGROUND_IMAGE, FOOTER_TEXT, SUCCESS_IMAGE};
use crate::evasive::{compute_anchor, Viewport};
use crate::hearts::HeartField;
use crate::page_state::{InteractionState, PageAction, PagePhase};

fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[derive(Properties, PartialEq)]
pub struct QuestionCardProps {
    pub state: InteractionState,
    pub on_affirm: Callback<()>,
    pub on_evade_trigger: Callback<()>,
}

#[function_component(QuestionCard)]
pub fn question_card(props: &QuestionCardProps) -> Html {
    let on_yes = {
        let on_affirm = props.on_affirm.clone();
        Callback::from(move |_: MouseEvent| on_affirm.emit(()))
    };

    html! {
        <div class="question-card">
            <div class="question-badge">
                <span>{"✨"}</span>
                <span>{"A very important question"}</span>
                <span>{"✨"}</span>
            </div>
            <div class="question-title">
                <h1>
                    {"Will you be my"}
                    <br />
                    <span class="question-highlight">{"Valentine?"}</span>
                </h1>
                <div class="question-underline"></div>
            </div>
            <div class="question-actions">
                <button class="yes-button" onclick={on_yes}>
                    {"Yes "}<span class="yes-heart">{"❤"}</span>
                </button>
                <RunawayButton
                    anchor={props.state.anchor}
                    has_evaded={props.state.has_evaded}
                    on_trigger={props.on_evade_trigger.clone()}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessCardProps {
    pub on_reset: Callback<()>,
}

#[function_component(SuccessCard)]
pub fn success_card(props: &SuccessCardProps) -> Html {
    let on_play_again = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="success-card">
            <div class="success-image">
                <div class="success-glow"></div>
                <div class="success-frame">
                    <img src={SUCCESS_IMAGE} alt="Cute character holding flowers saying yes" width="800" height="800" />
                </div>
                <div class="success-bubble success-bubble--top">{"💖"}</div>
                <div class="success-bubble success-bubble--bottom">{"🥰"}</div>
            </div>
            <h2 class="success-title">{"I knew it!"}</h2>
            <p class="success-text">{"Best decision you've made all day."}</p>
            <button class="reset-button" onclick={on_play_again}>
                {"↻ Play again"}
            </button>
        </div>
    }
}

#[function_component(ValentinePage)]
pub fn valentine_page() -> Html {
    let state = use_reducer(InteractionState::default);
    let rng = use_mut_ref(|| Pcg32::seed_from_u64(clock_seed()));
    // Drawn once per mount, re-renders reuse the same batch
    let field = {
        let rng = rng.clone();
        use_state(move || HeartField::generate(&mut *rng.borrow_mut()))
    };

    {
        let count = field.len();
        use_mount(move || {
            info!("Valentine page mounted with {} hearts", count);
        });
    }
    use_unmount(|| {
        info!("Valentine page unmounted");
    });

    let on_affirm = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::Affirm))
    };

    let on_evade_trigger = {
        let state = state.clone();
        let rng = rng.clone();
        Callback::from(move |_: ()| {
            // Size read now, the window may have been resized since mount
            let anchor = compute_anchor(Viewport::current(), &mut *rng.borrow_mut());
            state.dispatch(PageAction::Evade(anchor));
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::Reset))
    };

    let background_style = format!("background-image: url('{}');", BACKGROUND_IMAGE);

    html! {
        <div class="valentine">
            <div class="valentine-background">
                <div class="valentine-background__image" style={background_style}></div>
                <div class="valentine-background__tint"></div>
            </div>
            <FloatingHearts field={(*field).clone()} />
            <main class="valentine-main">
                {
                    match state.phase() {
                        PagePhase::Idle => html! {
                            <QuestionCard
                                state={*state}
                                on_affirm={on_affirm}
                                on_evade_trigger={on_evade_trigger}
                            />
                        },
                        PagePhase::Affirmed => html! {
                            <SuccessCard on_reset={on_reset} />
                        },
                    }
                }
            </main>
            <footer class="valentine-footer">
                <p>{FOOTER_TEXT}</p>
            </footer>
            <style>
                {r#"
                .valentine {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    overflow: clip;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .valentine ::selection {
                    background: #fbcfe8;
                    color: #831843;
                }

                .valentine-background {
                    position: fixed;
                    inset: 0;
                    z-index: -1;
                }

                .valentine-background__image {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    opacity: 0.4;
                }

                .valentine-background__tint {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(255, 255, 255, 0.6), rgba(253, 242, 248, 0.5), rgba(255, 228, 230, 0.6));
                    backdrop-filter: blur(2px);
                }

                .valentine-main {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 3rem 1rem;
                }

                .question-card {
                    width: 100%;
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                    animation: card-in 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                }

                .question-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1.5rem;
                    margin-bottom: 2rem;
                    background: rgba(255, 255, 255, 0.8);
                    border: 1px solid #fce7f3;
                    border-radius: 9999px;
                    color: #db2777;
                    font-weight: 500;
                    animation: drop-in 0.5s 0.2s both;
                }

                .question-title {
                    position: relative;
                    margin-bottom: 4rem;
                }

                .question-title h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #111827;
                    letter-spacing: -0.025em;
                    animation: rise-in 0.8s 0.3s both;
                }

                .question-highlight {
                    display: inline-block;
                    margin-top: 0.5rem;
                    padding-bottom: 0.5rem;
                    background: linear-gradient(to right, #ec4899, #e11d48);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .question-underline {
                    position: absolute;
                    bottom: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    height: 0.5rem;
                    width: 120px;
                    background: #f9a8d4;
                    border-radius: 9999px;
                    opacity: 0.5;
                    animation: underline-grow 0.8s 0.8s both;
                }

                .question-actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    min-height: 120px;
                }

                .yes-button,
                .no-button {
                    min-width: 200px;
                    padding: 2rem 3rem;
                    border-radius: 1rem;
                    font-size: 1.25rem;
                    font-weight: 500;
                }

                .yes-button {
                    background: #22c55e;
                    color: white;
                    border: none;
                    border-bottom: 4px solid #15803d;
                    box-shadow: 0 10px 15px rgba(187, 247, 208, 0.8);
                    cursor: pointer;
                    transition: all 0.1s;
                }

                .yes-button:hover {
                    background: #16a34a;
                    transform: scale(1.05);
                }

                .yes-button:active {
                    border-bottom-width: 0;
                    transform: translateY(4px) scale(0.95);
                }

                .yes-heart {
                    display: inline-block;
                    margin-left: 0.75rem;
                    animation: pulse 2s infinite;
                }

                .no-button {
                    background: #e5e7eb;
                    color: #4b5563;
                    border: none;
                    border-bottom: 4px solid #9ca3af;
                    cursor: pointer;
                }

                .no-button:hover {
                    background: #d1d5db;
                }

                .no-button.evaded {
                    cursor: not-allowed;
                }

                .no-button-ghost {
                    width: 200px;
                    height: 88px;
                    opacity: 0;
                    pointer-events: none;
                }

                .success-card {
                    width: 100%;
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    animation: card-in 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                }

                .success-image {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    aspect-ratio: 1 / 1;
                    margin-bottom: 2rem;
                    animation: tilt-in 0.8s 0.2s both;
                }

                .success-glow {
                    position: absolute;
                    inset: 0;
                    background: #fbcfe8;
                    border-radius: 9999px;
                    filter: blur(64px);
                    opacity: 0.5;
                    animation: pulse 2s infinite;
                }

                .success-frame {
                    position: relative;
                    z-index: 10;
                    overflow: hidden;
                    border: 8px solid white;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transition: transform 0.5s;
                }

                .success-frame:hover {
                    transform: scale(1.05);
                }

                .success-frame img {
                    display: block;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .success-bubble {
                    position: absolute;
                    z-index: 20;
                    background: white;
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    animation: bob 2s infinite;
                }

                .success-bubble--top {
                    top: -1.5rem;
                    right: -1.5rem;
                    padding: 1rem;
                    font-size: 2.25rem;
                }

                .success-bubble--bottom {
                    bottom: -1rem;
                    left: -1rem;
                    padding: 0.75rem;
                    font-size: 1.875rem;
                    animation-duration: 2.5s;
                    animation-delay: 0.5s;
                }

                .success-title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: #db2777;
                    margin-bottom: 1.5rem;
                    animation: rise-in 0.5s 0.4s both;
                }

                .success-text {
                    font-size: 1.25rem;
                    max-width: 32rem;
                    margin-bottom: 3rem;
                    color: #c679ac;
                    animation: fade-in 0.5s 0.6s both;
                }

                .reset-button {
                    background: transparent;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                    color: #f472b6;
                    cursor: pointer;
                    animation: fade-in 0.5s 1s both;
                }

                .reset-button:hover {
                    color: #db2777;
                    background: #fdf2f8;
                }

                .valentine-footer {
                    position: fixed;
                    bottom: 0;
                    width: 100%;
                    padding: 1rem 0;
                    text-align: center;
                    z-index: 20;
                    pointer-events: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(244, 114, 182, 0.8);
                }

                @keyframes card-in {
                    from { opacity: 0; transform: translateY(20px) scale(0.9); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }

                @keyframes drop-in {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes underline-grow {
                    from { width: 0; }
                    to { width: 120px; }
                }

                @keyframes tilt-in {
                    from { transform: rotate(-10deg) scale(0.8); }
                    to { transform: rotate(0deg) scale(1); }
                }

                @keyframes bob {
                    0% { transform: translateY(0px); }
                    50% { transform: translateY(-10px); }
                    100% { transform: translateY(0px); }
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                @media (min-width: 768px) {
                    .valentine-main {
                        padding: 3rem 2rem;
                    }

                    .question-title h1 {
                        font-size: 4.5rem;
                    }

                    .question-actions {
                        flex-direction: row;
                        gap: 3rem;
                    }

                    .yes-button,
                    .no-button {
                        font-size: 1.5rem;
                    }

                    .success-title {
                        font-size: 6rem;
                    }

                    .success-text {
                        font-size: 1.5rem;
                    }
                }

                @media (min-width: 1024px) {
                    .question-title h1 {
                        font-size: 6rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
