use yew::prelude::*;

use crate::hearts::HeartField;

#[derive(Properties, PartialEq)]
pub struct FloatingHeartsProps {
    pub field: HeartField,
}

#[function_component(FloatingHearts)]
pub fn floating_hearts(props: &FloatingHeartsProps) -> Html {
    let hearts = props.field.hearts();

    html! {
        <div class="hearts-layer" aria-hidden="true">
            {
                hearts.iter().map(|heart| {
                    html! {
                        <div key={heart.id} class="floating-heart" style={heart.inline_style()}>
                            {"❤"}
                        </div>
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                .hearts-layer {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                    z-index: 0;
                }

                .floating-heart {
                    position: absolute;
                    top: 0;
                    color: rgba(249, 168, 212, 0.4);
                    font-size: 2rem;
                    opacity: 0;
                    animation-name: heart-float;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                    animation-fill-mode: both;
                }

                @keyframes heart-float {
                    0% {
                        opacity: 0;
                        transform: translateY(110vh) rotate(0deg) scale(var(--heart-scale));
                    }
                    33% {
                        transform: translateY(70vh) rotate(45deg) scale(var(--heart-scale));
                    }
                    50% {
                        opacity: 0.8;
                    }
                    66% {
                        transform: translateY(30vh) rotate(-45deg) scale(var(--heart-scale));
                    }
                    100% {
                        opacity: 0;
                        transform: translateY(-10vh) rotate(0deg) scale(var(--heart-scale));
                    }
                }

                @media (min-width: 768px) {
                    .floating-heart {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
