use yew::prelude::*;

use crate::evasive::ButtonAnchor;

#[derive(Properties, PartialEq)]
pub struct RunawayButtonProps {
    pub anchor: ButtonAnchor,
    pub has_evaded: bool,
    /// Fired on pointer enter, touch start and click
    pub on_trigger: Callback<()>,
}

/// The "No" button. It never decides where to go, it only reports triggers
/// and draws itself at the anchor it is given.
#[function_component(RunawayButton)]
pub fn runaway_button(props: &RunawayButtonProps) -> Html {
    let RunawayButtonProps { anchor, has_evaded, on_trigger } = props;

    let on_mouse_enter = {
        let on_trigger = on_trigger.clone();
        Callback::from(move |_: MouseEvent| on_trigger.emit(()))
    };

    let on_touch_start = {
        let on_trigger = on_trigger.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default(); // no synthetic click after the touch
            on_trigger.emit(());
        })
    };

    let on_click = {
        let on_trigger = on_trigger.clone();
        Callback::from(move |_: MouseEvent| on_trigger.emit(()))
    };

    let style = format!(
        "{} transition: all 0.3s ease-out; z-index: 50;",
        anchor.inline_style()
    );

    html! {
        <>
            <button
                class={classes!("no-button", (*has_evaded).then(|| "evaded"))}
                style={style}
                onmouseenter={on_mouse_enter}
                ontouchstart={on_touch_start}
                onclick={on_click}
            >
                {"No"}
            </button>
            {
                if anchor.is_pinned() {
                    // Keeps the question card from collapsing once the button is fixed
                    html! { <div class="no-button-ghost" aria-hidden="true"></div> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
