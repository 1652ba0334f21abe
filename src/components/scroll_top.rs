use yew::prelude::*;

use crate::scroll::dom::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub visible: bool,
}

/// Round button in the bottom-right corner that zooms in once the page has
/// scrolled past the threshold.
#[function_component(ScrollTop)]
pub fn scroll_top(props: &ScrollTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <div class={classes!("scroll-top", props.visible.then(|| "zoomed"))} role="presentation">
            <button class="scroll-top-fab" aria-label="scroll back to top" {onclick}>{"↑"}</button>
            <style>
                {r#"
                .scroll-top {
                    position: fixed;
                    bottom: 16px;
                    right: 16px;
                    transform: scale(0);
                    transition: transform 0.225s cubic-bezier(0.4, 0, 0.2, 1);
                    z-index: 1050;
                }
                .scroll-top.zoomed {
                    transform: scale(1);
                }
                .scroll-top-fab {
                    width: 40px;
                    height: 40px;
                    border: none;
                    border-radius: 50%;
                    background-color: var(--primary);
                    color: white;
                    font-size: 1.2rem;
                    cursor: pointer;
                    box-shadow: 0 3px 5px var(--shadow);
                }
                "#}
            </style>
        </div>
    }
}
