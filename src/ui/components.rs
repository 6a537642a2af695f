/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TriggerButtonProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(TriggerButton)]
pub fn trigger_button(props: &TriggerButtonProps) -> Html {
    let base_style = "width: 100%; padding: 12px 16px; border: none; border-radius: 4px; font-size: 14px; font-weight: 500; background-color: #1a73e8; color: white; cursor: pointer; transition: all 0.2s;";

    let disabled_style = if props.disabled {
        "opacity: 0.6; cursor: not-allowed;"
    } else {
        ""
    };

    let style = format!("{} {}", base_style, disabled_style);

    html! {
        <button
            id={props.id.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            style={style}
        >
            {props.label.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: AttrValue,
}

/// Inline red notice shown under the button while an error is displayed
#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div
            class="error-notice"
            style="color: red; font-size: 12px; margin-top: 10px; padding: 10px; background: #ffebee; border-radius: 3px;"
        >
            {props.message.clone()}
        </div>
    }
}
