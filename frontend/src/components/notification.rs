use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

#[derive(Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: AttrValue,
    #[prop_or(NotificationKind::Success)]
    pub kind: NotificationKind,
    pub on_dismiss: Callback<()>,
}

/// Toast in the bottom corner, dismissed by click or after a few seconds.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::NOTIFICATION_MS, move || on_dismiss.emit(()));
                // Dropping the timeout cancels it if the toast goes away first.
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let kind_class = match props.kind {
        NotificationKind::Success => "notification-success",
        NotificationKind::Error => "notification-error",
    };

    html! {
        <div class={classes!("notification", kind_class)} role="status" {onclick}>
            <style>
                {r#"
                    @keyframes slideIn {
                        from { transform: translateY(120%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .notification {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        max-width: 360px;
                        background: rgba(26, 26, 26, 0.95);
                        backdrop-filter: blur(10px);
                        border-radius: 16px;
                        padding: 1rem 1.25rem;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.3);
                        animation: slideIn 0.5s ease-out forwards;
                        z-index: 100;
                        color: #eee;
                        cursor: pointer;
                    }
                    .notification-success {
                        border: 1px solid rgba(79, 227, 193, 0.4);
                    }
                    .notification-error {
                        border: 1px solid rgba(255, 99, 99, 0.5);
                    }
                    @media (max-width: 768px) {
                        .notification {
                            left: 1rem;
                            right: 1rem;
                            bottom: 1rem;
                        }
                    }
                "#}
            </style>
            {props.message.clone()}
        </div>
    }
}
