use leptos::prelude::*;

#[component]
pub fn CommentIcon(#[prop(default = "h-4 w-4")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/comment.svg" class=class/>
    }
}

#[component]
pub fn ReplyIcon(#[prop(default = "h-4 w-4")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/reply.svg" class=class/>
    }
}

#[component]
pub fn LoadingIcon(#[prop(default = "h-4 w-4 animate-spin")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/loading.svg" class=class/>
    }
}

#[component]
pub fn InvalidRequestIcon(#[prop(default = "h-8 w-8")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/invalid_request.svg" class=class/>
    }
}

#[component]
pub fn NetworkErrorIcon(#[prop(default = "h-8 w-8")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/network.svg" class=class/>
    }
}

#[component]
pub fn InternalErrorIcon(#[prop(default = "h-8 w-8")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/internal.svg" class=class/>
    }
}
