use leptos::prelude::*;

use threadbox_core::comment::add_comment;
use threadbox_core::state::{Viewer, WidgetBootstrap};
use threadbox_utils::constants::{COMMENT_PLACEHOLDER, COMMENT_SENT_MESSAGE, GUEST_NOTICE, MAX_COMMENT_LENGTH};
use threadbox_utils::errors::ErrorDisplay;
use threadbox_utils::widget::NoticeWidget;

use crate::comment::CommentList;

/// Root component of the comment widget
#[component]
pub fn CommentWidget(
    bootstrap: WidgetBootstrap,
) -> impl IntoView {
    let viewer = bootstrap.viewer();
    let analysis_id = bootstrap.analysis_id;
    let comment_vec = RwSignal::new(bootstrap.comments);

    view! {
        <section id="id_comments" class="comment-widget">
            <CommentComposer analysis_id viewer/>
            <CommentList comments=comment_vec viewer/>
        </section>
    }.into_any()
}

/// Form to publish a top-level comment under the analysis. Guests see a
/// notice instead of the form.
#[component]
pub fn CommentComposer(
    analysis_id: i64,
    viewer: Viewer,
) -> impl IntoView {
    if !viewer.is_authenticated {
        return view! {
            <div id="id_comment_form" class="comment-form">
                {GUEST_NOTICE}
            </div>
        }.into_any();
    }

    let body = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);

    let send_comment_action = Action::new_unsync(move |comment_body: &String| {
        let comment_body = comment_body.clone();
        async move { add_comment(analysis_id, &comment_body).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(comment)) = send_comment_action.value().get() {
            log::debug!("Created comment {} on analysis {analysis_id}", comment.id);
            body.set(String::new());
            // TODO append the created comment to the visible list instead of
            // only acknowledging; needs an ordering decision against the
            // comments already known to the host page
            notice.set(Some(String::from(COMMENT_SENT_MESSAGE)));
        }
    });

    let on_send = move |_| {
        if send_comment_action.pending().get_untracked() {
            return;
        }
        notice.set(None);
        send_comment_action.dispatch(body.get_untracked());
    };

    view! {
        <div id="id_comment_form" class="comment-form">
            <div class="form-group">
                <input
                    id="id_body"
                    type="text"
                    class="form-control"
                    placeholder=COMMENT_PLACEHOLDER
                    maxlength=MAX_COMMENT_LENGTH.to_string()
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                />
            </div>
            <button
                id="id_send_comment_btn"
                data-aid=analysis_id
                disabled=move || send_comment_action.pending().get()
                on:click=on_send
            >
                "Send Comment"
            </button>
            <NoticeWidget notice/>
            { move || match send_comment_action.value().get() {
                Some(Err(error)) => Some(view! { <ErrorDisplay error/> }),
                _ => None,
            }}
        </div>
    }.into_any()
}
