use leptos::prelude::*;

use threadbox_core::comment::{add_reply, get_replies, Comment};
use threadbox_core::state::Viewer;
use threadbox_utils::constants::{COMMENT_PLACEHOLDER, EMPTY_COMMENT_WARNING, MAX_COMMENT_LENGTH};
use threadbox_utils::errors::{AppError, ErrorDisplay};
use threadbox_utils::icons::LoadingIcon;
use threadbox_utils::widget::{NoticeWidget, TimestampWidget};

/// # Returns the label of the lazy reply-loading affordance
///
/// ```
/// use threadbox_app::comment::reply_count_label;
///
/// assert_eq!(reply_count_label(3), "Show replies (3)");
/// ```
pub fn reply_count_label(count: usize) -> String {
    format!("Show replies ({count})")
}

/// Appends a freshly created reply to a comment's rendered reply list
pub fn push_created_reply(reply: Comment, reply_vec: RwSignal<Vec<Comment>>) {
    reply_vec.update(|replies| replies.push(reply));
}

/// Appends a fetched reply batch to a comment's rendered reply list, keeping
/// backend order. A failed load leaves the list untouched and captures the
/// error for display.
pub fn apply_fetched_replies(
    load_result: Result<Vec<Comment>, AppError>,
    reply_vec: RwSignal<Vec<Comment>>,
    load_error: RwSignal<Option<AppError>>,
) {
    match load_result {
        Ok(mut fetched) => reply_vec.update(|replies| replies.append(&mut fetched)),
        Err(e) => load_error.set(Some(e)),
    }
}

/// Component displaying a list of comments
#[component]
pub fn CommentList(
    #[prop(into)]
    comments: Signal<Vec<Comment>>,
    viewer: Viewer,
) -> impl IntoView {
    view! {
        <ul class="commentlist">
            <For
                each=move || comments.get().into_iter()
                key=|comment| comment.id
                children=move |comment| view! { <CommentItem comment viewer/> }.into_any()
            />
        </ul>
    }.into_any()
}

/// Component displaying a single comment with its reply controls. Each item
/// owns its reply form and its lazily created reply list.
#[component]
pub fn CommentItem(
    comment: Comment,
    viewer: Viewer,
) -> impl IntoView {
    let comment_id = comment.id;
    let reply_count = comment.reply_count();

    let reply_vec = RwSignal::new(Vec::<Comment>::new());
    let show_reply_form = RwSignal::new(false);
    let replies_requested = RwSignal::new(false);
    let is_loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<AppError>);

    let _replies_resource = LocalResource::new(
        move || async move {
            if !replies_requested.get() {
                return;
            }
            is_loading.set(true);
            load_error.set(None);
            let load_result = get_replies(comment_id).await;
            if load_result.is_err() {
                // let the viewer retry through the affordance
                replies_requested.set(false);
            }
            apply_fetched_replies(load_result, reply_vec, load_error);
            is_loading.set(false);
        }
    );

    view! {
        <li class="comment" data-cid=comment_id>
            <header class="comment-header">
                <a href="#">{comment.author}</a>
                " - "
                <TimestampWidget timestamp=comment.timestamp/>
            </header>
            <section class="comment-body">
                <p>{comment.body}</p>
            </section>
            <section class="comment-replies">
                <Show when=move || viewer.is_authenticated>
                    <Show when=move || !show_reply_form.get()>
                        <a
                            href="#"
                            class="show-reply-form-btn"
                            on:click=move |ev| {
                                ev.prevent_default();
                                show_reply_form.set(true);
                            }
                        >
                            "Reply"
                        </a>
                    </Show>
                    <ReplyForm comment_id reply_vec show_form=show_reply_form/>
                </Show>
                <Show when=move || (reply_count > 0 && !replies_requested.get() && !is_loading.get())>
                    <a
                        href="#"
                        class="show-replies-btn"
                        on:click=move |ev| {
                            ev.prevent_default();
                            replies_requested.set(true);
                        }
                    >
                        {reply_count_label(reply_count)}
                    </a>
                </Show>
                <Show when=move || is_loading.get()>
                    <LoadingIcon/>
                </Show>
                <Show when=move || load_error.read().is_some()>
                {
                    let error = load_error.get().unwrap();
                    view! { <ErrorDisplay error/> }
                }
                </Show>
                <Show when=move || !reply_vec.read().is_empty()>
                    <ul class="commentlist">
                        <For
                            each=move || reply_vec.get().into_iter()
                            key=|reply| reply.id
                            children=move |reply| view! { <CommentItem comment=reply viewer/> }.into_any()
                        />
                    </ul>
                </Show>
            </section>
        </li>
    }.into_any()
}

/// Form to publish a reply under a comment
#[component]
pub fn ReplyForm(
    comment_id: i64,
    reply_vec: RwSignal<Vec<Comment>>,
    show_form: RwSignal<bool>,
) -> impl IntoView {
    let body = RwSignal::new(String::new());
    let warning = RwSignal::new(None::<String>);

    let send_reply_action = Action::new_unsync(move |reply_body: &String| {
        let reply_body = reply_body.clone();
        async move { add_reply(comment_id, &reply_body).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(reply)) = send_reply_action.value().get() {
            push_created_reply(reply, reply_vec);
            body.set(String::new());
            show_form.set(false);
        }
    });

    let on_send = move |_| {
        if send_reply_action.pending().get_untracked() {
            return;
        }
        let reply_body = body.get_untracked();
        if reply_body.is_empty() {
            warning.set(Some(String::from(EMPTY_COMMENT_WARNING)));
        } else {
            warning.set(None);
            send_reply_action.dispatch(reply_body);
        }
    };

    let on_abort = move |_| {
        body.set(String::new());
        warning.set(None);
        show_form.set(false);
    };

    view! {
        <Show when=move || show_form.get()>
            <div class="reply-form">
                <div class="form-group reply-body">
                    <textarea
                        class="form-control"
                        placeholder=COMMENT_PLACEHOLDER
                        rows="3"
                        maxlength=MAX_COMMENT_LENGTH.to_string()
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    class="send-reply-btn"
                    disabled=move || send_reply_action.pending().get()
                    on:click=on_send
                >
                    "Send Reply"
                </button>
                <button class="abort-reply-btn" on:click=on_abort>
                    "Abort"
                </button>
                <NoticeWidget notice=warning/>
                { move || match send_reply_action.value().get() {
                    Some(Err(error)) => Some(view! { <ErrorDisplay error/> }),
                    _ => None,
                }}
            </div>
        </Show>
    }.into_any()
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;
    use threadbox_core::comment::Comment;
    use threadbox_utils::errors::AppError;

    use crate::comment::{apply_fetched_replies, push_created_reply, reply_count_label};

    fn test_comment(id: i64) -> Comment {
        Comment {
            id,
            author: format!("author_{id}"),
            body: format!("body_{id}"),
            ..Comment::default()
        }
    }

    #[test]
    fn test_reply_count_label() {
        assert_eq!(reply_count_label(1), "Show replies (1)");
        assert_eq!(reply_count_label(27), "Show replies (27)");
    }

    #[test]
    fn test_push_created_reply() {
        let owner = Owner::new();
        owner.set();
        let reply_vec = RwSignal::new(Vec::new());

        push_created_reply(test_comment(1), reply_vec);
        push_created_reply(test_comment(2), reply_vec);

        assert_eq!(
            reply_vec.read().iter().map(|reply| reply.id).collect::<Vec<_>>(),
            vec![1, 2],
        );
    }

    #[test]
    fn test_apply_fetched_replies() {
        let owner = Owner::new();
        owner.set();
        let reply_vec = RwSignal::new(Vec::new());
        let load_error = RwSignal::new(None);

        apply_fetched_replies(Ok(vec![test_comment(1), test_comment(2)]), reply_vec, load_error);
        assert_eq!(reply_vec.read().len(), 2);
        assert_eq!(load_error.read(), None);

        apply_fetched_replies(Ok(vec![test_comment(3)]), reply_vec, load_error);
        assert_eq!(
            reply_vec.read().iter().map(|reply| reply.id).collect::<Vec<_>>(),
            vec![1, 2, 3],
        );
        assert_eq!(load_error.read(), None);

        let error = AppError::ApiError(502);
        apply_fetched_replies(Err(error.clone()), reply_vec, load_error);
        assert_eq!(reply_vec.read().len(), 3);
        assert_eq!(load_error.read(), Some(error));
    }
}
