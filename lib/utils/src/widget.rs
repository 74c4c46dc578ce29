use chrono::{DateTime, Local, TimeZone, Utc};
use leptos::prelude::*;

use crate::constants::TIMESTAMP_FORMAT;

/// # Formats a timestamp for display
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use threadbox_utils::widget::format_timestamp;
///
/// let timestamp = FixedOffset::east_opt(3600).unwrap()
///     .with_ymd_and_hms(2017, 3, 6, 22, 53, 7).unwrap();
/// assert_eq!(format_timestamp(&timestamp), "2017-03-06 22:53");
/// ```
pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Component displaying a creation instant in local time
#[component]
pub fn TimestampWidget(
    timestamp: DateTime<Utc>,
) -> impl IntoView {
    view! {
        <span class="text-xs xl:text-sm">
            {format_timestamp(&timestamp.with_timezone(&Local))}
        </span>
    }
}

/// Renders a notice below a form when one is set
#[component]
pub fn NoticeWidget(
    #[prop(into)]
    notice: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || notice.read().is_some()>
            <div class="text-sm py-1">{move || notice.get()}</div>
        </Show>
    }.into_any()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::widget::format_timestamp;

    #[test]
    fn test_format_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2017, 3, 6, 22, 53, 7).unwrap();
        assert_eq!(format_timestamp(&timestamp), "2017-03-06 22:53");

        let timestamp = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 59).unwrap();
        assert_eq!(format_timestamp(&timestamp), "2026-01-02 03:04");
    }
}
