use dioxus::prelude::*;
use dioxus_primitives::calendar as prim;

pub use time::{Date, Month};
use time::{OffsetDateTime, UtcOffset};

#[component]
pub fn Calendar(mut props: prim::CalendarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "legal-calendar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Calendar { ..props }
    }
}

#[component]
pub fn CalendarHeader(mut props: prim::CalendarHeaderProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "legal-calendar-header",
        None,
        false,
    ));

    rsx! {
        prim::CalendarHeader { ..props }
    }
}

#[component]
pub fn CalendarNavigation(mut props: prim::CalendarNavigationProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "legal-calendar-navigation",
        None,
        false,
    ));

    rsx! {
        prim::CalendarNavigation { ..props }
    }
}

#[component]
pub fn CalendarPreviousMonthButton(mut props: prim::CalendarPreviousMonthButtonProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "legal-calendar-nav-btn",
        None,
        false,
    ));

    rsx! {
        prim::CalendarPreviousMonthButton { ..props }
    }
}

#[component]
pub fn CalendarNextMonthButton(mut props: prim::CalendarNextMonthButtonProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "legal-calendar-nav-btn",
        None,
        false,
    ));

    rsx! {
        prim::CalendarNextMonthButton { ..props }
    }
}

#[component]
pub fn CalendarMonthTitle(mut props: prim::CalendarMonthTitleProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "legal-calendar-month-title",
        None,
        false,
    ));

    rsx! {
        prim::CalendarMonthTitle { ..props }
    }
}

#[component]
pub fn CalendarGrid(mut props: prim::CalendarGridProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "legal-calendar-grid", None, false));

    rsx! {
        prim::CalendarGrid { ..props }
    }
}

/// Calendar day as (year, month, day), matching the display-date keys of
/// the dashboard records.
pub fn day_key(date: Date) -> (i32, u8, u8) {
    (date.year(), date.month() as u8, date.day())
}

/// Calendar date of `now` at a fixed offset of `offset_hours` from UTC.
/// Offsets outside what `time` accepts fall back to UTC.
pub fn local_date(now: OffsetDateTime, offset_hours: i8) -> Date {
    let offset = UtcOffset::from_hms(offset_hours, 0, 0).unwrap_or(UtcOffset::UTC);
    now.to_offset(offset).date()
}

/// Today's date at `offset_hours` from UTC.
pub fn today(offset_hours: i8) -> Date {
    local_date(OffsetDateTime::now_utc(), offset_hours)
}
